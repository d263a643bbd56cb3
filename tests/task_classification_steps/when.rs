//! When steps for task classification BDD scenarios.

use super::world::{ClassificationWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the task "{title}" is completed"#)]
fn complete_task(world: &mut ClassificationWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&title)?.id();
    let completed = run_async(world.task_service().complete(&world.owner, task_id))
        .wrap_err("complete task in scenario")?;
    world.tasks.insert(title, completed);
    Ok(())
}

#[when("statistics are requested")]
fn request_statistics(world: &mut ClassificationWorld) -> Result<(), eyre::Report> {
    let statistics = run_async(world.statistics_service().report_for(&world.owner))
        .wrap_err("aggregate statistics in scenario")?;
    world.statistics = Some(statistics);
    Ok(())
}
