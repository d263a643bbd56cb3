//! Given steps for task classification BDD scenarios.

use super::world::{ClassificationWorld, run_async};
use chrono::{DateTime, TimeDelta, Utc};
use eisenhower::task::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the clock reads "{instant}""#)]
fn clock_reads(world: &mut ClassificationWorld, instant: String) -> Result<(), eyre::Report> {
    world.now = DateTime::parse_from_rfc3339(&instant)
        .wrap_err("parse scenario clock")?
        .with_timezone(&Utc);
    Ok(())
}

fn create(world: &mut ClassificationWorld, request: CreateTaskRequest) -> eyre::Result<()> {
    let task = run_async(world.task_service().create(&world.owner, request))
        .wrap_err("create task for classification scenario")?;
    world.tasks.insert(task.title().as_str().to_owned(), task);
    Ok(())
}

#[given(r#"an important task "{title}" due in {hours:i64} hours"#)]
fn important_task_due(
    world: &mut ClassificationWorld,
    title: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    let deadline = world.now + TimeDelta::hours(hours);
    create(world, CreateTaskRequest::new(title, true).with_deadline(deadline))
}

#[given(r#"an unimportant task "{title}" due in {hours:i64} hours"#)]
fn unimportant_task_due(
    world: &mut ClassificationWorld,
    title: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    let deadline = world.now + TimeDelta::hours(hours);
    create(world, CreateTaskRequest::new(title, false).with_deadline(deadline))
}

#[given(r#"an important task "{title}" with no deadline"#)]
fn important_task_without_deadline(
    world: &mut ClassificationWorld,
    title: String,
) -> Result<(), eyre::Report> {
    create(world, CreateTaskRequest::new(title, true))
}
