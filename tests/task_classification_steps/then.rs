//! Then steps for task classification BDD scenarios.

use super::world::ClassificationWorld;
use eisenhower::statistics::domain::TaskStatistics;
use eisenhower::task::domain::Quadrant;
use rstest_bdd_macros::then;

fn statistics(world: &ClassificationWorld) -> eyre::Result<&TaskStatistics> {
    world
        .statistics
        .as_ref()
        .ok_or_else(|| eyre::eyre!("statistics were not requested"))
}

#[then(r#"the task "{title}" is in quadrant "{quadrant}""#)]
fn task_in_quadrant(
    world: &ClassificationWorld,
    title: String,
    quadrant: String,
) -> Result<(), eyre::Report> {
    let expected = Quadrant::try_from(quadrant.as_str())
        .map_err(|err| eyre::eyre!("invalid expected quadrant in scenario: {err}"))?;
    let task = world.task(&title)?;
    eyre::ensure!(
        task.quadrant() == expected,
        "expected {title:?} in {expected}, found {}",
        task.quadrant()
    );
    Ok(())
}

#[then(r#"the task "{title}" is urgent"#)]
fn task_is_urgent(world: &ClassificationWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(world.task(&title)?.is_urgent(), "{title:?} should be urgent");
    Ok(())
}

#[then(r#"the task "{title}" is not urgent"#)]
fn task_is_not_urgent(world: &ClassificationWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.task(&title)?.is_urgent(),
        "{title:?} should not be urgent"
    );
    Ok(())
}

#[then(r#"the summary counts {count:usize} tasks in quadrant "{quadrant}""#)]
fn summary_counts_quadrant(
    world: &ClassificationWorld,
    count: usize,
    quadrant: String,
) -> Result<(), eyre::Report> {
    let expected = Quadrant::try_from(quadrant.as_str())
        .map_err(|err| eyre::eyre!("invalid expected quadrant in scenario: {err}"))?;
    let actual = statistics(world)?.summary.by_quadrant().get(expected);
    eyre::ensure!(actual == count, "expected {count} in {expected}, found {actual}");
    Ok(())
}

#[then("the summary counts {count:usize} completed tasks")]
fn summary_counts_completed(world: &ClassificationWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = statistics(world)?.summary.by_status().completed();
    eyre::ensure!(actual == count, "expected {count} completed, found {actual}");
    Ok(())
}

#[then(r#"the deadline report lists only "{title}" with {days:i64} days left"#)]
fn deadline_report_lists_only(
    world: &ClassificationWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let deadlines = &statistics(world)?.deadlines;
    let [entry] = deadlines.as_slice() else {
        return Err(eyre::eyre!(
            "expected one deadline entry, found {}",
            deadlines.len()
        ));
    };
    eyre::ensure!(entry.title.as_str() == title, "unexpected entry {:?}", entry.title);
    eyre::ensure!(
        entry.days_left == days,
        "expected {days} days left, found {}",
        entry.days_left
    );
    Ok(())
}
