//! Task aggregate root and the changes that can be applied to it.

use super::{
    Classification, Quadrant, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle,
    UserId, classify, days_left,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated input for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Importance declared by the owner.
    pub is_important: bool,
    /// Optional deadline driving urgency.
    pub deadline_at: Option<DateTime<Utc>>,
}

/// Task aggregate root.
///
/// Completion is carried by `completed_at` alone, so a completed task always
/// has a completion instant and a pending task never does.
///
/// Serialises in the flat [`PersistedTaskData`] shape. Deserialising goes
/// through [`Task::from_persisted`], so a quadrant that disagrees with the
/// importance and urgency flags is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PersistedTaskData", try_from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    owner: Option<UserId>,
    title: TaskTitle,
    description: Option<TaskDescription>,
    is_important: bool,
    classification: Classification,
    deadline_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner, if any.
    pub owner: Option<UserId>,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted importance flag.
    pub is_important: bool,
    /// Persisted urgency snapshot.
    pub is_urgent: bool,
    /// Persisted quadrant.
    pub quadrant: Quadrant,
    /// Persisted deadline, if any.
    pub deadline_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp; present only for completed tasks.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Field changes requested for an existing task.
///
/// Absent fields are left untouched. The nested options on `description` and
/// `deadline_at` distinguish "leave as is" (`None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement or cleared description.
    pub description: Option<Option<TaskDescription>>,
    /// Replacement importance flag.
    pub is_important: Option<bool>,
    /// Replacement or cleared deadline.
    pub deadline_at: Option<Option<DateTime<Utc>>>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TaskChanges {
    /// Returns whether applying these changes reclassifies the task.
    #[must_use]
    pub const fn touches_classification(&self) -> bool {
        self.is_important.is_some() || self.deadline_at.is_some()
    }
}

impl Task {
    /// Creates and classifies a new task at the clock's current instant.
    #[must_use]
    pub fn new(new_task: NewTask, owner: Option<UserId>, clock: &impl Clock) -> Self {
        let now = clock.utc();
        let NewTask {
            title,
            description,
            is_important,
            deadline_at,
        } = new_task;

        Self {
            id: TaskId::new(),
            owner,
            title,
            description,
            is_important,
            classification: classify(is_important, deadline_at, now),
            deadline_at,
            created_at: now,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::QuadrantMismatch`] when the stored quadrant
    /// does not match the stored importance and urgency flags.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        let classification = Classification::from_flags(data.is_important, data.is_urgent);
        if classification.quadrant() != data.quadrant {
            return Err(TaskDomainError::QuadrantMismatch {
                task_id: data.id,
                quadrant: data.quadrant,
                is_important: data.is_important,
                is_urgent: data.is_urgent,
            });
        }

        Ok(Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            is_important: data.is_important,
            classification,
            deadline_at: data.deadline_at,
            created_at: data.created_at,
            completed_at: data.completed_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the importance flag.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.is_important
    }

    /// Returns the urgency computed at the last classification.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.classification.is_urgent()
    }

    /// Returns the quadrant computed at the last classification.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.classification.quadrant()
    }

    /// Returns the stored classification snapshot.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline_at(&self) -> Option<DateTime<Utc>> {
        self.deadline_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::from_completed(self.completed())
    }

    /// Days left until the deadline at `now`, recomputed live.
    ///
    /// Returns `None` when the task has no deadline.
    #[must_use]
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline_at.map(|deadline| days_left(deadline, now))
    }

    /// Applies field changes, reclassifying when importance or the deadline
    /// is part of the change set.
    ///
    /// Returns `true` when the classification was recomputed.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) -> bool {
        let reclassify = changes.touches_classification();
        let TaskChanges {
            title,
            description,
            is_important,
            deadline_at,
            completed,
        } = changes;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_importance) = is_important {
            self.is_important = new_importance;
        }
        if let Some(new_deadline) = deadline_at {
            self.deadline_at = new_deadline;
        }
        match completed {
            Some(true) => self.complete(clock),
            Some(false) => self.reopen(),
            None => {}
        }
        if reclassify {
            self.reclassify(clock);
        }
        reclassify
    }

    /// Marks the task complete.
    ///
    /// Completing an already completed task keeps the original completion
    /// instant. The classification is left as it was.
    pub fn complete(&mut self, clock: &impl Clock) {
        if self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
    }

    /// Returns a completed task to the pending state.
    pub const fn reopen(&mut self) {
        self.completed_at = None;
    }

    /// Recomputes urgency and quadrant at the clock's current instant.
    pub fn reclassify(&mut self, clock: &impl Clock) {
        self.classification = classify(self.is_important, self.deadline_at, clock.utc());
    }
}

impl From<Task> for PersistedTaskData {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            owner: task.owner,
            title: task.title,
            description: task.description,
            is_important: task.is_important,
            is_urgent: task.classification.is_urgent(),
            quadrant: task.classification.quadrant(),
            deadline_at: task.deadline_at,
            created_at: task.created_at,
            completed_at: task.completed_at,
        }
    }
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = TaskDomainError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
