//! Urgency and quadrant classification.
//!
//! A task's quadrant follows from two signals: the importance flag declared by
//! its owner and an urgency flag derived from how many days remain before its
//! deadline. Both functions in this module are pure; the reference instant is
//! always passed in by the caller.

use super::ParseQuadrantError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deadlines at most this many days away make a task urgent.
///
/// The bound is inclusive: a deadline exactly three days out is urgent.
pub const URGENCY_THRESHOLD_DAYS: i64 = 3;

/// Eisenhower matrix quadrant.
///
/// The labels `Q1`..`Q4` are part of the storage and wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    /// Important and urgent.
    Q1,
    /// Important, not urgent.
    Q2,
    /// Urgent, not important.
    Q3,
    /// Neither important nor urgent.
    Q4,
}

impl Quadrant {
    /// Every quadrant, in label order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Maps importance and urgency onto the matrix.
    #[must_use]
    pub const fn from_flags(is_important: bool, is_urgent: bool) -> Self {
        match (is_important, is_urgent) {
            (true, true) => Self::Q1,
            (true, false) => Self::Q2,
            (false, true) => Self::Q3,
            (false, false) => Self::Q4,
        }
    }

    /// Returns whether tasks in this quadrant are important.
    #[must_use]
    pub const fn is_important(self) -> bool {
        matches!(self, Self::Q1 | Self::Q2)
    }

    /// Returns whether tasks in this quadrant are urgent.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Q1 | Self::Q3)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Quadrant {
    type Error = ParseQuadrantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            _ => Err(ParseQuadrantError(value.to_owned())),
        }
    }
}

/// Urgency and quadrant computed for a task at a given instant.
///
/// The urgency half is a snapshot: it is not refreshed when time passes, only
/// when the task is reclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    is_urgent: bool,
    quadrant: Quadrant,
}

impl Classification {
    /// Builds the classification for explicit importance and urgency flags.
    #[must_use]
    pub const fn from_flags(is_important: bool, is_urgent: bool) -> Self {
        Self {
            is_urgent,
            quadrant: Quadrant::from_flags(is_important, is_urgent),
        }
    }

    /// Returns the urgency flag.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        self.is_urgent
    }

    /// Returns the quadrant.
    #[must_use]
    pub const fn quadrant(self) -> Quadrant {
        self.quadrant
    }
}

/// Classifies a task from its importance, optional deadline and `now`.
///
/// A missing deadline is never urgent.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use eisenhower::task::domain::{classify, Quadrant};
///
/// let now = Utc::now();
/// let result = classify(true, Some(now + TimeDelta::days(2)), now);
/// assert!(result.is_urgent());
/// assert_eq!(result.quadrant(), Quadrant::Q1);
///
/// assert_eq!(classify(false, None, now).quadrant(), Quadrant::Q4);
/// ```
#[must_use]
pub fn classify(
    is_important: bool,
    deadline_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Classification {
    let is_urgent = deadline_at.is_some_and(|deadline| is_urgent_at(deadline, now));
    Classification::from_flags(is_important, is_urgent)
}

/// Returns whether a deadline counts as urgent at `now`.
#[must_use]
pub fn is_urgent_at(deadline_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    days_left(deadline_at, now) <= URGENCY_THRESHOLD_DAYS
}

/// Whole days from `now` until `deadline_at`, rounded up.
///
/// Any fraction of a day counts as a full day, so a deadline one second away
/// is one day left and a deadline three days and one second away is four.
/// Deadlines in the past give zero or a negative count.
#[must_use]
pub fn days_left(deadline_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let remaining = deadline_at.signed_duration_since(now);
    let whole_days = remaining.num_days();
    let remainder = remaining - TimeDelta::days(whole_days);
    if remainder > TimeDelta::zero() {
        whole_days + 1
    } else {
        whole_days
    }
}
