//! Clock implementations that complement [`mockable::DefaultClock`].
//!
//! Classification is a snapshot taken against a reference instant. Services
//! read that instant from an injected [`Clock`], so replaying a computation
//! "as of" a known time only needs a clock that never moves.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Returns the pinned instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.instant.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.instant
    }
}
