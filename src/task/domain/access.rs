//! Requester identity and the task visibility rules derived from it.

use super::{ParseUserRoleError, Task, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the user issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular user; sees only owned tasks.
    User,
    /// Administrator; sees every task.
    Admin,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}

/// Authenticated identity on whose behalf an operation runs.
///
/// Authentication happens upstream; the domain only consumes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requester {
    user_id: UserId,
    role: UserRole,
}

impl Requester {
    /// Creates a requester with an explicit role.
    #[must_use]
    pub const fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Creates a regular-user requester.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self::new(user_id, UserRole::User)
    }

    /// Creates an administrator requester.
    #[must_use]
    pub const fn admin(user_id: UserId) -> Self {
        Self::new(user_id, UserRole::Admin)
    }

    /// Returns the requesting user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the requesting user's role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns whether the requester holds the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Returns whether the requester may read or modify `task`.
    #[must_use]
    pub fn can_access(&self, task: &Task) -> bool {
        self.scope().includes(task)
    }

    /// Returns the slice of the task collection visible to this requester.
    #[must_use]
    pub const fn scope(&self) -> TaskScope {
        TaskScope::for_requester(self)
    }
}

/// Portion of the task collection an operation covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskScope {
    /// Every task regardless of owner.
    #[default]
    All,
    /// Only tasks owned by the given user.
    Owner(UserId),
}

impl TaskScope {
    /// Administrators see everything; users see their own tasks.
    #[must_use]
    pub const fn for_requester(requester: &Requester) -> Self {
        if requester.is_admin() {
            Self::All
        } else {
            Self::Owner(requester.user_id)
        }
    }

    /// Returns whether `task` falls inside this scope.
    #[must_use]
    pub fn includes(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Owner(user_id) => task.owner() == Some(user_id),
        }
    }
}
