//! Validated text fields and the limits applied to them.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length limits applied to user-supplied task text.
///
/// # Examples
///
/// ```
/// use eisenhower::task::domain::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.title_min_chars, 3);
/// assert_eq!(config.title_max_chars, 100);
///
/// let lenient = TaskValidationConfig::lenient();
/// assert_eq!(lenient.title_min_chars, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Minimum title length in characters, after trimming.
    pub title_min_chars: usize,
    /// Maximum title length in characters, after trimming.
    pub title_max_chars: usize,
    /// Maximum description length in characters.
    pub description_max_chars: usize,
    /// Minimum search keyword length in characters, after trimming.
    pub search_min_chars: usize,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            title_min_chars: 3,
            title_max_chars: 100,
            description_max_chars: 500,
            search_min_chars: 2,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a lenient configuration accepting any non-empty title and
    /// single-character searches.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            title_min_chars: 1,
            search_min_chars: 1,
            ..Default::default()
        }
    }
}

/// Trimmed task title within the configured length bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Validates and trims a title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooShort`] or
    /// [`TaskDomainError::TitleTooLong`] when the trimmed title falls outside
    /// the configured bounds.
    pub fn new(
        value: impl Into<String>,
        config: &TaskValidationConfig,
    ) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let actual = trimmed.chars().count();
        if actual < config.title_min_chars {
            return Err(TaskDomainError::TitleTooShort {
                min: config.title_min_chars,
                actual,
            });
        }
        if actual > config.title_max_chars {
            return Err(TaskDomainError::TitleTooLong {
                max: config.title_max_chars,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a title read back from storage without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task description within the configured length bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Validates a description.
    ///
    /// Returns `Ok(None)` for blank input: a whitespace-only description is
    /// stored as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the description
    /// exceeds the configured maximum.
    pub fn new(
        value: impl Into<String>,
        config: &TaskValidationConfig,
    ) -> Result<Option<Self>, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let actual = raw.chars().count();
        if actual > config.description_max_chars {
            return Err(TaskDomainError::DescriptionTooLong {
                max: config.description_max_chars,
                actual,
            });
        }
        Ok(Some(Self(raw)))
    }

    /// Wraps a description read back from storage without re-validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive keyword matched against task titles and descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    keyword: String,
    normalized: String,
}

impl SearchQuery {
    /// Validates and trims a search keyword.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SearchQueryTooShort`] when the trimmed
    /// keyword is shorter than the configured minimum.
    pub fn new(
        value: impl Into<String>,
        config: &TaskValidationConfig,
    ) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let keyword = raw.trim();
        let actual = keyword.chars().count();
        if actual < config.search_min_chars {
            return Err(TaskDomainError::SearchQueryTooShort {
                min: config.search_min_chars,
                actual,
            });
        }
        Ok(Self {
            keyword: keyword.to_owned(),
            normalized: keyword.to_lowercase(),
        })
    }

    /// Returns the trimmed keyword as entered.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns whether `text` contains the keyword, ignoring case.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.normalized)
    }
}
