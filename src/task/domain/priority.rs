//! Validated task priority.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority in `0..=9`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Highest accepted priority value.
    pub const MAX: u8 = 9;

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when `value` exceeds 9.
    pub fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value > Self::MAX {
            return Err(TaskDomainError::InvalidPriority(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Parses priority text such as `"3"`.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidPriority`] carrying the original text
/// when it is not an integer or is outside `0..=9`.
pub fn parse_priority(text: &str) -> Result<Priority, TaskDomainError> {
    let invalid = || TaskDomainError::InvalidPriority(text.to_owned());
    let parsed = text.parse::<i64>().map_err(|_| invalid())?;
    let value = u8::try_from(parsed).map_err(|_| invalid())?;
    Priority::new(value).map_err(|_| invalid())
}

impl FromStr for Priority {
    type Err = TaskDomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_priority(text)
    }
}

impl TryFrom<u8> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
