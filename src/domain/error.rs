//! Typed failures for course construction, mutation and store operations.

use thiserror::Error;

/// Every way a course operation can be rejected.
///
/// Each variant carries the offending input so the message shown to the user
/// names exactly what was refused. A rejected operation never changes the
/// course or the store it was aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    #[error("Course id '{0}' must be non-empty and contain only letters and digits")]
    InvalidId(String),

    #[error("Course name '{0}' must be non-empty and contain only letters, digits, '.' or '+'")]
    InvalidName(String),

    #[error("Credit {0} is out of range (must be 1-4)")]
    InvalidCredit(i64),

    #[error("Course id '{0}' already exists")]
    DuplicateId(String),

    #[error("Course id '{0}' does not exist")]
    NotFound(String),
}
