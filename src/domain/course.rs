//! The course record and its validating constructor and setters.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::error::CourseError;
use super::validation::{is_valid_credit, is_valid_id, is_valid_name};

/// A course record: id, name and credit hours.
///
/// A `Course` can only be obtained through [`Course::new`] (or deserialization,
/// which runs the same checks), so every value in circulation is fully valid.
/// Setters re-validate and leave the field untouched on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    id: String,
    name: String,
    credit: u8,
}

/// Unvalidated course fields as they arrive from a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub credit: i64,
}

impl Course {
    /// Build a course, rejecting the first invalid field (id, then name, then credit).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credit: i64,
    ) -> Result<Self, CourseError> {
        let id = id.into();
        let name = name.into();

        if !is_valid_id(&id) {
            return Err(CourseError::InvalidId(id));
        }
        if !is_valid_name(&name) {
            return Err(CourseError::InvalidName(name));
        }
        let credit = checked_credit(credit)?;

        Ok(Self::from_validated(id, name, credit))
    }

    /// Reassemble a course from fields that already passed validation.
    pub(crate) fn from_validated(id: String, name: String, credit: u8) -> Self {
        Self { id, name, credit }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit(&self) -> u8 {
        self.credit
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> Result<(), CourseError> {
        let id = id.into();
        if !is_valid_id(&id) {
            return Err(CourseError::InvalidId(id));
        }
        self.id = id;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CourseError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(CourseError::InvalidName(name));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_credit(&mut self, credit: i64) -> Result<(), CourseError> {
        self.credit = checked_credit(credit)?;
        Ok(())
    }

    /// Case-insensitive id comparison against a trimmed query.
    pub fn has_id(&self, query: &str) -> bool {
        self.id.eq_ignore_ascii_case(query.trim())
    }

    /// Credit-only ordering. Courses with equal credit compare `Equal`
    /// whatever their id or name, so callers must use a stable sort.
    pub fn cmp_by_credit(&self, other: &Self) -> Ordering {
        self.credit.cmp(&other.credit)
    }
}

fn checked_credit(credit: i64) -> Result<u8, CourseError> {
    if !is_valid_credit(credit) {
        return Err(CourseError::InvalidCredit(credit));
    }
    u8::try_from(credit).map_err(|_| CourseError::InvalidCredit(credit))
}

impl TryFrom<CourseRecord> for Course {
    type Error = CourseError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        Course::new(record.id, record.name, record.credit)
    }
}

impl Display for Course {
    /// Fixed columns: id in 10, name in 20, then credit.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {:<20} {}", self.id, self.name, self.credit)
    }
}
