use crate::domain::{Course, CourseError};

/// Storage seam for course records.
///
/// Implementations own their courses. Every read hands back clones, so a
/// caller can never reach into the store and break the unique-id invariant.
pub trait CourseRepository {
    /// All courses in insertion order.
    fn list(&self) -> Vec<Course>;

    /// Case-insensitive lookup on a trimmed id.
    fn find_by_id(&self, id: &str) -> Option<Course>;

    /// Append a course, rejecting an id already present in any letter case.
    fn add(&mut self, course: Course) -> Result<(), CourseError>;

    /// All courses ordered by ascending credit; equal credits keep insertion order.
    fn sort(&self) -> Vec<Course>;

    /// Change the credit of an existing course.
    fn update_credit(&mut self, id: &str, credit: i64) -> Result<(), CourseError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
