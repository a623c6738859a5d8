use tracing::{debug, warn};

use crate::domain::{Course, CourseError};

use super::course_repository::CourseRepository;

/// Vec-backed course store that lives for the duration of a session.
///
/// Membership only grows: courses are appended by [`CourseRepository::add`]
/// and never removed. Access goes through `&mut self`, so a single owner
/// serialises every find-then-mutate sequence.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: Vec<Course>,
}

impl InMemoryCourseRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.has_id(id))
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn list(&self) -> Vec<Course> {
        self.courses.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Course> {
        let found = self.position(id).map(|idx| self.courses[idx].clone());
        debug!(id, found = found.is_some(), "find course");
        found
    }

    fn add(&mut self, course: Course) -> Result<(), CourseError> {
        if self.position(course.id()).is_some() {
            warn!(id = course.id(), "rejected duplicate course id");
            return Err(CourseError::DuplicateId(course.id().to_string()));
        }

        debug!(id = course.id(), credit = course.credit(), "add course");
        self.courses.push(course);
        Ok(())
    }

    fn sort(&self) -> Vec<Course> {
        let mut sorted = self.courses.clone();
        // slice::sort_by is stable
        sorted.sort_by(Course::cmp_by_credit);
        sorted
    }

    fn update_credit(&mut self, id: &str, credit: i64) -> Result<(), CourseError> {
        let idx = self
            .position(id)
            .ok_or_else(|| CourseError::NotFound(id.trim().to_string()))?;

        self.courses[idx].set_credit(credit).inspect_err(|e| {
            warn!(id, error = %e, "rejected credit update");
        })?;

        debug!(id, credit, "updated course credit");
        Ok(())
    }

    fn len(&self) -> usize {
        self.courses.len()
    }
}
