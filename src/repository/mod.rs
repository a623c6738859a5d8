//! Course storage: the repository trait and its in-memory backend.

pub mod course_repository;
pub mod in_memory;

pub use course_repository::CourseRepository;
pub use in_memory::InMemoryCourseRepository;
