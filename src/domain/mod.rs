//! Course domain: the record entity, its field predicates and the typed
//! errors every fallible operation reports.

pub mod course;
pub mod error;
pub mod validation;

pub use course::{Course, CourseRecord};
pub use error::CourseError;
