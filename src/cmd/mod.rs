//! Command handlers for the course-manager binary

pub mod dispatch;
pub mod run;
pub mod util;
