//! # Course Manager
//!
//! An interactive console manager for course records held in memory for the
//! duration of a run.
//!
//! ## Core Concepts
//!
//! - **Course**: an id, a name and a credit value between 1 and 4
//! - **Store**: an ordered, append-only collection of courses with unique ids
//!   (compared without regard to letter case)
//! - **Session**: the numbered menu that reads validated input and renders results
//!
//! ## Modules
//!
//! - [`domain`] - The course entity, field predicates and typed errors
//! - [`repository`] - The store trait and its in-memory backend
//! - [`input`] - Pattern-checked prompting over a terminal or any reader
//! - [`session`] - Menu dispatch tying store, input and output together
//! - [`ui`] - Output sink and table layout
//! - [`config`] - Layered YAML configuration
//! - [`seed`] - Read-only start-up import of courses
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Example
//!
//! ```
//! use course_manager::domain::Course;
//! use course_manager::repository::{CourseRepository, InMemoryCourseRepository};
//!
//! let mut store = InMemoryCourseRepository::new();
//! store.add(Course::new("C03", "Data", 2).unwrap()).unwrap();
//! store.add(Course::new("C04", "OS", 1).unwrap()).unwrap();
//!
//! let sorted = store.sort();
//! assert_eq!(sorted[0].id(), "C04");
//! assert!(store.find_by_id("c03").is_some());
//! ```

pub mod config;
pub mod domain;
pub mod input;
pub mod logging;
pub mod repository;
pub mod seed;
pub mod session;
pub mod ui;
