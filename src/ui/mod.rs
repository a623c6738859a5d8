//! Terminal presentation: output sink, colour helpers and table layout.

pub mod output;

pub use output::{Output, OutputMode};

/// Colour scheme for line prefixes and headings
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Fixed text used by the course tables
pub mod format {
    use crate::domain::Course;

    /// Header for the plain course listing.
    pub const LIST_HEADER: &str = "Course id  Course name          Course credit";

    /// Header for the numbered, credit-sorted listing.
    pub const SORTED_HEADER: &str = "No  Course id  Course name          Course credit";

    /// One row of the numbered listing; `index` is zero-based.
    pub fn numbered_row(index: usize, course: &Course) -> String {
        format!("{:<4}{}", index + 1, course)
    }

    /// Separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
