//! Field predicates for course records.
//!
//! The pattern strings are the ones the interaction layer prompts with; the
//! predicates below accept exactly the same inputs without compiling a regex.

/// Accepted shape of a course id.
pub const COURSE_ID_PATTERN: &str = "[a-zA-Z0-9]+";

/// Accepted shape of a course name.
pub const COURSE_NAME_PATTERN: &str = "[a-zA-Z0-9.+]+";

/// Accepted shape of a typed credit value.
pub const CREDIT_PATTERN: &str = "[1-4]{1}";

/// Accepted shape of a menu selection.
pub const MENU_PATTERN: &str = "[0-5]{1}";

pub const MIN_CREDIT: i64 = 1;
pub const MAX_CREDIT: i64 = 4;

/// Non-empty, ASCII letters and digits only.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Non-empty, ASCII letters, digits, `.` and `+` only.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '+')
}

/// Inclusive `1..=4`.
pub fn is_valid_credit(credit: i64) -> bool {
    (MIN_CREDIT..=MAX_CREDIT).contains(&credit)
}
