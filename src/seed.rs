//! Read-only seed import.
//!
//! A seed file is a YAML list of `{id, name, credit}` records. Every record
//! goes through the same validation and duplicate checks as an interactive
//! add. A file is accepted whole or not at all, and nothing is ever written
//! back.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::domain::{Course, CourseError, CourseRecord};
use crate::repository::CourseRepository;

/// Parse seed records into validated courses, in file order.
pub fn parse_seed(content: &str) -> Result<Vec<Course>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<CourseRecord> =
        serde_yaml::from_str(content).context("Failed to parse seed file")?;

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let id = record.id.clone();
            Course::try_from(record)
                .with_context(|| format!("Invalid seed record #{} ('{}')", idx + 1, id))
        })
        .collect()
}

/// Load a seed file and add its courses to `store`, returning how many were added.
pub fn load_seed<S: CourseRepository>(store: &mut S, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let courses = parse_seed(&content)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;

    check_batch(store, &courses)?;

    let count = courses.len();
    for course in courses {
        store.add(course)?;
    }

    info!(path = %path.display(), count, "seeded course store");
    Ok(count)
}

/// Refuse the batch if any id is already stored or repeats an earlier record.
fn check_batch<S: CourseRepository>(store: &S, courses: &[Course]) -> Result<()> {
    for (idx, course) in courses.iter().enumerate() {
        let taken = store.find_by_id(course.id()).is_some()
            || courses[..idx].iter().any(|earlier| earlier.has_id(course.id()));
        if taken {
            return Err(anyhow::Error::new(CourseError::DuplicateId(
                course.id().to_string(),
            ))
            .context(format!("Seed record #{} rejected", idx + 1)));
        }
    }
    Ok(())
}
