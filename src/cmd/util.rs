//! Utility commands (version, man page generation, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use course_manager::domain::validation::{
    COURSE_ID_PATTERN, COURSE_NAME_PATTERN, MAX_CREDIT, MIN_CREDIT,
};

use crate::cli::Cli;

/// Lines of the version banner; `verbose` adds build and format details.
fn version_lines(verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("course-manager {}", env!("CARGO_PKG_VERSION"))];

    if verbose {
        lines.push(format!("commit: {}", env!("GIT_SHA")));
        lines.push(format!("built: {}", env!("BUILD_DATE")));
        lines.push(format!(
            "profile: {} ({})",
            env!("BUILD_PROFILE"),
            env!("BUILD_TARGET")
        ));
        lines.push(format!("course id format: {}", COURSE_ID_PATTERN));
        lines.push(format!("course name format: {}", COURSE_NAME_PATTERN));
        lines.push(format!("credit range: {}-{}", MIN_CREDIT, MAX_CREDIT));
    }

    lines
}

/// Show version information
pub fn cmd_version(verbose: bool) -> Result<()> {
    for line in version_lines(verbose) {
        println!("{}", line);
    }
    Ok(())
}

/// Generate man page
pub fn cmd_man(out_dir: Option<&PathBuf>) -> Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let output_dir = out_dir
        .map(|p| p.to_owned())
        .unwrap_or_else(|| PathBuf::from("."));

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let man_path = output_dir.join("course-manager.1");
    std::fs::write(&man_path, buffer)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    println!("Man page written to: {}", man_path.display());
    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "course-manager", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lines() {
        let short = version_lines(false);
        assert_eq!(short.len(), 1);
        assert!(short[0].starts_with("course-manager "));

        let long = version_lines(true);
        assert_eq!(long[0], short[0]);
        assert!(long.iter().any(|l| l.starts_with("profile: ")));
        assert!(long.contains(&"credit range: 1-4".to_string()));
    }

    #[test]
    fn test_cmd_man_writes_page() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("man");
        cmd_man(Some(&out_dir)).unwrap();

        let page = std::fs::read_to_string(out_dir.join("course-manager.1")).unwrap();
        assert!(page.contains("Manage course records"));
    }
}
