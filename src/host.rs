//! Host introspection helpers.
//!
//! These feed the informational listings shown before probing starts and
//! the binary lookup used by command probes. Nothing here decides whether
//! the run passes.

use std::fs;
use std::path::{Path, PathBuf};

/// File that marks a directory as a test case.
pub const CASE_FILE: &str = "case.yml";

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Parse the `PATH` environment variable into a list of directories.
pub fn search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over search path entries.
///
/// Returns the first match that exists and is executable. Does not shell out
/// to `which`.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{}.exe", tool));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

/// A problem directory and the cases found under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDirListing {
    /// The problem directory.
    pub path: PathBuf,
    /// Names of case subdirectories, sorted.
    pub cases: Vec<String>,
    /// Whether the directory exists.
    pub exists: bool,
}

/// List case subdirectories (those holding a [`CASE_FILE`]) of a problem
/// directory in sorted order.
pub fn list_cases(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() && path.join(CASE_FILE).is_file() {
            cases.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    cases.sort();
    Ok(cases)
}

/// Describe each problem directory for the operator.
pub fn list_problem_dirs(dirs: &[PathBuf]) -> Vec<ProblemDirListing> {
    dirs.iter()
        .map(|dir| match list_cases(dir) {
            Ok(cases) => ProblemDirListing {
                path: dir.clone(),
                cases,
                exists: true,
            },
            Err(e) => {
                tracing::debug!("Cannot list {}: {}", dir.display(), e);
                ProblemDirListing {
                    path: dir.clone(),
                    cases: Vec::new(),
                    exists: false,
                }
            }
        })
        .collect()
}

/// Render the search path as display lines.
pub fn search_path_lines(entries: &[PathBuf]) -> Vec<String> {
    entries
        .iter()
        .map(|p| {
            if p.is_dir() {
                p.display().to_string()
            } else {
                format!("{} (missing)", p.display())
            }
        })
        .collect()
}

/// Render problem directory listings as display lines.
pub fn problem_dir_lines(listings: &[ProblemDirListing]) -> Vec<String> {
    listings
        .iter()
        .map(|l| {
            if !l.exists {
                format!("{} (missing)", l.path.display())
            } else {
                let label = if l.cases.len() == 1 { "case" } else { "cases" };
                format!("{} ({} {})", l.path.display(), l.cases.len(), label)
            }
        })
        .collect()
}
