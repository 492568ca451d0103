//! Target directory safety checks.
//!
//! Conflict detection runs before anything is written: an existing target
//! directory may only contain entries from a fixed allow-list (VCS metadata,
//! docs, IDE files) or stale installer logs from a previous failed run.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Files tolerated in an existing target directory.
const VALID_FILES: [&str; 16] = [
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "docs",
    "LICENSE",
    "README.md",
    "mkdocs.yml",
    "Thumbs.db",
];

/// Log files from a previously failed install; tolerated and then removed.
const ERROR_LOG_PREFIXES: [&str; 3] = ["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

fn is_error_log(file_name: &str) -> bool {
    ERROR_LOG_PREFIXES
        .iter()
        .any(|prefix| file_name.starts_with(prefix))
}

/// List entries of an existing target directory that would conflict with
/// scaffolding. Directories are reported with a trailing `/`.
///
/// A missing directory has no conflicts.
pub fn conflicting_entries(root: &Path) -> Result<Vec<String>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut conflicts = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if VALID_FILES.contains(&file_name.as_str()) || is_error_log(&file_name) {
            continue;
        }
        // IDE module files created before the tool is launched.
        if file_name.ends_with(".iml") {
            continue;
        }

        if entry.file_type()?.is_dir() {
            conflicts.push(format!("{}/", file_name));
        } else {
            conflicts.push(file_name);
        }
    }

    conflicts.sort();
    Ok(conflicts)
}

/// Remove installer log files left over from a previous failed run.
pub fn remove_stale_logs(root: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if is_error_log(&file_name) {
            tracing::debug!("removing stale log {}", file_name);
            fs::remove_file(entry.path())?;
        }
    }

    Ok(())
}
