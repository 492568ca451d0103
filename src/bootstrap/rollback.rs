//! Rollback of generated artifacts.
//!
//! Every artifact in the rollback set is wholly regenerable by a fresh run,
//! so deleting matches is always safe. Anything else in the project root is
//! user content and is left for inspection. Each deletion is announced
//! before it happens.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::ui::UserInterface;

/// Artifacts a failed run may leave behind.
pub const KNOWN_GENERATED_FILES: [&str; 4] = [
    "package.json",
    "yarn.lock",
    "package-lock.json",
    "node_modules",
];

/// Delete generated artifacts from the project root.
///
/// If the root is empty afterwards it is removed too, restoring the
/// precondition of a first run. Returns whether the root was removed.
/// Idempotent: running against an already-cleaned root is a no-op.
pub fn rollback(root: &Path, ui: &mut dyn UserInterface) -> Result<bool> {
    if !root.exists() {
        return Ok(true);
    }

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !KNOWN_GENERATED_FILES.contains(&file_name.as_str()) {
            continue;
        }

        ui.message(&format!("Deleting generated file... {}", file_name));
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }

    let remaining = fs::read_dir(root)?.count();
    if remaining > 0 {
        return Ok(false);
    }

    let parent = root.parent().unwrap_or(Path::new("."));
    ui.message(&format!(
        "Deleting {} from {}",
        root.file_name()
            .map(|n| format!("{}/", n.to_string_lossy()))
            .unwrap_or_else(|| root.display().to_string()),
        parent.display()
    ));
    fs::remove_dir(root)?;
    Ok(true)
}
