//! Project scaffolding.
//!
//! Creates the project root with its minimal manifest, and seeds the bundled
//! cached lockfile when yarn is pointed at the default registry (letting a
//! first install resolve from the offline mirror).

use std::fs;
use std::path::Path;

use anyhow::Context;
use include_dir::{include_dir, Dir};

use crate::error::Result;
use crate::package::PackageManifest;

static RESOURCES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Create the project root (if needed) and write the initial manifest.
///
/// Callers must have completed conflict detection first; this function
/// writes unconditionally.
pub fn scaffold_project(root: &Path, app_name: &str) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("creating project directory {}", root.display()))?;
    PackageManifest::scaffold(app_name).write(&root.join("package.json"))?;
    Ok(())
}

/// Copy the bundled cached lockfile into the project root.
///
/// Returns whether a lockfile was written.
pub fn seed_cached_lockfile(root: &Path) -> Result<bool> {
    let Some(cached) = RESOURCES.get_file("yarn.lock.cached") else {
        return Ok(false);
    };
    fs::write(root.join("yarn.lock"), cached.contents())
        .context("writing cached yarn.lock")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scaffold_creates_root_and_manifest() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-app");

        scaffold_project(&root, "my-app").unwrap();

        assert!(root.is_dir());
        let manifest = PackageManifest::read_dir(&root).unwrap();
        assert_eq!(manifest.name, "my-app");
        assert_eq!(manifest.version.as_deref(), Some("0.1.0"));
        assert!(manifest.private);
    }

    #[test]
    fn scaffold_tolerates_existing_directory() {
        let temp = TempDir::new().unwrap();
        scaffold_project(temp.path(), "my-app").unwrap();
        assert!(temp.path().join("package.json").exists());
    }

    #[test]
    fn seeds_cached_lockfile() {
        let temp = TempDir::new().unwrap();

        let seeded = seed_cached_lockfile(temp.path()).unwrap();

        assert!(seeded);
        let content = std::fs::read_to_string(temp.path().join("yarn.lock")).unwrap();
        assert!(content.contains("yarn lockfile"));
    }
}
