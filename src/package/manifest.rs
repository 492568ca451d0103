//! Package manifest (`package.json`) reading and writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The declared identity of a package: its `package.json` name and version.
///
/// Unknown manifest fields are ignored on read and never rewritten; the
/// initial scaffold manifest is the only one this tool produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageManifest {
    /// Package name.
    pub name: String,

    /// Declared version, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Whether the package is private (set on scaffolded projects).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,
}

impl PackageManifest {
    /// The minimal manifest written into a freshly scaffolded project root.
    pub fn scaffold(app_name: &str) -> Self {
        Self {
            name: app_name.to_string(),
            version: Some("0.1.0".to_string()),
            private: true,
        }
    }

    /// Read a manifest from a `package.json` file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let manifest: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(manifest)
    }

    /// Read the manifest of the package rooted at `dir`.
    pub fn read_dir(dir: &Path) -> Result<Self> {
        Self::read(&dir.join("package.json"))
    }

    /// Write this manifest as pretty-printed JSON with a trailing newline.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(self).context("serializing package.json")?;
        content.push('\n');
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Locate the manifest of an extracted package archive.
///
/// Registry tarballs nest their content under a single top-level directory
/// (conventionally `package/`); extraction tools differ on whether they
/// strip it. Accept either layout.
pub fn locate_extracted_manifest(extract_root: &Path) -> Option<PathBuf> {
    let direct = extract_root.join("package.json");
    if direct.is_file() {
        return Some(direct);
    }

    let mut subdirs = fs::read_dir(extract_root)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir());

    let first = subdirs.next()?;
    if subdirs.next().is_some() {
        return None;
    }

    let nested = first.join("package.json");
    nested.is_file().then_some(nested)
}
