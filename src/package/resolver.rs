//! Package info resolution.
//!
//! Turns a classified specifier into the canonical `{name, version}` pair
//! the orchestrator needs for the template-compatibility decision. Archives
//! are extracted into a scoped temporary directory that is removed even when
//! extraction or manifest parsing fails; in that case resolution degrades to
//! sniffing the name out of the archive filename rather than failing the
//! whole run, because scaffolding can proceed without a known version.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use flate2::read::GzDecoder;
use regex::Regex;

use crate::error::{GroundworkError, Result};
use crate::package::manifest::{locate_extracted_manifest, PackageManifest};
use crate::package::specifier::PackageSpecifier;

/// A canonical package resolution.
///
/// `name` never carries an embedded version suffix. `version`, when present,
/// is either a semver string or an opaque tag/range passed through
/// uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: Option<String>,
}

/// Resolves specifiers to declared package identities.
pub struct PackageResolver {
    client: reqwest::blocking::Client,
    invocation_dir: PathBuf,
}

fn archive_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:.*/)?(.+?)(?:-\d[^/]*)?\.(?:tgz|tar\.gz)$").unwrap()
    })
}

fn git_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([^/]+)\.git(?:#.*)?$").unwrap())
}

impl PackageResolver {
    /// Create a resolver.
    ///
    /// `invocation_dir` anchors relative `file:` and local archive paths; it
    /// is the directory the user launched from, not the new project root.
    pub fn new(invocation_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("groundwork")
                .timeout(Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client"),
            invocation_dir: invocation_dir.into(),
        }
    }

    /// Resolve a raw specifier to its declared name and version.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedPackage> {
        match PackageSpecifier::classify(raw) {
            PackageSpecifier::RemoteArchive { url } => self.resolve_archive(raw, Source::Remote(url)),
            PackageSpecifier::LocalArchive { path } => {
                let path = self.anchor(&path);
                self.resolve_archive(raw, Source::Local(path))
            }
            PackageSpecifier::Git { url } => {
                let name = git_name_pattern()
                    .captures(&url)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
                    .ok_or_else(|| GroundworkError::Resolution {
                        specifier: raw.to_string(),
                        message: "git URL has no repository name".to_string(),
                    })?;
                Ok(ResolvedPackage {
                    name,
                    version: None,
                })
            }
            PackageSpecifier::Versioned { name, version } => Ok(ResolvedPackage {
                name,
                version: (!version.is_empty()).then_some(version),
            }),
            PackageSpecifier::LocalPath { path } => {
                // A missing manifest means the referenced package cannot
                // exist; fail loudly rather than degrade.
                let manifest = PackageManifest::read_dir(&self.anchor(&path)).map_err(|e| {
                    GroundworkError::Resolution {
                        specifier: raw.to_string(),
                        message: e.to_string(),
                    }
                })?;
                Ok(ResolvedPackage {
                    name: manifest.name,
                    version: manifest.version,
                })
            }
            PackageSpecifier::Bare { name } => Ok(ResolvedPackage {
                name,
                version: None,
            }),
        }
    }

    /// Resolve two independent specifiers concurrently, joining both results.
    ///
    /// Completion order does not matter, but both results are available
    /// before this returns so the caller can make the compatibility decision.
    pub fn resolve_pair(
        &self,
        first: &str,
        second: &str,
    ) -> (Result<ResolvedPackage>, Result<ResolvedPackage>) {
        std::thread::scope(|scope| {
            let handle = scope.spawn(|| self.resolve(second));
            let first_result = self.resolve(first);
            let second_result = handle.join().unwrap_or_else(|_| {
                Err(GroundworkError::Resolution {
                    specifier: second.to_string(),
                    message: "resolution thread panicked".to_string(),
                })
            });
            (first_result, second_result)
        })
    }

    fn anchor(&self, path: &str) -> PathBuf {
        self.invocation_dir.join(path)
    }

    fn resolve_archive(&self, raw: &str, source: Source) -> Result<ResolvedPackage> {
        match self.extract_declared_identity(&source) {
            Ok(resolved) => Ok(resolved),
            Err(err) => {
                // Degraded success: derive the name from the filename and
                // report no version.
                tracing::debug!("archive inspection failed for {}: {:#}", raw, err);
                let name = archive_name_pattern()
                    .captures(raw)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
                    .ok_or_else(|| GroundworkError::Resolution {
                        specifier: raw.to_string(),
                        message: format!("{:#}", err),
                    })?;
                Ok(ResolvedPackage {
                    name,
                    version: None,
                })
            }
        }
    }

    /// Stream-extract the archive into a scoped temporary directory and read
    /// the declared manifest. The directory is removed on drop, including
    /// every early-return error path.
    fn extract_declared_identity(&self, source: &Source) -> anyhow::Result<ResolvedPackage> {
        let tmp = tempfile::tempdir().context("creating temporary extraction directory")?;

        let reader: Box<dyn Read> = match source {
            Source::Remote(url) => Box::new(
                self.client
                    .get(url.as_str())
                    .send()
                    .with_context(|| format!("fetching {}", url))?
                    .error_for_status()
                    .with_context(|| format!("fetching {}", url))?,
            ),
            Source::Local(path) => Box::new(
                File::open(path).with_context(|| format!("opening {}", path.display()))?,
            ),
        };

        tar::Archive::new(GzDecoder::new(reader))
            .unpack(tmp.path())
            .context("extracting archive")?;

        let manifest_path = locate_extracted_manifest(tmp.path())
            .context("archive contains no package.json")?;
        let manifest = PackageManifest::read(&manifest_path)?;

        Ok(ResolvedPackage {
            name: manifest.name,
            version: manifest.version,
        })
    }
}

enum Source {
    Remote(String),
    Local(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::path::Path;
    use tempfile::TempDir;

    fn resolver_in(dir: &Path) -> PackageResolver {
        PackageResolver::new(dir)
    }

    /// Build a registry-style tarball with its manifest under `package/`.
    fn write_tarball(path: &Path, manifest_json: &str) {
        let file = File::create(path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        let data = manifest_json.as_bytes();
        let mut header = tar::Header::new_gnu();
        header.set_path("package/package.json").unwrap();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append(&header, data).unwrap();

        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn resolves_bare_name() {
        let temp = TempDir::new().unwrap();
        let resolved = resolver_in(temp.path()).resolve("react").unwrap();
        assert_eq!(resolved.name, "react");
        assert!(resolved.version.is_none());
    }

    #[test]
    fn resolves_versioned() {
        let temp = TempDir::new().unwrap();
        let resolved = resolver_in(temp.path()).resolve("foo@1.2.3").unwrap();
        assert_eq!(resolved.name, "foo");
        assert_eq!(resolved.version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn resolves_scoped_versioned_on_last_at() {
        let temp = TempDir::new().unwrap();
        let resolved = resolver_in(temp.path()).resolve("@scope/name@next").unwrap();
        assert_eq!(resolved.name, "@scope/name");
        assert_eq!(resolved.version.as_deref(), Some("next"));
    }

    #[test]
    fn resolves_git_url_name() {
        let temp = TempDir::new().unwrap();
        let resolved = resolver_in(temp.path())
            .resolve("git+https://github.com/org/my-scripts.git#v2.1")
            .unwrap();
        assert_eq!(resolved.name, "my-scripts");
        assert!(resolved.version.is_none());
    }

    #[test]
    fn resolves_local_archive_manifest() {
        let temp = TempDir::new().unwrap();
        let tarball = temp.path().join("custom-scripts-9.9.9.tgz");
        write_tarball(&tarball, r#"{"name": "custom-scripts", "version": "2.0.0"}"#);

        let resolved = resolver_in(temp.path())
            .resolve("./custom-scripts-9.9.9.tgz")
            .unwrap();
        // The declared manifest wins over the filename.
        assert_eq!(resolved.name, "custom-scripts");
        assert_eq!(resolved.version.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn corrupt_archive_degrades_to_filename_sniffing() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("my-pkg-1.0.0.tgz"), b"not a tarball").unwrap();

        let resolved = resolver_in(temp.path()).resolve("./my-pkg-1.0.0.tgz").unwrap();
        assert_eq!(resolved.name, "my-pkg");
        assert!(resolved.version.is_none());
    }

    #[test]
    fn missing_archive_degrades_to_filename_sniffing() {
        let temp = TempDir::new().unwrap();
        let resolved = resolver_in(temp.path()).resolve("./absent-2.3.4.tgz").unwrap();
        assert_eq!(resolved.name, "absent");
        assert!(resolved.version.is_none());
    }

    #[test]
    fn archive_without_manifest_degrades() {
        let temp = TempDir::new().unwrap();
        let tarball = temp.path().join("empty-1.0.0.tar.gz");
        let file = File::create(&tarball).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let builder = tar::Builder::new(encoder);
        builder.into_inner().unwrap().finish().unwrap();

        let resolved = resolver_in(temp.path()).resolve("./empty-1.0.0.tar.gz").unwrap();
        assert_eq!(resolved.name, "empty");
        assert!(resolved.version.is_none());
    }

    #[test]
    fn local_path_reads_manifest() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("my-fork");
        std::fs::create_dir(&pkg).unwrap();
        std::fs::write(
            pkg.join("package.json"),
            r#"{"name": "my-fork", "version": "0.3.0"}"#,
        )
        .unwrap();

        let resolved = resolver_in(temp.path()).resolve("file:my-fork").unwrap();
        assert_eq!(resolved.name, "my-fork");
        assert_eq!(resolved.version.as_deref(), Some("0.3.0"));
    }

    #[test]
    fn local_path_missing_manifest_fails_loudly() {
        let temp = TempDir::new().unwrap();
        let result = resolver_in(temp.path()).resolve("file:does-not-exist");
        assert!(matches!(
            result,
            Err(GroundworkError::Resolution { .. })
        ));
    }

    #[test]
    fn resolve_pair_joins_both_results() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver_in(temp.path());

        let (core, template) = resolver.resolve_pair("foo@1.0.0", "@scope/tpl@next");

        assert_eq!(core.unwrap().name, "foo");
        let template = template.unwrap();
        assert_eq!(template.name, "@scope/tpl");
        assert_eq!(template.version.as_deref(), Some("next"));
    }

    #[test]
    fn resolve_pair_reports_independent_failures() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver_in(temp.path());

        let (ok, err) = resolver.resolve_pair("foo", "file:missing");

        assert!(ok.is_ok());
        assert!(err.is_err());
    }

    #[test]
    fn archive_name_pattern_strips_version_suffix() {
        let captures = |s: &str| {
            archive_name_pattern()
                .captures(s)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };
        assert_eq!(captures("foo-1.0.0.tgz").as_deref(), Some("foo"));
        assert_eq!(
            captures("https://example.com/a/b/foo-2.1.0-beta.1.tar.gz").as_deref(),
            Some("foo")
        );
        assert_eq!(captures("./plain.tgz").as_deref(), Some("plain"));
    }
}
