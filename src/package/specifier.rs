//! Package specifier classification.
//!
//! A specifier is whatever the user typed to identify a package: a bare
//! name, a scoped name, a name with a version or dist-tag, a `file:` path,
//! a `git+` URL, or a tarball (local or remote). Classification is total:
//! anything that matches no rule is treated as a bare name.
//!
//! The precedence below is load-bearing. A scoped versioned specifier like
//! `@scope/name@next` must split on the *last* `@`, never on the scope
//! delimiter at position 0.

use std::path::Path;

/// The default core package installed into every new project.
pub const CORE_PACKAGE: &str = "groundwork-scripts";

/// A classified package specifier.
///
/// Exactly one classification applies per input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSpecifier {
    /// A gzipped tarball fetched over HTTP(S).
    RemoteArchive { url: String },
    /// A gzipped tarball on the local filesystem.
    LocalArchive { path: String },
    /// A `git+` URL; installation is delegated entirely to the package manager.
    Git { url: String },
    /// `name@version` or `name@tag`, split on the last `@`.
    Versioned { name: String, version: String },
    /// A `file:` reference to a package directory.
    LocalPath { path: String },
    /// A bare (possibly scoped) package name, used verbatim.
    Bare { name: String },
}

impl PackageSpecifier {
    /// Classify a raw specifier string.
    ///
    /// Rules are checked in precedence order; the first match wins:
    /// 1. `.tgz` / `.tar.gz` suffix: archive (remote when a scheme is present)
    /// 2. `git+` prefix: git URL
    /// 3. `@` after position 0: versioned, split on the last `@`
    /// 4. `file:` prefix: local path
    /// 5. anything else: bare name
    pub fn classify(raw: &str) -> Self {
        if raw.ends_with(".tgz") || raw.ends_with(".tar.gz") {
            if raw.contains("://") || raw.starts_with("http") {
                return Self::RemoteArchive {
                    url: raw.to_string(),
                };
            }
            return Self::LocalArchive {
                path: raw.to_string(),
            };
        }

        if raw.starts_with("git+") {
            return Self::Git {
                url: raw.to_string(),
            };
        }

        // An `@` at position 0 delimits a scope, not a version.
        if let Some(at) = raw.rfind('@') {
            if at > 0 {
                return Self::Versioned {
                    name: raw[..at].to_string(),
                    version: raw[at + 1..].to_string(),
                };
            }
        }

        if let Some(path) = raw.strip_prefix("file:") {
            return Self::LocalPath {
                path: path.to_string(),
            };
        }

        Self::Bare {
            name: raw.to_string(),
        }
    }

    /// The original surface syntax, suitable for handing to the installer.
    pub fn as_install_arg(&self) -> String {
        match self {
            Self::RemoteArchive { url } => url.clone(),
            Self::LocalArchive { path } => path.clone(),
            Self::Git { url } => url.clone(),
            Self::Versioned { name, version } => format!("{}@{}", name, version),
            Self::LocalPath { path } => format!("file:{}", path),
            Self::Bare { name } => name.clone(),
        }
    }
}

/// Map a `--package-version` value onto the concrete core package specifier.
///
/// A valid semver pins the default core package to that version; a `@tag`
/// selects a dist-tag; a `file:` path is resolved against the invocation
/// directory so it survives the change of project root; anything else
/// (a fork name, a tarball URL) replaces the core package outright.
pub fn core_install_package(version: Option<&str>, invocation_dir: &Path) -> String {
    let Some(version) = version.filter(|v| !v.is_empty()) else {
        return CORE_PACKAGE.to_string();
    };

    if semver::Version::parse(version).is_ok() {
        return format!("{}@{}", CORE_PACKAGE, version);
    }

    if version.starts_with('@') && !version.contains('/') {
        // A dist-tag such as `@next`.
        return format!("{}{}", CORE_PACKAGE, version);
    }

    if let Some(path) = version.strip_prefix("file:") {
        return format!("file:{}", invocation_dir.join(path).display());
    }

    version.to_string()
}
