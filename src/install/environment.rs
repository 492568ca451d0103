//! Environment advisories.
//!
//! Version checks on the runtime and package managers. All of these are
//! non-fatal: an outdated tool produces a warning and execution continues
//! with degraded expectations (e.g. no PnP on old yarn).

use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;
use semver::Version;

use crate::install::plan::PackageManager;

/// Minimum node version for a fully supported experience.
const MIN_NODE_VERSION: Version = Version::new(8, 10, 0);

/// Minimum npm version for a fully supported experience.
const MIN_NPM_VERSION: Version = Version::new(5, 0, 0);

/// Minimum yarn version with Plug'n'Play support.
const MIN_YARN_PNP_VERSION: Version = Version::new(1, 12, 0);

/// Default yarn registry URL; the cached lockfile only applies there.
const DEFAULT_YARN_REGISTRY: &str = "https://registry.yarnpkg.com";

/// Version report for an installed tool.
#[derive(Debug, Clone, Default)]
pub struct ToolVersion {
    /// Raw reported version, if the tool responded.
    pub version: Option<String>,
    /// Whether the version meets the supported minimum.
    pub meets_minimum: bool,
}

/// Capture the first line of a command's stdout.
fn capture_stdout(command: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(command).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let line = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()?
        .trim()
        .to_string();
    (!line.is_empty()).then_some(line)
}

/// Whether yarn is installed and answering.
pub fn yarn_available() -> bool {
    capture_stdout("yarnpkg", &["--version"]).is_some()
}

/// Pick the package manager: yarn when available, unless npm is forced.
pub fn select_package_manager(force_npm: bool) -> PackageManager {
    if !force_npm && yarn_available() {
        PackageManager::Yarn
    } else {
        PackageManager::Npm
    }
}

/// Whether yarn is configured against the default registry.
///
/// The bundled cached lockfile is only valid for the default registry.
pub fn yarn_uses_default_registry() -> bool {
    capture_stdout("yarnpkg", &["config", "get", "registry"])
        .is_some_and(|registry| registry == DEFAULT_YARN_REGISTRY)
}

/// Check the installed node runtime version.
pub fn node_version() -> ToolVersion {
    let raw = capture_stdout("node", &["--version"]);
    tool_version(raw.as_deref().map(|v| v.trim_start_matches('v')), &MIN_NODE_VERSION)
}

/// Check the installed npm version.
pub fn npm_version() -> ToolVersion {
    let raw = capture_stdout("npm", &["--version"]);
    tool_version(raw.as_deref(), &MIN_NPM_VERSION)
}

/// Check the installed yarn version against the PnP minimum.
///
/// Yarn nightlies report non-semver strings like `1.22.0-20200101.1042`;
/// everything after the first `-` or `+` is truncated before comparison.
pub fn yarn_version() -> ToolVersion {
    let raw = capture_stdout("yarnpkg", &["--version"]);
    let normalized = raw.as_deref().map(truncate_prerelease);
    let mut report = tool_version(normalized.as_deref(), &MIN_YARN_PNP_VERSION);
    report.version = raw;
    report
}

fn tool_version(raw: Option<&str>, minimum: &Version) -> ToolVersion {
    let meets_minimum = raw
        .and_then(|v| Version::parse(v).ok())
        .is_some_and(|v| v >= *minimum);
    ToolVersion {
        version: raw.map(String::from),
        meets_minimum,
    }
}

fn truncate_prerelease(version: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^(.+?)[-+].+$").unwrap());
    pattern
        .captures(version)
        .and_then(|c| c.get(1))
        .map_or_else(|| version.to_string(), |m| m.as_str().to_string())
}

/// Environment warnings to surface before installation.
///
/// Never fails; an unreachable tool simply produces no warning (the install
/// itself will surface a hard failure if the manager is truly absent).
pub fn environment_warnings(manager: PackageManager) -> Vec<String> {
    let mut warnings = Vec::new();

    let node = node_version();
    if let Some(version) = &node.version {
        if !node.meets_minimum {
            warnings.push(format!(
                "You are using Node {}. Please update to Node {} or higher for a better, fully supported experience.",
                version, MIN_NODE_VERSION
            ));
        }
    }

    match manager {
        PackageManager::Npm => {
            let npm = npm_version();
            if let Some(version) = &npm.version {
                if !npm.meets_minimum {
                    warnings.push(format!(
                        "You are using npm {} so the project will be bootstrapped with an old unsupported version of tools. Please update to npm {} or higher for a better, fully supported experience.",
                        version, MIN_NPM_VERSION
                    ));
                }
            }
        }
        PackageManager::Yarn => {
            let yarn = yarn_version();
            if let Some(version) = &yarn.version {
                if !yarn.meets_minimum {
                    warnings.push(format!(
                        "You are using yarn {} which does not support Plug'n'Play (requires {} or higher).",
                        version, MIN_YARN_PNP_VERSION
                    ));
                }
            }
        }
    }

    warnings
}
