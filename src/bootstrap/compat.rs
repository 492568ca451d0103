//! Template compatibility decision.
//!
//! Templates are only applied when the resolved core package is new enough
//! to understand them. The comparison coerces loose version strings the way
//! registries print them; a version that cannot be coerced at all (a tag
//! like `next`) is assumed compatible rather than blocking the user. That
//! optimistic default is a deliberate policy choice, asserted in tests.

use std::sync::OnceLock;

use regex::Regex;
use semver::Version;

/// Minimum core package version with template support.
pub const MIN_TEMPLATE_VERSION: Version = Version::new(3, 3, 0);

/// Type-declaration packages appended for pre-template typescript setups.
pub const LEGACY_TYPE_PACKAGES: [&str; 3] = ["@types/node", "@types/jest", "typescript"];

/// Whether the resolved core version supports templates.
pub fn supports_templates(resolved_version: Option<&str>) -> bool {
    match resolved_version.and_then(coerce) {
        Some(version) => version >= MIN_TEMPLATE_VERSION,
        None => true,
    }
}

/// Coerce a loose version string (`3.4`, `^3.4.1`, `v3`) to a semver triple.
fn coerce(raw: &str) -> Option<Version> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap());

    let captures = pattern.captures(raw)?;
    let part = |i: usize| {
        captures
            .get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    Some(Version::new(part(1), part(2), part(3)))
}

/// Whether the core specifier implies a legacy typescript setup.
pub fn implies_typescript(core_specifier: &str) -> bool {
    core_specifier.contains("typescript")
}
