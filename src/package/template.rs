//! Template package name resolution.
//!
//! Users may name a template by its full package name, by a short suffix
//! (`typescript` for `groundwork-template-typescript`), by a scoped variant
//! of either, or by any archive/URL/path specifier. This module derives the
//! installable package name while preserving the scope.

use std::path::Path;

/// Canonical template prefix and default template package.
pub const TEMPLATE_BASE: &str = "groundwork-template";

/// Derive the installable template package specifier.
///
/// Absent input selects the default template. Archive, URL, and `file:`
/// specifiers pass through (the resolver reads their real name later);
/// everything else gets the canonical prefix unless it already carries it.
pub fn template_install_package(template: Option<&str>, invocation_dir: &Path) -> String {
    let Some(template) = template.filter(|t| !t.is_empty()) else {
        return TEMPLATE_BASE.to_string();
    };

    if let Some(path) = template.strip_prefix("file:") {
        return format!("file:{}", invocation_dir.join(path).display());
    }

    if template.contains("://")
        || template.ends_with(".tgz")
        || template.ends_with(".tar.gz")
    {
        return template.to_string();
    }

    let (scope, name) = split_scope(template);
    if name == TEMPLATE_BASE || name.starts_with(&format!("{}-", TEMPLATE_BASE)) {
        format!("{}{}", scope, name)
    } else {
        format!("{}{}-{}", scope, TEMPLATE_BASE, name)
    }
}

/// Split `@scope/name` into `("@scope/", "name")`; unscoped names get an
/// empty scope.
fn split_scope(specifier: &str) -> (&str, &str) {
    if specifier.starts_with('@') {
        if let Some(slash) = specifier.find('/') {
            return (&specifier[..slash + 1], &specifier[slash + 1..]);
        }
    }
    ("", specifier)
}
