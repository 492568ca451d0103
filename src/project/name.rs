//! Project name validation.
//!
//! New projects become npm packages, so their names must satisfy registry
//! naming restrictions. Names colliding with a dependency we are about to
//! install are rejected too, because the manager refuses self-referential
//! installs.

use crate::error::{GroundworkError, Result};
use crate::package::CORE_PACKAGE;

/// Names that collide with the packages installed into every new project.
pub fn reserved_names() -> [&'static str; 3] {
    ["react", "react-dom", CORE_PACKAGE]
}

/// Validate a project name against npm naming restrictions.
pub fn validate_app_name(name: &str) -> Result<()> {
    if let Err(reason) = check_package_name(name) {
        return Err(GroundworkError::InvalidProjectName {
            name: name.to_string(),
            reason,
        });
    }

    if reserved_names().contains(&name) {
        return Err(GroundworkError::InvalidProjectName {
            name: name.to_string(),
            reason: "a dependency with the same name exists".to_string(),
        });
    }

    Ok(())
}

fn check_package_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.len() > 214 {
        return Err("name cannot contain more than 214 characters".to_string());
    }
    if name.trim() != name {
        return Err("name cannot contain leading or trailing spaces".to_string());
    }

    // Scoped names validate scope and package parts independently.
    let (scope, bare) = match name.strip_prefix('@') {
        Some(rest) => match rest.split_once('/') {
            Some((scope, bare)) => (Some(scope), bare),
            None => return Err("scoped name is missing its package part".to_string()),
        },
        None => (None, name),
    };

    for part in scope.into_iter().chain(std::iter::once(bare)) {
        if part.is_empty() {
            return Err("name cannot contain empty segments".to_string());
        }
        if part.starts_with('.') {
            return Err("name cannot start with a period".to_string());
        }
        if part.starts_with('_') {
            return Err("name cannot start with an underscore".to_string());
        }
        if part.chars().any(|c| c.is_ascii_uppercase()) {
            return Err("name can no longer contain capital letters".to_string());
        }
        if !part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-._~".contains(c))
        {
            return Err("name can only contain URL-friendly characters".to_string());
        }
    }

    Ok(())
}
