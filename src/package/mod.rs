//! Package specifiers, manifests, and resolution.
//!
//! - [`specifier`] - classification of user-supplied specifier strings
//! - [`manifest`] - `package.json` reading and writing
//! - [`resolver`] - specifier → declared `{name, version}` resolution
//! - [`template`] - template package name normalization

pub mod manifest;
pub mod resolver;
pub mod specifier;
pub mod template;

pub use manifest::PackageManifest;
pub use resolver::{PackageResolver, ResolvedPackage};
pub use specifier::{core_install_package, PackageSpecifier, CORE_PACKAGE};
pub use template::{template_install_package, TEMPLATE_BASE};
