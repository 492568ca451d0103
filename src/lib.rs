//! groundwork - Bootstrap new application projects.
//!
//! groundwork validates a target directory, resolves which installable
//! packages satisfy a user-supplied version/template specifier, shells out
//! to a package manager to fetch them, and hands control to the installed
//! core package's template-initialization script — rolling generated
//! artifacts back on any failure.
//!
//! # Modules
//!
//! - [`bootstrap`] - Installation orchestration and rollback
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`install`] - Installer selection, connectivity, child processes
//! - [`package`] - Specifier classification and resolution
//! - [`project`] - Project naming, directory safety, scaffolding
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use groundwork::package::PackageSpecifier;
//!
//! // Classify what the user typed
//! let spec = PackageSpecifier::classify("@scope/name@next");
//! assert_eq!(
//!     spec,
//!     PackageSpecifier::Versioned {
//!         name: "@scope/name".to_string(),
//!         version: "next".to_string(),
//!     }
//! );
//! ```

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod install;
pub mod package;
pub mod project;
pub mod ui;

pub use error::{GroundworkError, Result};
