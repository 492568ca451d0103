//! Project naming, directory safety, and scaffolding.

pub mod name;
pub mod safety;
pub mod scaffold;

pub use name::validate_app_name;
pub use safety::{conflicting_entries, remove_stale_logs};
pub use scaffold::{scaffold_project, seed_cached_lockfile};
