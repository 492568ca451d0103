//! Info command implementation.
//!
//! Prints environment debug info: tool versions, platform, and the package
//! set a new project would receive. Useful in bug reports.

use crate::bootstrap::{BASE_DEPENDENCIES, FEATURE_CHOICES};
use crate::cli::args::InfoArgs;
use crate::error::Result;
use crate::install::environment::{node_version, npm_version, yarn_version};
use crate::package::{CORE_PACKAGE, TEMPLATE_BASE};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    #[allow(dead_code)]
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(args: InfoArgs) -> Self {
        Self { args }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("groundwork {}", env!("CARGO_PKG_VERSION")));
        ui.message(&format!(
            "  OS: {} {}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ));

        ui.message("Binaries:");
        for (label, report) in [
            ("node", node_version()),
            ("npm", npm_version()),
            ("yarn", yarn_version()),
        ] {
            match report.version {
                Some(version) => ui.message(&format!("  {}: {}", label, version)),
                None => ui.message(&format!("  {}: not found", label)),
            }
        }

        ui.message("Packages:");
        for dep in BASE_DEPENDENCIES {
            ui.message(&format!("  {}", dep));
        }
        ui.message(&format!("  {}", CORE_PACKAGE));
        ui.message(&format!("  {}", TEMPLATE_BASE));

        ui.message(&format!(
            "Optional features: {}",
            FEATURE_CHOICES.join(", ")
        ));

        Ok(CommandResult::success())
    }
}
