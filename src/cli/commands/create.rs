//! Create command implementation.
//!
//! Gathers a [`BootstrapOptions`] from the CLI arguments and the interactive
//! feature menu, then hands off to the bootstrap pipeline.

use std::path::{Path, PathBuf};

use crate::bootstrap::{self, BootstrapOptions, FEATURE_CHOICES};
use crate::cli::args::CreateArgs;
use crate::error::{GroundworkError, Result};
use crate::install::environment::select_package_manager;
use crate::ui::{PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    invocation_dir: PathBuf,
    args: CreateArgs,
    verbose: bool,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(invocation_dir: &Path, args: CreateArgs, verbose: bool) -> Self {
        Self {
            invocation_dir: invocation_dir.to_path_buf(),
            args,
            verbose,
        }
    }

    fn select_features(&self, ui: &mut dyn UserInterface) -> Result<Vec<String>> {
        if self.args.non_interactive || !ui.is_interactive() {
            return Ok(Vec::new());
        }

        let options: Vec<PromptOption> =
            FEATURE_CHOICES.iter().map(|f| PromptOption::plain(f)).collect();
        ui.multi_select(
            "features",
            "Check the features needed for your project",
            &options,
        )
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = select_package_manager(self.args.use_npm);
        tracing::debug!("selected package manager: {:?}", manager);

        let features = self.select_features(ui)?;

        let options = BootstrapOptions {
            directory: self.args.directory.clone(),
            invocation_dir: self.invocation_dir.clone(),
            manager,
            use_pnp: self.args.use_pnp,
            offline: self.args.offline.then_some(true),
            verbose: self.verbose,
            template: self.args.template.clone(),
            package_version: self.args.package_version.clone(),
            features,
        };

        match bootstrap::run(&options, ui, &bootstrap::default_context()) {
            Ok(()) => Ok(CommandResult::success()),
            Err(err) => {
                // Name errors are the only failures not yet reported by the
                // pipeline itself.
                if matches!(err, GroundworkError::InvalidProjectName { .. }) {
                    ui.error(&err.to_string());
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn create_args(directory: &str) -> CreateArgs {
        CreateArgs {
            directory: PathBuf::from(directory),
            use_npm: true,
            use_pnp: false,
            offline: false,
            package_version: None,
            template: None,
            non_interactive: true,
        }
    }

    #[test]
    fn invalid_name_reports_and_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = CreateCommand::new(temp.path(), create_args("Bad Name"), false);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Bad Name"));
        assert!(!temp.path().join("Bad Name").exists());
    }

    #[test]
    fn non_interactive_skips_feature_menu() {
        let temp = TempDir::new().unwrap();
        let cmd = CreateCommand::new(temp.path(), create_args("my-app"), false);
        let mut ui = MockUI::new();

        let features = cmd.select_features(&mut ui).unwrap();

        assert!(features.is_empty());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn interactive_menu_offers_fixed_feature_set() {
        let temp = TempDir::new().unwrap();
        let mut args = create_args("my-app");
        args.non_interactive = false;
        let cmd = CreateCommand::new(temp.path(), args, false);

        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_select_response("features", &["axios", "dayjs"]);

        let features = cmd.select_features(&mut ui).unwrap();

        assert_eq!(features, vec!["axios", "dayjs"]);
        assert_eq!(ui.prompts_shown(), &["features"]);
    }
}
