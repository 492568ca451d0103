//! Child process invocation.
//!
//! The installer and the template init script both run as child processes
//! with inherited standard I/O; their output is the user's feedback, not
//! ours to capture. Exit code zero is the only success signal.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{GroundworkError, Result};
use crate::install::plan::InstallPlan;

/// Name of the plug-n-play loader file generated by a PnP install.
pub const PNP_LOADER: &str = ".pnp.js";

/// Run the installer described by `plan` inside the project root.
pub fn run_installer(plan: &InstallPlan, root: &Path) -> Result<()> {
    tracing::debug!("running installer: {}", plan.command_line());

    let status = Command::new(plan.command)
        .args(&plan.args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| GroundworkError::InstallerFailed {
            command: plan.command_line(),
            code: None,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(GroundworkError::InstallerFailed {
            command: plan.command_line(),
            code: status.code(),
        })
    }
}

/// Build the node argument vector for the template init script.
///
/// The init entry point of the installed core package is invoked in a fresh
/// node process with a single JSON-serialized positional argument array
/// `[root, appName, verbose, invocationDir, templateNameOrNull]`. When a
/// PnP loader exists in the project root it is added as a required preload.
pub fn init_script_args(
    core_package: &str,
    root: &Path,
    app_name: &str,
    verbose: bool,
    invocation_dir: &Path,
    template_name: Option<&str>,
) -> Vec<String> {
    let mut args = Vec::new();

    let pnp_path = root.join(PNP_LOADER);
    if pnp_path.exists() {
        args.push("--require".to_string());
        args.push(pnp_path.display().to_string());
    }

    let source = format!(
        "var init = require('{}/scripts/init.js'); init.apply(null, JSON.parse(process.argv[1]));",
        core_package
    );
    let data = serde_json::json!([
        root.display().to_string(),
        app_name,
        verbose,
        invocation_dir.display().to_string(),
        template_name,
    ]);

    args.push("-e".to_string());
    args.push(source);
    args.push("--".to_string());
    args.push(data.to_string());
    args
}

/// Run the template init script inside the project root.
pub fn run_init_script(args: &[String], root: &Path) -> Result<()> {
    tracing::debug!("running init script in {}", root.display());

    let status = Command::new("node")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| GroundworkError::InitFailed { code: None })?;

    if status.success() {
        Ok(())
    } else {
        Err(GroundworkError::InitFailed {
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn init_args_carry_json_payload() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-app");
        std::fs::create_dir(&root).unwrap();

        let args = init_script_args(
            "groundwork-scripts",
            &root,
            "my-app",
            true,
            &PathBuf::from("/work"),
            Some("groundwork-template"),
        );

        assert_eq!(args[0], "-e");
        assert!(args[1].contains("groundwork-scripts/scripts/init.js"));
        assert_eq!(args[2], "--");

        let payload: serde_json::Value = serde_json::from_str(&args[3]).unwrap();
        let arr = payload.as_array().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[1], "my-app");
        assert_eq!(arr[2], true);
        assert_eq!(arr[3], "/work");
        assert_eq!(arr[4], "groundwork-template");
    }

    #[test]
    fn init_args_pass_null_for_absent_template() {
        let temp = TempDir::new().unwrap();
        let args = init_script_args(
            "groundwork-scripts",
            temp.path(),
            "app",
            false,
            &PathBuf::from("/work"),
            None,
        );

        let payload: serde_json::Value = serde_json::from_str(args.last().unwrap()).unwrap();
        assert!(payload.as_array().unwrap()[4].is_null());
    }

    #[test]
    fn init_args_preload_pnp_loader_when_present() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PNP_LOADER), "").unwrap();

        let args = init_script_args(
            "groundwork-scripts",
            temp.path(),
            "app",
            false,
            &PathBuf::from("/work"),
            None,
        );

        assert_eq!(args[0], "--require");
        assert!(args[1].ends_with(PNP_LOADER));
        assert_eq!(args[2], "-e");
    }

    #[test]
    fn installer_failure_reports_reconstructed_command() {
        let temp = TempDir::new().unwrap();
        let plan = InstallPlan {
            command: "false",
            args: vec![],
            online: true,
            verbose: false,
        };

        let err = run_installer(&plan, temp.path()).unwrap_err();
        assert!(matches!(
            err,
            GroundworkError::InstallerFailed { code: Some(1), .. }
        ));
    }

    #[test]
    fn missing_installer_binary_fails_without_code() {
        let temp = TempDir::new().unwrap();
        let plan = InstallPlan {
            command: "definitely-not-a-real-binary",
            args: vec![],
            online: true,
            verbose: false,
        };

        let err = run_installer(&plan, temp.path()).unwrap_err();
        assert!(matches!(
            err,
            GroundworkError::InstallerFailed { code: None, .. }
        ));
    }
}
