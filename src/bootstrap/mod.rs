//! Installation orchestration.
//!
//! The bootstrap pipeline drives one project creation from an empty target
//! directory to an initialized project:
//!
//! scaffold → resolve specifiers → probe connectivity → install → init
//!
//! Conflict detection happens before anything is written, so pre-scaffold
//! failures need no cleanup. Every failure after scaffolding funnels into
//! [`rollback`], which deletes the generated artifacts and, if the root
//! emptied, the root itself — re-running afterwards behaves exactly like a
//! first run.
//!
//! Side effects (child processes, DNS, registry lookups) are injected
//! through [`BootstrapContext`] so the pipeline is fully testable.

pub mod compat;
pub mod rollback;

use std::path::{Path, PathBuf};

use crate::error::{GroundworkError, Result};
use crate::install::{
    build_install_plan, check_online, environment, init_script_args, run_init_script,
    run_installer, InstallConfig, InstallPlan, PackageManager,
};
use crate::package::{
    core_install_package, template_install_package, PackageResolver, ResolvedPackage,
};
use crate::project::{
    conflicting_entries, remove_stale_logs, scaffold_project, seed_cached_lockfile,
    validate_app_name,
};
use crate::ui::UserInterface;

/// Runtime dependencies installed into every new project, ahead of the core
/// package, the template, and any optional features.
pub const BASE_DEPENDENCIES: [&str; 2] = ["react", "react-dom"];

/// Optional feature packages offered by the interactive menu.
pub const FEATURE_CHOICES: [&str; 5] = ["mobx", "axios", "react-router", "antd", "dayjs"];

/// Configuration for one bootstrap run.
///
/// This is the single entry point for every recognized option; in
/// particular `use_pnp` is always threaded explicitly and defaults to off.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Target directory as the user typed it.
    pub directory: PathBuf,
    /// Directory the tool was launched from; anchors relative specifiers.
    pub invocation_dir: PathBuf,
    /// Selected package manager.
    pub manager: PackageManager,
    /// Request plug-n-play linkage (yarn only).
    pub use_pnp: bool,
    /// Force offline/online instead of probing.
    pub offline: Option<bool>,
    /// Pass `--verbose` to child processes.
    pub verbose: bool,
    /// Raw template specifier, if any.
    pub template: Option<String>,
    /// Raw core package version/specifier, if any.
    pub package_version: Option<String>,
    /// Optional feature packages to install.
    pub features: Vec<String>,
}

/// Injectable side effects for the bootstrap pipeline.
pub struct BootstrapContext<'a> {
    /// Resolve the core and template specifiers concurrently.
    #[allow(clippy::type_complexity)]
    pub resolve_pair:
        &'a dyn Fn(&Path, &str, &str) -> (Result<ResolvedPackage>, Result<ResolvedPackage>),
    /// Probe registry connectivity.
    pub check_online: &'a dyn Fn(PackageManager) -> bool,
    /// Run the installer child process.
    pub run_installer: &'a dyn Fn(&InstallPlan, &Path) -> Result<()>,
    /// Run the template init script child process.
    pub run_init: &'a dyn Fn(&[String], &Path) -> Result<()>,
    /// Whether yarn installs against the default registry.
    pub yarn_uses_default_registry: &'a dyn Fn() -> bool,
    /// Collect non-fatal environment warnings.
    pub environment_warnings: &'a dyn Fn(PackageManager) -> Vec<String>,
}

/// Build the default `BootstrapContext` for production use.
pub fn default_context() -> BootstrapContext<'static> {
    BootstrapContext {
        resolve_pair: &|dir, core, template| {
            PackageResolver::new(dir).resolve_pair(core, template)
        },
        check_online: &|manager| check_online(manager),
        run_installer: &|plan, root| run_installer(plan, root),
        run_init: &|args, root| run_init_script(args, root),
        yarn_uses_default_registry: &|| environment::yarn_uses_default_registry(),
        environment_warnings: &|manager| environment::environment_warnings(manager),
    }
}

/// Run one full bootstrap.
pub fn run(
    options: &BootstrapOptions,
    ui: &mut dyn UserInterface,
    ctx: &BootstrapContext<'_>,
) -> Result<()> {
    let root = options.invocation_dir.join(&options.directory);
    let app_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| GroundworkError::InvalidProjectName {
            name: options.directory.display().to_string(),
            reason: "cannot derive a project name from this path".to_string(),
        })?;

    // Everything up to scaffolding must run before any file is written.
    validate_app_name(&app_name)?;

    let conflicts = conflicting_entries(&root)?;
    if !conflicts.is_empty() {
        ui.error(&format!(
            "The directory {} contains files that could conflict:",
            app_name
        ));
        for conflict in &conflicts {
            ui.message(&format!("  {}", conflict));
        }
        ui.message("Either try using a new directory name, or remove the files listed above.");
        return Err(GroundworkError::UnsafeDirectory { path: root });
    }
    remove_stale_logs(&root)?;

    for warning in (ctx.environment_warnings)(options.manager) {
        ui.warning(&warning);
    }

    ui.message(&format!("Creating a new app in {}.", root.display()));

    match execute_pipeline(options, &root, &app_name, ui, ctx) {
        Ok(()) => {
            ui.success(&format!("Created {} at {}", app_name, root.display()));
            Ok(())
        }
        Err(err) => {
            report_failure(&err, ui);
            if let Err(rollback_err) = rollback::rollback(&root, ui) {
                ui.error(&format!("Rollback incomplete: {}", rollback_err));
            }
            ui.message("Done.");
            Err(err)
        }
    }
}

/// Everything that may leave artifacts behind: scaffolding, lockfile
/// seeding, installation, and initialization. Any failure in here is
/// answered by a rollback.
fn execute_pipeline(
    options: &BootstrapOptions,
    root: &Path,
    app_name: &str,
    ui: &mut dyn UserInterface,
    ctx: &BootstrapContext<'_>,
) -> Result<()> {
    scaffold_project(root, app_name)?;

    if options.manager == PackageManager::Yarn && (ctx.yarn_uses_default_registry)() {
        seed_cached_lockfile(root)?;
    }

    install_and_init(options, root, app_name, ui, ctx)
}

fn report_failure(err: &GroundworkError, ui: &mut dyn UserInterface) {
    match err {
        GroundworkError::InstallerFailed { command, .. } => {
            ui.error(&format!("`{}` has failed.", command));
        }
        other => {
            // Init-script and resolution failure modes are opaque to us;
            // dump the whole error.
            ui.error("Unexpected error. Please report it as a bug:");
            ui.error(&format!("{:?}", other));
        }
    }
}

fn install_and_init(
    options: &BootstrapOptions,
    root: &Path,
    app_name: &str,
    ui: &mut dyn UserInterface,
    ctx: &BootstrapContext<'_>,
) -> Result<()> {
    let core_spec = core_install_package(
        options.package_version.as_deref(),
        &options.invocation_dir,
    );
    let template_spec =
        template_install_package(options.template.as_deref(), &options.invocation_dir);

    let mut spinner = ui.start_spinner("Resolving packages...");
    let (core_result, template_result) =
        (ctx.resolve_pair)(&options.invocation_dir, &core_spec, &template_spec);
    let (core, template) = match (core_result, template_result) {
        (Ok(core), Ok(template)) => {
            spinner.finish_success(&format!(
                "Resolved {}{}",
                core.name,
                core.version
                    .as_deref()
                    .map(|v| format!("@{}", v))
                    .unwrap_or_default()
            ));
            (core, template)
        }
        (core_result, template_result) => {
            spinner.finish_error("Failed to resolve packages");
            return Err(core_result.err().or(template_result.err()).unwrap());
        }
    };

    let online = match options.offline {
        Some(offline) => !offline,
        None => (ctx.check_online)(options.manager),
    };
    if !online {
        ui.warning("You appear to be offline.");
        if options.manager == PackageManager::Yarn {
            ui.warning("Falling back to the local Yarn cache.");
        }
    }

    let mut dependencies: Vec<String> =
        BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect();
    dependencies.push(core_spec.clone());

    let template_name = if compat::supports_templates(core.version.as_deref()) {
        dependencies.push(template_spec);
        Some(template.name)
    } else {
        if options.template.is_some() {
            ui.warning(&format!(
                "The version of {} you are installing does not support templates; creating {} without {}.",
                core.name, app_name, template.name
            ));
        }
        if compat::implies_typescript(&core_spec) {
            dependencies.extend(compat::LEGACY_TYPE_PACKAGES.iter().map(|d| d.to_string()));
        }
        None
    };

    dependencies.extend(options.features.iter().cloned());

    let config = InstallConfig {
        manager: options.manager,
        online,
        use_pnp: options.use_pnp,
        verbose: options.verbose,
    };
    let (plan, plan_warnings) = build_install_plan(&config, root, &dependencies);
    for warning in plan_warnings {
        ui.warning(&warning);
    }

    ui.message("Installing packages. This might take a couple of minutes.");
    (ctx.run_installer)(&plan, root)?;

    ui.message(&format!("Initializing project with {}.", core.name));
    let init_args = init_script_args(
        &core.name,
        root,
        app_name,
        options.verbose,
        &options.invocation_dir,
        template_name.as_deref(),
    );
    (ctx.run_init)(&init_args, root)
}
