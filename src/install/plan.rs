//! Installer command selection.
//!
//! Two mutually exclusive command shapes: yarn supports plug-n-play linkage
//! and an explicit `--offline` flag; npm supports neither (PnP is dropped
//! with a warning, offline-ness is npm's own cache fallback). Dependency
//! specifiers are positional and order-preserving, and yarn's `--cwd` must
//! trail the dependency list or the argument parser mis-associates it.

use std::path::Path;

/// The supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// The binary invoked for this manager.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarnpkg",
        }
    }

    /// Whether this manager installs against the default yarn registry
    /// (the only registry we probe for connectivity).
    pub fn uses_probed_registry(&self) -> bool {
        matches!(self, Self::Yarn)
    }
}

/// Installer invocation knobs, threaded down from the CLI configuration.
#[derive(Debug, Clone, Copy)]
pub struct InstallConfig {
    pub manager: PackageManager,
    pub online: bool,
    pub use_pnp: bool,
    pub verbose: bool,
}

/// A fully assembled installer invocation.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub command: &'static str,
    pub args: Vec<String>,
    pub online: bool,
    pub verbose: bool,
}

impl InstallPlan {
    /// Reconstruct the command line for error reporting.
    pub fn command_line(&self) -> String {
        let mut line = self.command.to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Build the installer invocation for the chosen manager.
///
/// Returns the plan plus any non-fatal warnings about dropped features.
pub fn build_install_plan(
    config: &InstallConfig,
    root: &Path,
    dependencies: &[String],
) -> (InstallPlan, Vec<String>) {
    let mut warnings = Vec::new();
    let mut args: Vec<String>;

    match config.manager {
        PackageManager::Yarn => {
            args = vec!["add".to_string(), "--exact".to_string()];
            if !config.online {
                args.push("--offline".to_string());
            }
            if config.use_pnp {
                args.push("--enable-pnp".to_string());
            }
            args.extend(dependencies.iter().cloned());
            // Trailing flags bind to the command, not the positional list.
            args.push("--cwd".to_string());
            args.push(root.display().to_string());
        }
        PackageManager::Npm => {
            if config.use_pnp {
                warnings.push(
                    "NPM does not support Plug'n'Play; installing without it.".to_string(),
                );
            }
            args = vec![
                "install".to_string(),
                "--save".to_string(),
                "--save-exact".to_string(),
                "--loglevel".to_string(),
                "error".to_string(),
            ];
            args.extend(dependencies.iter().cloned());
        }
    }

    if config.verbose {
        args.push("--verbose".to_string());
    }

    (
        InstallPlan {
            command: config.manager.command(),
            args,
            online: config.online,
            verbose: config.verbose,
        },
        warnings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn config(manager: PackageManager) -> InstallConfig {
        InstallConfig {
            manager,
            online: true,
            use_pnp: false,
            verbose: false,
        }
    }

    #[test]
    fn yarn_plan_shape() {
        let root = PathBuf::from("/work/my-app");
        let (plan, warnings) = build_install_plan(
            &config(PackageManager::Yarn),
            &root,
            &deps(&["react", "react-dom", "groundwork-scripts"]),
        );

        assert_eq!(plan.command, "yarnpkg");
        assert_eq!(
            plan.args,
            vec![
                "add",
                "--exact",
                "react",
                "react-dom",
                "groundwork-scripts",
                "--cwd",
                "/work/my-app"
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn yarn_offline_flag_precedes_dependencies() {
        let root = PathBuf::from("/r");
        let mut cfg = config(PackageManager::Yarn);
        cfg.online = false;

        let (plan, _) = build_install_plan(&cfg, &root, &deps(&["react"]));

        let offline = plan.args.iter().position(|a| a == "--offline").unwrap();
        let dep = plan.args.iter().position(|a| a == "react").unwrap();
        assert!(offline < dep);
    }

    #[test]
    fn yarn_cwd_trails_dependency_list() {
        let root = PathBuf::from("/r");
        let (plan, _) = build_install_plan(
            &config(PackageManager::Yarn),
            &root,
            &deps(&["a", "b", "c"]),
        );

        let cwd = plan.args.iter().position(|a| a == "--cwd").unwrap();
        let last_dep = plan.args.iter().position(|a| a == "c").unwrap();
        assert!(cwd > last_dep);
    }

    #[test]
    fn yarn_pnp_flag_included() {
        let root = PathBuf::from("/r");
        let mut cfg = config(PackageManager::Yarn);
        cfg.use_pnp = true;

        let (plan, warnings) = build_install_plan(&cfg, &root, &deps(&["react"]));

        assert!(plan.args.contains(&"--enable-pnp".to_string()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn npm_plan_shape() {
        let root = PathBuf::from("/r");
        let (plan, warnings) =
            build_install_plan(&config(PackageManager::Npm), &root, &deps(&["react"]));

        assert_eq!(plan.command, "npm");
        assert_eq!(
            plan.args,
            vec!["install", "--save", "--save-exact", "--loglevel", "error", "react"]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn npm_drops_pnp_with_warning() {
        let root = PathBuf::from("/r");
        let mut cfg = config(PackageManager::Npm);
        cfg.use_pnp = true;

        let (plan, warnings) = build_install_plan(&cfg, &root, &deps(&["react"]));

        assert!(!plan.args.iter().any(|a| a.contains("pnp")));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Plug'n'Play"));
    }

    #[test]
    fn npm_has_no_offline_flag() {
        let root = PathBuf::from("/r");
        let mut cfg = config(PackageManager::Npm);
        cfg.online = false;

        let (plan, _) = build_install_plan(&cfg, &root, &deps(&["react"]));

        assert!(!plan.args.contains(&"--offline".to_string()));
    }

    #[test]
    fn verbose_flag_is_last_for_both_managers() {
        let root = PathBuf::from("/r");
        for manager in [PackageManager::Yarn, PackageManager::Npm] {
            let mut cfg = config(manager);
            cfg.verbose = true;
            let (plan, _) = build_install_plan(&cfg, &root, &deps(&["react"]));
            assert_eq!(plan.args.last().map(String::as_str), Some("--verbose"));
        }
    }

    #[test]
    fn dependency_insertion_order_is_preserved() {
        let root = PathBuf::from("/r");
        let ordered = deps(&["z-last", "a-first", "m-middle"]);
        let (plan, _) = build_install_plan(&config(PackageManager::Npm), &root, &ordered);

        let positions: Vec<usize> = ordered
            .iter()
            .map(|d| plan.args.iter().position(|a| a == d).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn command_line_reconstruction() {
        let root = PathBuf::from("/r");
        let (plan, _) =
            build_install_plan(&config(PackageManager::Npm), &root, &deps(&["react"]));
        assert_eq!(
            plan.command_line(),
            "npm install --save --save-exact --loglevel error react"
        );
    }
}
