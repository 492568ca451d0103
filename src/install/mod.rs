//! Installer selection, connectivity probing, and child-process execution.

pub mod connectivity;
pub mod environment;
pub mod plan;
pub mod runner;

pub use connectivity::check_online;
pub use plan::{build_install_plan, InstallConfig, InstallPlan, PackageManager};
pub use runner::{init_script_args, run_init_script, run_installer, PNP_LOADER};
