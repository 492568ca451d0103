//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

const PACKAGE_VERSION_HELP: &str = "\
A custom --package-version can be one of:
  - a specific version:  1.0.2
  - a specific tag:      @next
  - a fork published on the registry:  my-custom-scripts
  - a local path relative to the current directory:  file:../my-custom-scripts
  - a tarball:  https://example.com/my-custom-scripts.tgz
It is not needed unless you specifically want to use a fork.";

/// groundwork - Bootstrap new application projects.
#[derive(Debug, Parser)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project in the given directory
    Create(CreateArgs),

    /// Print environment debug info
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
#[command(after_help = PACKAGE_VERSION_HELP)]
pub struct CreateArgs {
    /// Directory to create the project in
    pub directory: PathBuf,

    /// Use npm even when yarn is available
    #[arg(long)]
    pub use_npm: bool,

    /// Enable Plug'n'Play dependency linkage (yarn only)
    #[arg(long)]
    pub use_pnp: bool,

    /// Install from the local cache without probing the registry
    #[arg(long)]
    pub offline: bool,

    /// Core package version, tag, or alternative specifier
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Project template to apply
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Skip the interactive feature menu
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
