use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigAction;

/// Main CLI structure for js-toggle.
///
/// Running without a subcommand toggles the `.js` exclude flag in the
/// settings file remembered by the path cache.
///
/// # Examples
///
/// ```bash
/// # Flip the flag (prompts for the settings path the first time)
/// js-toggle
///
/// # Check the current state without writing
/// js-toggle status
///
/// # Toggle a workspace file once, without touching the cache
/// js-toggle --settings ~/proj/proj.code-workspace
/// ```
#[derive(Debug, Parser)]
#[command(name = "js-toggle")]
#[command(about = "Toggle hiding of .js files in VS Code settings")]
#[command(version)]
pub struct Cli {
    /// The command to execute (defaults to `toggle`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path cache location (overrides config and environment)
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Settings file to use for this run instead of the cached one
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Patch the marker line as text instead of parsing JSON
    #[arg(long, global = true)]
    pub raw: bool,
}

/// Available CLI commands for js-toggle.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Flip the .js exclude flag
    Toggle,

    /// Show whether .js files are currently hidden
    Status,

    /// Forget the cached settings path
    Reset,

    /// Manage js-toggle configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}
