use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::core::{ErrorKind, ToggleError};

pub mod config;
pub mod reset;
pub mod status;
pub mod toggle;

pub use config::ConfigCommand;
pub use reset::ResetCommand;
pub use status::StatusCommand;
pub use toggle::ToggleCommand;

/// Trait for CLI command implementations
pub trait Command {
    /// Execute the command with the given arguments
    fn execute(&self) -> Result<()>;
}

/// Print recoverable toggle errors and propagate everything else
///
/// Missing files are printed plainly and unsupported extensions in red;
/// both leave the process to exit normally.
pub fn report_toggle_error<W: Write>(err: ToggleError, out: &mut W) -> Result<()> {
    match err.kind() {
        ErrorKind::MissingFile => {
            writeln!(out, "{err}")?;
            Ok(())
        }
        ErrorKind::UnsupportedFormat => {
            writeln!(out, "{}", err.to_string().red().bold())?;
            Ok(())
        }
        ErrorKind::Other => Err(err.into()),
    }
}
