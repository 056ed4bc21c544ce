//! # js-toggle
//!
//! Toggles whether `.js` files are hidden in a VS Code settings file.
//!
//! The settings path is remembered in a one-line path cache; the first run
//! prompts for it. Plain `settings.json` files and `*.code-workspace` files
//! are edited as JSON (the latter under their `"settings"` key). Files VS Code
//! accepts but strict JSON does not, such as ones with comments, are patched
//! line by line by commenting the `"**/*.js": true` entry in or out.
//!
//! ```no_run
//! use js_toggle::core::{PathCache, ToggleRule, Toggler};
//!
//! let toggler = Toggler::new(PathCache::default(), ToggleRule::default());
//! let report = toggler.run()?;
//! println!("{}", report.outcome.message(toggler.rule()));
//! # Ok::<(), js_toggle::core::ToggleError>(())
//! ```

/// Command-line interface and argument parsing
pub mod cli;
/// Tool configuration, platform paths and validation
pub mod config;
/// Settings handlers, path cache and the toggle pipeline
pub mod core;

pub use crate::config::ToolConfig;
pub use crate::core::{
    ConfigHandler, ErrorKind, LoadMode, PathCache, SettingsFormat, ToggleError, ToggleOutcome,
    ToggleReport, ToggleRule, Toggler,
};
