use super::errors::ToggleResult;
use super::types::{SettingsFormat, ToggleOutcome};

/// A loaded settings document that knows how to flip the toggle key
///
/// One implementation exists per on-disk shape; [`crate::core::load_config`]
/// picks it once, and everything after that goes through this trait.
pub trait ConfigHandler: std::fmt::Debug {
    /// Which shape this handler was loaded as
    fn format(&self) -> SettingsFormat;

    /// Report the current state without mutating anything
    fn current(&self) -> ToggleOutcome;

    /// Flip the toggle key in memory and report the new state
    fn toggle(&mut self) -> ToggleOutcome;

    /// Serialize back to the original on-disk shape
    fn render(&self) -> ToggleResult<String>;
}
