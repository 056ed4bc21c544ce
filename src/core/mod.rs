pub mod cache;
pub mod errors;
pub mod io_utils;
pub mod loader;
pub mod raw_text;
pub mod structured;
pub mod toggler;
pub mod traits;
pub mod types;

pub use cache::{PathCache, DEFAULT_CACHE_FILE, PROMPT};
pub use errors::{ErrorKind, ToggleError, ToggleResult};
pub use loader::{load_config, persist_config, LoadMode};
pub use raw_text::RawTextSettings;
pub use structured::StructuredSettings;
pub use toggler::{ToggleReport, Toggler};
pub use traits::ConfigHandler;
pub use types::{
    SettingsFormat, ToggleOutcome, ToggleRule, DEFAULT_EXCLUDE_KEY, DEFAULT_TOGGLE_KEY,
    DEFAULT_WRAPPER_KEY,
};
