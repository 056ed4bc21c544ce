/// File helpers shared by the handlers and the path cache
///
/// Errors are mapped into [`ToggleError`] here so callers only deal with
/// tagged kinds.
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::errors::{ToggleError, ToggleResult};

/// Read a whole file, turning "not found" into [`ToggleError::TargetNotFound`]
pub fn read_text(path: &Path) -> ToggleResult<String> {
    fs::read_to_string(path).map_err(|e| ToggleError::from_read(path, e))
}

/// Overwrite a file with `contents`
pub fn write_text(path: &Path, contents: &str) -> ToggleResult<()> {
    fs::write(path, contents).map_err(|source| ToggleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize with two-space indentation and no trailing newline
pub fn to_indented_json<T>(value: &T) -> ToggleResult<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}
