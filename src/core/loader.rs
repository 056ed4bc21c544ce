use std::path::Path;
use tracing::{debug, info};

use super::errors::ToggleResult;
use super::io_utils::{read_text, write_text};
use super::raw_text::RawTextSettings;
use super::structured::StructuredSettings;
use super::traits::ConfigHandler;
use super::types::{SettingsFormat, ToggleRule};

/// How hard to try parsing the settings file as JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Parse as JSON and fall back to line patching on failure
    #[default]
    Auto,
    /// Skip JSON parsing and patch the marker line directly
    RawText,
}

/// Load a settings file and pick the handler for its shape
///
/// The extension is checked before the file is touched, so an unsupported
/// path reports [`crate::core::ToggleError::UnsupportedFormat`] even if it
/// does not exist.
pub fn load_config(
    path: &Path,
    rule: &ToggleRule,
    mode: LoadMode,
) -> ToggleResult<Box<dyn ConfigHandler>> {
    let format = SettingsFormat::from_path(path)?;
    let text = read_text(path)?;

    if mode == LoadMode::RawText {
        debug!("raw text mode requested for {}", path.display());
        return Ok(Box::new(RawTextSettings::parse(&text, rule.clone())));
    }

    match StructuredSettings::parse(&text, format, rule.clone()) {
        Some(settings) => {
            debug!("loaded {} as {} JSON", path.display(), format);
            Ok(Box::new(settings))
        }
        None => {
            info!(
                "{} is not plain JSON, falling back to line patching",
                path.display()
            );
            Ok(Box::new(RawTextSettings::parse(&text, rule.clone())))
        }
    }
}

/// Write a handler's contents back over `path`
pub fn persist_config(path: &Path, handler: &dyn ConfigHandler) -> ToggleResult<()> {
    let rendered = handler.render()?;
    write_text(path, &rendered)?;
    debug!("wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{ErrorKind, ToggleError};
    use crate::core::types::ToggleOutcome;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_json_picks_structured_flat() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        let handler = load_config(&path, &ToggleRule::default(), LoadMode::Auto).unwrap();
        assert_eq!(handler.format(), SettingsFormat::StructuredFlat);
    }

    #[test]
    fn test_workspace_picks_structured_wrapped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("proj.code-workspace");
        fs::write(&path, r#"{"folders": []}"#).unwrap();

        let handler = load_config(&path, &ToggleRule::default(), LoadMode::Auto).unwrap();
        assert_eq!(handler.format(), SettingsFormat::StructuredWrapped);
    }

    #[test]
    fn test_jsonc_falls_back_to_raw_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{\n  // hide\n  \"**/*.js\": true,\n}\n").unwrap();

        let handler = load_config(&path, &ToggleRule::default(), LoadMode::Auto).unwrap();
        assert_eq!(handler.format(), SettingsFormat::RawText);
        assert_eq!(handler.current(), ToggleOutcome::Hiding);
    }

    #[test]
    fn test_forced_raw_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        let handler = load_config(&path, &ToggleRule::default(), LoadMode::RawText).unwrap();
        assert_eq!(handler.format(), SettingsFormat::RawText);
    }

    #[test]
    fn test_missing_target_is_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config(
            &dir.path().join("settings.json"),
            &ToggleRule::default(),
            LoadMode::Auto,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingFile);
    }

    #[test]
    fn test_unsupported_extension_checked_first() {
        let err = load_config(
            Path::new("/does/not/exist/settings.toml"),
            &ToggleRule::default(),
            LoadMode::Auto,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ToggleError::UnsupportedFormat { ref extension } if extension == "toml"
        ));
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        let mut handler = load_config(&path, &ToggleRule::default(), LoadMode::Auto).unwrap();
        handler.toggle();
        persist_config(&path, handler.as_ref()).unwrap();

        let reloaded = load_config(&path, &ToggleRule::default(), LoadMode::Auto).unwrap();
        assert_eq!(reloaded.current(), ToggleOutcome::Hiding);
    }
}
