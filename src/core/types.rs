use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::errors::{ToggleError, ToggleResult};

/// Default glob whose visibility is toggled
pub const DEFAULT_TOGGLE_KEY: &str = "**/*.js";
/// Default exclude-list key in VS Code settings
pub const DEFAULT_EXCLUDE_KEY: &str = "files.exclude";
/// Wrapper key used by `.code-workspace` files
pub const DEFAULT_WRAPPER_KEY: &str = "settings";

/// On-disk representation of a settings file, chosen once at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// `settings.json`: exclude-list at the top level
    StructuredFlat,
    /// `*.code-workspace`: exclude-list nested under the wrapper key
    StructuredWrapped,
    /// Line-oriented patching of a commented/uncommented marker line
    RawText,
}

impl SettingsFormat {
    /// Pick the structured variant from a file extension
    pub fn from_path(path: &Path) -> ToggleResult<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::StructuredFlat),
            "code-workspace" => Ok(Self::StructuredWrapped),
            _ => Err(ToggleError::UnsupportedFormat { extension }),
        }
    }
}

impl fmt::Display for SettingsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuredFlat => write!(f, "settings"),
            Self::StructuredWrapped => write!(f, "workspace"),
            Self::RawText => write!(f, "raw text"),
        }
    }
}

/// Which key gets flipped and where it lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRule {
    pub toggle_key: String,
    pub exclude_key: String,
    pub wrapper_key: String,
}

impl Default for ToggleRule {
    fn default() -> Self {
        Self {
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
            exclude_key: DEFAULT_EXCLUDE_KEY.to_string(),
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
        }
    }
}

impl ToggleRule {
    /// Uncommented form of the raw-text marker, e.g. `"**/*.js": true`
    pub fn marker(&self) -> String {
        format!("\"{}\": true", self.toggle_key)
    }

    /// Human label for the toggled files: `**/*.js` becomes `.js`
    pub fn label(&self) -> &str {
        let last = self
            .toggle_key
            .rsplit('/')
            .next()
            .unwrap_or(self.toggle_key.as_str());
        let trimmed = last.trim_start_matches('*');
        if trimmed.is_empty() {
            self.toggle_key.as_str()
        } else {
            trimmed
        }
    }
}

/// Result of a toggle or status check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Flag is now true; files are excluded from the explorer
    Hiding,
    /// Flag is now false (or the marker is commented out)
    Showing,
    /// Raw text without a marker line; nothing changed
    Missing,
}

impl ToggleOutcome {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Self::Hiding
        } else {
            Self::Showing
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Console line for this outcome, e.g. "hiding .js files"
    pub fn message(&self, rule: &ToggleRule) -> String {
        match self {
            Self::Hiding => format!("hiding {} files", rule.label()),
            Self::Showing => format!("showing {} files", rule.label()),
            Self::Missing => format!(
                "missing: no {} exclude line found, file left unchanged",
                rule.label()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SettingsFormat::from_path(&PathBuf::from("/repo/.vscode/settings.json")).unwrap(),
            SettingsFormat::StructuredFlat
        );
        assert_eq!(
            SettingsFormat::from_path(&PathBuf::from("proj.code-workspace")).unwrap(),
            SettingsFormat::StructuredWrapped
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = SettingsFormat::from_path(&PathBuf::from("settings.yaml")).unwrap_err();
        assert!(matches!(
            err,
            ToggleError::UnsupportedFormat { ref extension } if extension == "yaml"
        ));

        let err = SettingsFormat::from_path(&PathBuf::from("Makefile")).unwrap_err();
        assert!(matches!(
            err,
            ToggleError::UnsupportedFormat { ref extension } if extension.is_empty()
        ));
    }

    #[test]
    fn test_rule_marker_and_label() {
        let rule = ToggleRule::default();
        assert_eq!(rule.marker(), "\"**/*.js\": true");
        assert_eq!(rule.label(), ".js");

        let rule = ToggleRule {
            toggle_key: "**/*.map".to_string(),
            ..Default::default()
        };
        assert_eq!(rule.label(), ".map");
    }

    #[test]
    fn test_outcome_messages() {
        let rule = ToggleRule::default();
        assert_eq!(ToggleOutcome::Hiding.message(&rule), "hiding .js files");
        assert_eq!(ToggleOutcome::Showing.message(&rule), "showing .js files");
        assert!(ToggleOutcome::Missing.message(&rule).starts_with("missing"));
        assert!(!ToggleOutcome::Missing.changed());
    }
}
