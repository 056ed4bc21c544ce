#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Shared test utilities for the toggle integration tests
pub mod test_helpers {
    use super::*;

    /// A scratch directory holding a path cache and one settings file
    pub struct Sandbox {
        pub dir: TempDir,
        pub cache_file: PathBuf,
        pub settings: PathBuf,
    }

    impl Sandbox {
        /// Create a sandbox whose settings file is `name` with `content`;
        /// the cache is left absent
        pub fn new(name: &str, content: &str) -> Result<Self> {
            let dir = TempDir::new()?;
            let settings = dir.path().join(".vscode").join(name);
            fs::create_dir_all(settings.parent().unwrap_or(dir.path()))?;
            fs::write(&settings, content)?;
            let cache_file = dir.path().join(".vscode").join("settingsPath.txt");
            Ok(Self {
                dir,
                cache_file,
                settings,
            })
        }

        /// Point the cache at the settings file
        pub fn with_cached_path(self) -> Result<Self> {
            fs::write(&self.cache_file, self.settings.to_string_lossy().as_bytes())?;
            Ok(self)
        }

        pub fn settings_json(&self) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(&fs::read_to_string(&self.settings)?)?)
        }

        pub fn settings_text(&self) -> Result<String> {
            Ok(fs::read_to_string(&self.settings)?)
        }
    }

    /// A VS Code settings file with comments, which strict JSON rejects
    pub fn jsonc_settings(marker_line: &str) -> String {
        format!(
            "{{\n    // Editor\n    \"editor.tabSize\": 4,\n    \"files.exclude\": {{\n        \"**/.git\": true,\n{marker_line}\n    }},\n}}\n"
        )
    }
}
