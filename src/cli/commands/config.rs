use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::commands::Command;
use crate::config::{ConfigAction, ToolConfig};

pub struct ConfigCommand {
    action: ConfigAction,
    config: ToolConfig,
    config_path: PathBuf,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, config: ToolConfig, config_path: PathBuf) -> Self {
        Self {
            action,
            config,
            config_path,
        }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.action {
            ConfigAction::Init { force } => {
                if self.config_path.exists() && !force {
                    writeln!(
                        out,
                        "Configuration already exists at {}. Use --force to overwrite.",
                        self.config_path.display()
                    )?;
                    return Ok(());
                }

                if let Some(parent) = self.config_path.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create config directory: {}", parent.display())
                    })?;
                }
                let toml_content = ToolConfig::default().to_toml()?;
                fs::write(&self.config_path, toml_content).with_context(|| {
                    format!("Failed to write config file: {}", self.config_path.display())
                })?;
                writeln!(
                    out,
                    "Configuration initialized at {}",
                    self.config_path.display()
                )?;
            }

            ConfigAction::Show => {
                writeln!(out, "# {}", self.config_path.display())?;
                write!(out, "{}", self.config.to_toml()?)?;
            }
        }

        Ok(())
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> Result<()> {
        self.run(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let command = ConfigCommand::new(
            ConfigAction::Init { force: false },
            ToolConfig::default(),
            path.clone(),
        );

        let mut out = Vec::new();
        command.run(&mut out).unwrap();

        assert_eq!(ToolConfig::load_from(&path).unwrap(), ToolConfig::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "toggle_key = \"**/*.map\"\n").unwrap();
        let command = ConfigCommand::new(
            ConfigAction::Init { force: false },
            ToolConfig::default(),
            path.clone(),
        );

        let mut out = Vec::new();
        command.run(&mut out).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "toggle_key = \"**/*.map\"\n");
        assert!(String::from_utf8(out).unwrap().contains("--force"));
    }

    #[test]
    fn test_show_prints_effective_config() {
        let config = ToolConfig {
            toggle_key: "**/*.map".to_string(),
            ..Default::default()
        };
        let command = ConfigCommand::new(ConfigAction::Show, config, PathBuf::from("c.toml"));

        let mut out = Vec::new();
        command.run(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("# c.toml\n"));
        assert!(out.contains("toggle_key = \"**/*.map\""));
    }
}
