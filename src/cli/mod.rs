pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::config::{config_file, validate_startup_config, ToolConfig};
use crate::core::{LoadMode, Toggler};
use commands::{Command, ConfigCommand, ResetCommand, StatusCommand, ToggleCommand};

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("js_toggle={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let config_path = config_file()?;
    let mut config = ToolConfig::load_from(&config_path)?.with_env_overrides();
    if let Some(cache_file) = &cli.cache_file {
        config.cache_file = cache_file.clone();
    }
    validate_startup_config(&config)?;
    debug!("using path cache {}", config.cache_file.display());

    let command: Box<dyn Command> = match cli.command.clone().unwrap_or(Commands::Toggle) {
        Commands::Toggle => Box::new(ToggleCommand::new(build_toggler(&cli, &config))),
        Commands::Status => Box::new(StatusCommand::new(build_toggler(&cli, &config))),
        Commands::Reset => Box::new(ResetCommand::new(config.path_cache())),
        Commands::Config { action } => Box::new(ConfigCommand::new(action, config, config_path)),
    };

    command.execute()
}

fn build_toggler(cli: &Cli, config: &ToolConfig) -> Toggler {
    let mode = if cli.raw {
        LoadMode::RawText
    } else {
        LoadMode::Auto
    };
    let toggler = Toggler::new(config.path_cache(), config.rule()).with_mode(mode);

    match &cli.settings {
        Some(settings) => toggler.with_target(settings),
        None => toggler,
    }
}
