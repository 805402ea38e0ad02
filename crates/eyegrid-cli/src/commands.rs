use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use anyhow::{Context, Result};
use eyegrid_runtime::{Config, resolve_config_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&cli, &config_path)?;
    let format = cli.format;

    match cli.command {
        None => handlers::view::handle(config, None, false),

        Some(Commands::View { delay_ms, paused }) => {
            handlers::view::handle(config, delay_ms, paused)
        }

        Some(Commands::Labels) => handlers::labels::handle(&config, format),

        Some(Commands::Inspect) => handlers::inspect::handle(&config, format),

        Some(Commands::Export { out }) => handlers::export::handle(&config, &out, format),

        Some(Commands::Config { command }) => match command {
            ConfigCommand::Show => handlers::config::show(&config),
            ConfigCommand::Path => handlers::config::path(&config_path),
            ConfigCommand::Init { force } => handlers::config::init(&config, &config_path, force),
        },
    }
}

/// Config file values with command-line overrides applied on top
fn load_config(cli: &Cli, config_path: &Path) -> Result<Config> {
    let mut config = Config::load_from(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(atlas) = &cli.atlas {
        config.atlas.path = Some(atlas.clone());
    }
    if let Some(labels) = &cli.labels {
        config.labels.path = Some(labels.clone());
    }
    if let Some(delimiter) = cli.delimiter {
        config.labels.delimiter = delimiter;
    }
    if let Some(rows) = cli.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.grid.cols = cols;
    }

    config.validate()?;
    tracing::debug!(path = %config_path.display(), "configuration resolved");
    Ok(config)
}
