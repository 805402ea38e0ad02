use crate::args::Cli;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const CRATES: [&str; 3] = ["eyegrid", "eyegrid_core", "eyegrid_runtime"];

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `--log-level`. Logs go to `--log-file`
/// when given; otherwise to stderr, except for the interactive viewer where
/// the terminal belongs to the UI and logs are dropped.
pub fn init(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATES
            .iter()
            .map(|krate| format!("{}={}", krate, cli.log_level))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    let (writer, ansi) = match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if cli.is_interactive() => (BoxMakeWriter::new(std::io::sink), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}
