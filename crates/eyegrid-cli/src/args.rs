use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eyegrid")]
#[command(about = "Browse a labeled expression sprite atlas in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Configuration file (default: EYEGRID_CONFIG or the platform config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Atlas image (PNG or JPEG)")]
    pub atlas: Option<PathBuf>,

    #[arg(long, global = true, help = "Label table file (default: built-in 7x7 labels)")]
    pub labels: Option<PathBuf>,

    #[arg(long, global = true, help = "Cell delimiter of the label table")]
    pub delimiter: Option<char>,

    #[arg(long, global = true, help = "Grid rows (intensity levels)")]
    pub rows: Option<usize>,

    #[arg(long, global = true, help = "Grid columns (emotion categories)")]
    pub cols: Option<usize>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse tiles interactively (default)
    View {
        #[arg(long, help = "Autoplay delay in milliseconds")]
        delay_ms: Option<u64>,

        #[arg(long, help = "Start with autoplay off")]
        paused: bool,
    },

    /// Print the label table
    Labels,

    /// Print atlas geometry
    Inspect,

    /// Write every tile to a PNG file plus a manifest.csv
    Export {
        #[arg(long)]
        out: PathBuf,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Print the resolved configuration file path
    Path,

    /// Write the effective configuration to the config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Whether the selected command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::View { .. }))
    }
}
