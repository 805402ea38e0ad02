mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod types;
pub mod ui;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
