pub mod keymap;
pub mod renderer;
pub mod status_bar;
pub mod tile_view;

pub use renderer::{KeyboardSource, TerminalGuard, TerminalSink};
