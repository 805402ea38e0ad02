//! Terminal frontend for the playback loop.
//!
//! `KeyboardSource` turns crossterm input into navigation events and
//! `TerminalSink` draws frames with Ratatui. `TerminalGuard` owns the raw
//! mode / alternate screen setup and restores the terminal when dropped,
//! including on error paths.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyegrid_core::{GridShape, InputEvent};
use eyegrid_runtime::{EventSource, Frame, FrameSink};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::keymap;
use super::status_bar::StatusBarView;
use super::tile_view::TileView;

pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state even if the loop bailed out
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub struct KeyboardSource;

impl EventSource for KeyboardSource {
    fn next_event(&mut self, timeout: Option<Duration>) -> eyegrid_runtime::Result<InputEvent> {
        if let Some(timeout) = timeout
            && !event::poll(timeout)?
        {
            return Ok(InputEvent::Timeout);
        }
        let event = event::read()?;
        Ok(keymap::map_event(&event))
    }
}

pub struct TerminalSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    shape: GridShape,
    delay: Duration,
}

impl TerminalSink {
    pub fn new(shape: GridShape, delay: Duration) -> io::Result<Self> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            shape,
            delay,
        })
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl FrameSink for TerminalSink {
    fn render(&mut self, frame: &Frame) -> eyegrid_runtime::Result<()> {
        let shape = self.shape;
        let delay = self.delay;

        self.terminal.draw(|f| {
            let chunks = Layout::vertical([
                Constraint::Min(3),    // Tile
                Constraint::Length(3), // Status bar
            ])
            .split(f.area());

            let title = Line::from(vec![
                Span::raw(" eyegrid "),
                Span::styled(
                    format!("{} ", frame.label),
                    Style::default().fg(Color::Green),
                ),
            ]);
            let block = Block::default().title(title).borders(Borders::ALL);
            let inner = block.inner(chunks[0]);
            f.render_widget(block, chunks[0]);

            if inner.width == 0 || inner.height == 0 {
                f.render_widget(Paragraph::new("terminal too small"), chunks[0]);
            } else {
                f.render_widget(TileView::new(&frame.tile, &frame.label), inner);
            }

            f.render_widget(StatusBarView::new(frame, shape, delay), chunks[1]);
        })?;
        Ok(())
    }
}
