//! Status Bar View Component
//!
//! Renders the bottom bar with the cursor position, header labels, playback
//! mode and key help.

use eyegrid_core::{GridShape, PlaybackMode};
use eyegrid_runtime::Frame;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::time::Duration;

pub struct StatusBarView<'a> {
    frame: &'a Frame,
    shape: GridShape,
    delay: Duration,
}

impl<'a> StatusBarView<'a> {
    pub fn new(frame: &'a Frame, shape: GridShape, delay: Duration) -> Self {
        Self {
            frame,
            shape,
            delay,
        }
    }

    fn mode_span(&self) -> Span<'static> {
        match self.frame.mode {
            PlaybackMode::Autoplay => Span::styled(
                format!("▶ {}ms", self.delay.as_millis()),
                Style::default().fg(Color::Green),
            ),
            PlaybackMode::Manual => {
                Span::styled("⏸ paused", Style::default().fg(Color::Yellow))
            }
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let cursor = self.frame.cursor;
        let status_line = Line::from(vec![
            Span::raw(format!(
                "Row {}/{} Col {}/{} ",
                cursor.row() + 1,
                self.shape.rows(),
                cursor.col() + 1,
                self.shape.cols()
            )),
            Span::raw("| "),
            Span::styled(&self.frame.intensity, Style::default().fg(Color::Cyan)),
            Span::raw(" × "),
            Span::styled(&self.frame.emotion, Style::default().fg(Color::Magenta)),
            Span::raw(" | "),
            self.mode_span(),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[space]", key),
            Span::raw("play/pause "),
            Span::styled("[←↑↓→/wasd]", key),
            Span::raw("move"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
