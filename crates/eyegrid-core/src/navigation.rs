//! Cursor/mode state machine driving the tile browser.
//!
//! `NavigationState` is a plain value: every input produces a new state (or
//! ends the session) through [`NavigationState::step`], so the whole policy is
//! testable without a terminal or a clock.
//!
//! At most one cursor mutation happens per step. A directional event moves
//! the cursor and takes the place of the automatic raster advance; a
//! `Timeout` advances only while autoplay is on.

use crate::grid::{Cursor, GridShape};
use serde::Serialize;
use std::fmt;

/// Abstract input delivered to the state machine once per step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InputEvent {
    Quit,
    ToggleAutoplay,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// The autoplay delay elapsed with no input
    Timeout,
    /// Input that carries no navigation meaning (unmapped key, resize)
    None,
}

impl InputEvent {
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            InputEvent::MoveLeft
                | InputEvent::MoveRight
                | InputEvent::MoveUp
                | InputEvent::MoveDown
        )
    }
}

/// Outcome of feeding one event into the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(NavigationState),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    Autoplay,
    Manual,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::Autoplay => write!(f, "autoplay"),
            PlaybackMode::Manual => write!(f, "manual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    shape: GridShape,
    cursor: Cursor,
    autoplay: bool,
}

impl NavigationState {
    /// Start at the top-left cell
    pub fn new(shape: GridShape, autoplay: bool) -> Self {
        Self {
            shape,
            cursor: shape.origin(),
            autoplay,
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn mode(&self) -> PlaybackMode {
        if self.autoplay {
            PlaybackMode::Autoplay
        } else {
            PlaybackMode::Manual
        }
    }

    /// Pure transition: `(state, event) -> state`
    pub fn step(self, event: InputEvent) -> Step {
        let shape = self.shape;
        let next = match event {
            InputEvent::Quit => return Step::Quit,
            InputEvent::ToggleAutoplay => Self {
                autoplay: !self.autoplay,
                ..self
            },
            InputEvent::MoveLeft => self.with_cursor(self.cursor.left(shape)),
            InputEvent::MoveRight => self.with_cursor(self.cursor.right(shape)),
            InputEvent::MoveUp => self.with_cursor(self.cursor.up(shape)),
            InputEvent::MoveDown => self.with_cursor(self.cursor.down(shape)),
            InputEvent::Timeout if self.autoplay => {
                self.with_cursor(self.cursor.raster_next(shape))
            }
            InputEvent::Timeout | InputEvent::None => self,
        };
        Step::Continue(next)
    }

    /// In-place variant of [`step`](Self::step). Returns `false` once the
    /// session should end; the state is left untouched in that case.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match self.step(event) {
            Step::Continue(next) => {
                *self = next;
                true
            }
            Step::Quit => false,
        }
    }

    fn with_cursor(self, cursor: Cursor) -> Self {
        Self { cursor, ..self }
    }
}
