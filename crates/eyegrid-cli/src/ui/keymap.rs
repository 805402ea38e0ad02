//! Terminal key bindings for the navigation events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use eyegrid_core::InputEvent;

/// Map any terminal event. Releases, resizes, mouse and focus events carry
/// no navigation meaning.
pub fn map_event(event: &Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        _ => InputEvent::None,
    }
}

pub fn map_key(key: &KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
        KeyCode::Char(' ') => InputEvent::ToggleAutoplay,
        KeyCode::Left | KeyCode::Char('a') => InputEvent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') => InputEvent::MoveRight,
        KeyCode::Up | KeyCode::Char('w') => InputEvent::MoveUp,
        KeyCode::Down | KeyCode::Char('s') => InputEvent::MoveDown,
        _ => InputEvent::None,
    }
}
