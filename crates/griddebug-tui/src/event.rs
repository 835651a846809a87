//! Terminal event polling
//!
//! Normalizes crossterm key events into the backend-agnostic `InputKey` the
//! handler layer consumes, so key bindings stay testable without a terminal.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use griddebug_app::{InputKey, Message};
use griddebug_core::prelude::*;

/// Poll for terminal events with a 50ms timeout (20 FPS). A timeout yields
/// a tick message so spinner animation keeps running.
pub fn poll() -> Result<Option<Message>> {
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(convert_key(key.code, key.modifiers).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}

fn convert_key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
    match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}
