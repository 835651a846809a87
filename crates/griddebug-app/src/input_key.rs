//! Backend-agnostic key representation
//!
//! Keeps the update loop free of crossterm types so handlers can be tested
//! without a terminal.

/// A pressed key, normalized from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}
