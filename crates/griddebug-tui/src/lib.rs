//! griddebug-tui - Terminal UI for GridDebug
//!
//! This crate provides the ratatui-based terminal interface: the event loop
//! driving the TEA update cycle from griddebug-app, terminal event polling,
//! and the selector/report widget set.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
