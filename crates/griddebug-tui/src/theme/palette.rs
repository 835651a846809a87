//! Color palette for the TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Settled/success
pub const STATUS_RED: Color = Color::Red; // Failed/error
pub const STATUS_YELLOW: Color = Color::Yellow; // Loading/degraded

// --- Failure type badges ---
pub const FAILURE_NON_CONVERGENCE: Color = Color::Magenta;
pub const FAILURE_VOLTAGE: Color = Color::Yellow;
pub const FAILURE_OVERLOAD: Color = Color::Red;

// --- Action priorities ---
pub const PRIORITY_HIGH: Color = Color::Red;
pub const PRIORITY_MEDIUM: Color = Color::Yellow;
pub const PRIORITY_LOW: Color = Color::DarkGray;
