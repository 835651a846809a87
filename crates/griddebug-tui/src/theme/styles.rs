//! Semantic style builders for the TUI theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use griddebug_core::{ActionPriority, FailureType};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the selected catalog entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Domain badge mapping ---

/// Badge `(label, Style)` for a failure type.
pub fn failure_badge(failure_type: FailureType) -> (&'static str, Style) {
    match failure_type {
        FailureType::NonConvergence => (
            "non-convergence",
            Style::default().fg(palette::FAILURE_NON_CONVERGENCE),
        ),
        FailureType::VoltageViolation => (
            "voltage",
            Style::default().fg(palette::FAILURE_VOLTAGE),
        ),
        FailureType::LineOverload => (
            "overload",
            Style::default().fg(palette::FAILURE_OVERLOAD),
        ),
    }
}

/// Style for a corrective-action priority marker.
pub fn priority_style(priority: ActionPriority) -> Style {
    let color = match priority {
        ActionPriority::High => palette::PRIORITY_HIGH,
        ActionPriority::Medium => palette::PRIORITY_MEDIUM,
        ActionPriority::Low => palette::PRIORITY_LOW,
    };
    let style = Style::default().fg(color);
    if priority == ActionPriority::High {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_uses_contrast_on_accent() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_failure_badges_cover_every_type() {
        for failure_type in [
            FailureType::NonConvergence,
            FailureType::VoltageViolation,
            FailureType::LineOverload,
        ] {
            let (label, style) = failure_badge(failure_type);
            assert!(!label.is_empty());
            assert!(style.fg.is_some());
        }
    }

    #[test]
    fn test_high_priority_is_bold() {
        assert!(priority_style(ActionPriority::High)
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(!priority_style(ActionPriority::Low)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
