//! Screen layout definitions for the TUI
//!
//! Header on top, selector and report side by side, status bar at the
//! bottom. The selector column is capped so wide terminals give the extra
//! room to the report.

use ratatui::layout::{Constraint, Layout, Rect};

/// Selector column width including borders.
const SELECTOR_WIDTH: u16 = 42;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + backend + keybindings)
    pub header: Rect,

    /// Test-case selector column
    pub cases: Rect,

    /// Diagnostic report panel
    pub report: Rect,

    /// Status bar (notice / pipeline / catalog count)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(5),    // Main content
        Constraint::Length(3), // Status bar (glass container)
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Max(SELECTOR_WIDTH), // Selector
        Constraint::Min(20),             // Report
    ])
    .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        cases: columns[0],
        report: columns[1],
        status: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fill_the_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 3);
        assert_eq!(
            layout.header.height + layout.cases.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_selector_width_is_capped() {
        let area = Rect::new(0, 0, 200, 40);
        let layout = create(area);

        assert_eq!(layout.cases.width, SELECTOR_WIDTH);
        assert_eq!(layout.report.width, 200 - SELECTOR_WIDTH);
        assert_eq!(layout.report.x, layout.cases.width);
    }

    #[test]
    fn test_narrow_terminal_still_has_a_report() {
        let area = Rect::new(0, 0, 50, 24);
        let layout = create(area);

        assert!(layout.report.width >= 20);
        assert_eq!(layout.cases.width + layout.report.width, area.width);
    }

    #[test]
    fn test_content_rows_are_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.cases.y, layout.header.height);
        assert_eq!(layout.status.y, layout.cases.y + layout.cases.height);
    }
}
