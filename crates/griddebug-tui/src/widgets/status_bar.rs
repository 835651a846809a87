//! Status bar widget
//!
//! Shows the transient notice when one is set, otherwise the catalog count
//! and the live request status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use griddebug_app::{AppState, CatalogState};

use crate::theme::{icons::IconSet, palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn request_indicator(&self) -> Span<'static> {
        let view = self.state.request_view();
        if view.is_loading {
            Span::styled(
                format!("{} analyzing", self.icons.spinner(self.state.spinner_frame)),
                styles::status_yellow(),
            )
        } else if view.error.is_some() {
            Span::styled(format!("{} failed", self.icons.cross()), styles::status_red())
        } else if view.result.is_some() {
            Span::styled(format!("{} settled", self.icons.check()), styles::status_green())
        } else {
            Span::styled(format!("{} idle", self.icons.circle()), styles::text_muted())
        }
    }

    fn catalog_summary(&self) -> Span<'static> {
        let text = match &self.state.catalog {
            CatalogState::Loading => "catalog: loading".to_string(),
            CatalogState::Failed(_) => "catalog: unavailable".to_string(),
            CatalogState::Ready(cases) => format!("catalog: {} cases", cases.len()),
        };
        Span::styled(text, styles::text_muted())
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if let Some(notice) = &self.state.notice {
            let style = if notice.is_error {
                styles::status_red()
            } else {
                styles::text_secondary()
            };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(notice.text.clone(), style),
            ])
        } else {
            Line::from(vec![
                Span::raw(" "),
                self.request_indicator(),
                Span::styled("  |  ", styles::text_muted()),
                self.catalog_summary(),
                Span::styled(
                    format!("  |  pipeline: {}", self.state.pipeline.label()),
                    styles::text_muted(),
                ),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
