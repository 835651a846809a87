//! Header bar widget
//!
//! Shows the app title, the backend in use, and the keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use griddebug_core::Pipeline;

use crate::theme::{icons::IconSet, palette, styles};

pub struct MainHeader<'a> {
    backend_label: &'a str,
    pipeline: Pipeline,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(backend_label: &'a str, pipeline: Pipeline, icons: IconSet) -> Self {
        Self {
            backend_label,
            pipeline,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.bolt()), styles::accent()),
            Span::styled("GridDebug", styles::accent_bold()),
            Span::styled("  ", styles::text_muted()),
            Span::styled(self.backend_label, styles::text_secondary()),
            Span::styled(
                format!("  [{}]", self.pipeline.label()),
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(line).render(inner, buf);

        // Right-aligned keybinding hints when there is room
        let hints = "j/k select  Enter run  p pipeline  r reload  q quit ";
        if (inner.width as usize) > hints.len() + 30 {
            let hint_area = Rect {
                x: inner.x + inner.width - hints.len() as u16,
                y: inner.y,
                width: hints.len() as u16,
                height: 1,
            };
            Paragraph::new(Span::styled(hints, styles::text_muted())).render(hint_area, buf);
        }
    }
}
