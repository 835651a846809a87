//! Test-case selector widget
//!
//! Renders the catalog as a navigable list. Each entry shows the case name
//! with the network and failure-type badge underneath; the highlighted row
//! is the target of the next Enter press.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use griddebug_app::CatalogState;

use crate::theme::{icons::IconSet, palette, styles};

pub struct CaseList<'a> {
    catalog: &'a CatalogState,
    selected: usize,
    spinner_frame: u8,
    icons: IconSet,
}

impl<'a> CaseList<'a> {
    pub fn new(catalog: &'a CatalogState, selected: usize, icons: IconSet) -> Self {
        Self {
            catalog,
            selected,
            spinner_frame: 0,
            icons,
        }
    }

    pub fn spinner_frame(mut self, frame: u8) -> Self {
        self.spinner_frame = frame;
        self
    }
}

impl Widget for CaseList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Test Cases ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.catalog {
            CatalogState::Loading => {
                let line = Line::from(vec![
                    Span::styled(self.icons.spinner(self.spinner_frame), styles::status_yellow()),
                    Span::styled(" Loading catalog...", styles::text_muted()),
                ]);
                Paragraph::new(line).render(inner, buf);
            }

            CatalogState::Failed(error) => {
                let lines = vec![
                    Line::from(Span::styled(
                        format!("{} Catalog unavailable", self.icons.alert()),
                        styles::status_red(),
                    )),
                    Line::from(Span::styled(error.as_str(), styles::text_muted())),
                    Line::default(),
                    Line::from(Span::styled("Press r to retry", styles::text_secondary())),
                ];
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }

            CatalogState::Ready(cases) if cases.is_empty() => {
                Paragraph::new(Span::styled("No test cases listed", styles::text_muted()))
                    .render(inner, buf);
            }

            CatalogState::Ready(cases) => {
                let items: Vec<ListItem> = cases
                    .iter()
                    .map(|case| {
                        let (badge, badge_style) = styles::failure_badge(case.failure_type);
                        ListItem::new(vec![
                            Line::from(Span::styled(
                                case.name.clone(),
                                styles::text_primary(),
                            )),
                            Line::from(vec![
                                Span::styled(
                                    format!("  {}", case.bus_system.label()),
                                    styles::text_muted(),
                                ),
                                Span::styled(format!("  {badge}"), badge_style),
                            ]),
                        ])
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(styles::focused_selected())
                    .highlight_symbol(self.icons.chevron_right());

                let mut state = ListState::default().with_selected(Some(self.selected));
                StatefulWidget::render(list, inner, buf, &mut state);
            }
        }
    }
}
