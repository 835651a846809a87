//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use griddebug_app::AppState;

use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure projection of `AppState`; never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let header = widgets::MainHeader::new(&state.backend_label, state.pipeline, icons);
    frame.render_widget(header, areas.header);

    let cases = widgets::CaseList::new(&state.catalog, state.selected_index, icons)
        .spinner_frame(state.spinner_frame);
    frame.render_widget(cases, areas.cases);

    let view = state.request_view();
    // Show the display name of the case under analysis when the catalog
    // still lists it.
    let case_name = view.test_case_id.and_then(|id| {
        state
            .catalog
            .cases()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    });
    let report = widgets::ReportView::new(view, icons)
        .case_name(case_name)
        .spinner_frame(state.spinner_frame);
    frame.render_widget(report, areas.report);

    frame.render_widget(widgets::StatusBar::new(state, icons), areas.status);
}
