//! Diagnostic report panel
//!
//! Renders the live analysis request: a placeholder when idle, a spinner
//! while loading, the structured report when settled, and the failure
//! category + detail when the request failed. Root causes, components and
//! actions are shown in service order.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use griddebug_app::{AnalysisFailure, RequestView};
use griddebug_core::{AnalysisStatus, DiagnosticResult};

use crate::theme::{icons::IconSet, palette, styles};

pub struct ReportView<'a> {
    view: RequestView<'a>,
    /// Display name for the case under analysis, when known.
    case_name: Option<&'a str>,
    spinner_frame: u8,
    icons: IconSet,
}

impl<'a> ReportView<'a> {
    pub fn new(view: RequestView<'a>, icons: IconSet) -> Self {
        Self {
            view,
            case_name: None,
            spinner_frame: 0,
            icons,
        }
    }

    pub fn case_name(mut self, name: Option<&'a str>) -> Self {
        self.case_name = name;
        self
    }

    pub fn spinner_frame(mut self, frame: u8) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn subject(&self) -> &str {
        self.case_name
            .or(self.view.test_case_id)
            .unwrap_or("analysis")
    }

    fn loading_lines(&self) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::styled(
                self.icons.spinner(self.spinner_frame).to_string(),
                styles::status_yellow(),
            ),
            Span::styled(format!(" Analyzing {}...", self.subject()), styles::text_secondary()),
        ])]
    }

    fn failure_lines(&self, failure: &AnalysisFailure) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                format!("{} {}", self.icons.cross(), failure.label()),
                styles::status_red(),
            )),
            Line::default(),
            Line::from(Span::styled(
                failure.detail().to_string(),
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to retry".to_string(),
                styles::text_muted(),
            )),
        ]
    }

    fn result_lines(&self, result: &DiagnosticResult) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Status banner; degraded outcomes are valid reports and flagged
        // rather than hidden.
        let banner = match result.analysis_status {
            AnalysisStatus::Success => Span::styled(
                format!("{} Analysis complete", self.icons.check()),
                styles::status_green(),
            ),
            status => Span::styled(
                format!("{} Analysis {}", self.icons.alert(), status.label()),
                styles::status_yellow(),
            ),
        };
        lines.push(Line::from(vec![
            banner,
            Span::styled(format!("  {}", self.subject()), styles::text_muted()),
        ]));
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Root causes".to_string(),
            styles::accent_bold(),
        )));
        if result.root_causes.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none reported)".to_string(),
                styles::text_muted(),
            )));
        }
        for cause in &result.root_causes {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", self.icons.chevron_right()), styles::accent()),
                Span::styled(cause.clone(), styles::text_primary()),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Affected components".to_string(),
            styles::accent_bold(),
        )));
        if result.affected_components.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none reported)".to_string(),
                styles::text_muted(),
            )));
        }
        for component in &result.affected_components {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", self.icons.dot()), styles::text_muted()),
                Span::styled(component.name.clone(), styles::text_primary()),
                Span::styled(
                    format!("  {}  {:.2}", component.kind.label(), component.value),
                    styles::text_secondary(),
                ),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Corrective actions".to_string(),
            styles::accent_bold(),
        )));
        if result.corrective_actions.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none recommended)".to_string(),
                styles::text_muted(),
            )));
        }
        for (index, action) in result.corrective_actions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", index + 1), styles::text_muted()),
                Span::styled(
                    format!("[{}] ", action.priority.label()),
                    styles::priority_style(action.priority),
                ),
                Span::styled(action.description.clone(), styles::text_primary()),
                Span::styled(
                    format!("  ({})", action.category.label()),
                    styles::text_muted(),
                ),
            ]));
        }

        lines
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Diagnostic Report ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = if self.view.is_loading {
            self.loading_lines()
        } else if let Some(failure) = self.view.error {
            self.failure_lines(failure)
        } else if let Some(result) = self.view.result {
            self.result_lines(result)
        } else {
            vec![Line::from(Span::styled(
                "Select a test case and press Enter to run a diagnosis".to_string(),
                styles::text_muted(),
            ))]
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griddebug_core::{
        ActionCategory, ActionPriority, ComponentDetail, ComponentKind, CorrectiveAction,
    };

    fn sample_result(status: AnalysisStatus) -> DiagnosticResult {
        DiagnosticResult {
            root_causes: vec!["Reactive power deficit".to_string()],
            affected_components: vec![ComponentDetail {
                id: "bus_26".to_string(),
                name: "Bus 26".to_string(),
                kind: ComponentKind::Bus,
                value: 0.91,
            }],
            corrective_actions: vec![CorrectiveAction {
                id: "act_1".to_string(),
                description: "Raise voltage setpoints".to_string(),
                priority: ActionPriority::High,
                category: ActionCategory::GenerationAdjustment,
            }],
            analysis_status: status,
        }
    }

    fn render(view: RequestView<'_>) -> String {
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        ReportView::new(view, IconSet::new(false)).render(area, &mut buf);
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_idle_placeholder() {
        let view = RequestView {
            is_loading: false,
            result: None,
            error: None,
            test_case_id: None,
        };
        let text = render(view);
        assert!(text.contains("Select a test case"));
    }

    #[test]
    fn test_loading_shows_case_id() {
        let view = RequestView {
            is_loading: true,
            result: None,
            error: None,
            test_case_id: Some("case30_test1"),
        };
        let text = render(view);
        assert!(text.contains("Analyzing case30_test1"));
    }

    #[test]
    fn test_settled_report_sections() {
        let result = sample_result(AnalysisStatus::Success);
        let view = RequestView {
            is_loading: false,
            result: Some(&result),
            error: None,
            test_case_id: Some("case30_test1"),
        };
        let text = render(view);
        assert!(text.contains("Analysis complete"));
        assert!(text.contains("Reactive power deficit"));
        assert!(text.contains("Bus 26"));
        assert!(text.contains("0.91"));
        assert!(text.contains("[high] Raise voltage setpoints"));
        assert!(text.contains("Generation adjustment"));
    }

    #[test]
    fn test_degraded_status_is_flagged() {
        let result = sample_result(AnalysisStatus::Partial);
        let view = RequestView {
            is_loading: false,
            result: Some(&result),
            error: None,
            test_case_id: Some("case30_test1"),
        };
        let text = render(view);
        assert!(text.contains("Analysis partial"));
    }

    #[test]
    fn test_failure_shows_category_and_detail() {
        let failure = AnalysisFailure::service("HTTP 500 from backend");
        let view = RequestView {
            is_loading: false,
            result: None,
            error: Some(&failure),
            test_case_id: Some("case14_test1"),
        };
        let text = render(view);
        assert!(text.contains("Service error"));
        assert!(text.contains("HTTP 500 from backend"));
        assert!(text.contains("Press Enter to retry"));
    }
}
