//! Application state (Model in TEA pattern)

use griddebug_core::{Pipeline, TestCase};

use crate::config::Settings;
use crate::orchestrator::{AnalysisOrchestrator, RequestView};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Lifecycle of the test-case catalog listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    /// Listing request in flight (startup or after reload).
    #[default]
    Loading,
    /// Listing arrived; stable for the rest of the session unless reloaded.
    Ready(Vec<TestCase>),
    /// Listing failed; the UI offers a retry.
    Failed(String),
}

impl CatalogState {
    /// The listed cases (empty while loading or failed).
    pub fn cases(&self) -> &[TestCase] {
        match self {
            CatalogState::Ready(cases) => cases,
            _ => &[],
        }
    }
}

/// A transient status-bar notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// The single authoritative application state.
///
/// Mutated only by the TEA update loop; the presentation layer reads it
/// through pure projections.
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Where analysis requests go, for the header ("offline" or a URL).
    pub backend_label: String,

    /// Catalog listing state.
    pub catalog: CatalogState,
    /// Index of the highlighted case within the catalog listing.
    pub selected_index: usize,
    /// Pipeline applied to the next analysis request.
    pub pipeline: Pipeline,

    /// The core request-lifecycle state machine.
    pub orchestrator: AnalysisOrchestrator,

    /// Transient status-bar notice (invalid selection, catalog failures).
    pub notice: Option<Notice>,

    /// Spinner animation frame, advanced on ticks while loading.
    pub spinner_frame: u8,
}

impl AppState {
    pub fn new(settings: Settings, backend_label: impl Into<String>) -> Self {
        let pipeline = settings.backend.pipeline;
        Self {
            phase: AppPhase::Running,
            settings,
            backend_label: backend_label.into(),
            catalog: CatalogState::Loading,
            selected_index: 0,
            pipeline,
            orchestrator: AnalysisOrchestrator::new(),
            notice: None,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// The case currently highlighted in the selector, if any.
    pub fn selected_case(&self) -> Option<&TestCase> {
        self.catalog.cases().get(self.selected_index)
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.catalog.cases().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.catalog.cases().len().saturating_sub(1);
    }

    /// Clamp the highlight after the catalog changes.
    pub fn clamp_selection(&mut self) {
        let len = self.catalog.cases().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Advance the spinner animation one frame.
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Projection of the live analysis request for rendering.
    pub fn request_view(&self) -> RequestView<'_> {
        self.orchestrator.current_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griddebug_core::{BusSystem, FailureType};

    fn case(id: &str) -> TestCase {
        TestCase {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            bus_system: BusSystem::Ieee14,
            failure_type: FailureType::NonConvergence,
        }
    }

    fn state_with_cases(n: usize) -> AppState {
        let mut state = AppState::new(Settings::default(), "offline");
        let cases = (0..n).map(|i| case(&format!("case_{i}"))).collect();
        state.catalog = CatalogState::Ready(cases);
        state
    }

    #[test]
    fn test_selection_navigation_clamps() {
        let mut state = state_with_cases(3);
        state.select_prev();
        assert_eq!(state.selected_index, 0);

        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index, 2);
        state.select_next();
        assert_eq!(state.selected_index, 2);

        state.select_first();
        assert_eq!(state.selected_index, 0);
        state.select_last();
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_selection_on_empty_catalog() {
        let mut state = state_with_cases(0);
        state.select_next();
        state.select_last();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_case().is_none());
    }

    #[test]
    fn test_clamp_after_catalog_shrinks() {
        let mut state = state_with_cases(5);
        state.selected_index = 4;
        state.catalog = CatalogState::Ready(vec![case("only")]);
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_case().unwrap().id, "only");
    }

    #[test]
    fn test_quit_phase() {
        let mut state = state_with_cases(1);
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_pipeline_comes_from_settings() {
        let mut settings = Settings::default();
        settings.backend.pipeline = Pipeline::Agentic;
        let state = AppState::new(settings, "offline");
        assert_eq!(state.pipeline, Pipeline::Agentic);
    }
}
