//! Main update function - handles state transitions (TEA pattern)

use griddebug_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, CatalogState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.request_view().is_loading || state.catalog == CatalogState::Loading {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::CatalogLoaded { cases } => {
            info!("catalog loaded: {} test cases", cases.len());
            if cases.is_empty() {
                state.set_notice("Catalog is empty", true);
            }
            state.catalog = CatalogState::Ready(cases);
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::CatalogLoadFailed { error } => {
            warn!("catalog load failed: {}", error);
            state.catalog = CatalogState::Failed(error.clone());
            state.set_notice(format!("Catalog unavailable: {error} (r to retry)"), true);
            UpdateResult::none()
        }

        Message::ReloadCatalog => {
            state.catalog = CatalogState::Loading;
            state.orchestrator.clear();
            state.clear_notice();
            UpdateResult::action(UpdateAction::FetchCatalog)
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPrev => {
            state.select_prev();
            UpdateResult::none()
        }
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }

        Message::TogglePipeline => {
            state.pipeline = state.pipeline.toggled();
            state.set_notice(format!("Pipeline: {}", state.pipeline.label()), false);
            UpdateResult::none()
        }

        Message::RunAnalysis => match state.selected_case() {
            Some(case) => UpdateResult::message(Message::Select {
                test_case_id: case.id.clone(),
            }),
            None => {
                state.set_notice("No test case selected", true);
                UpdateResult::none()
            }
        },

        Message::Select { test_case_id } => {
            match state
                .orchestrator
                .select(state.catalog.cases(), &test_case_id)
            {
                Ok(()) => {
                    state.clear_notice();
                    UpdateResult::action(UpdateAction::SpawnAnalysis {
                        test_case_id,
                        pipeline: state.pipeline,
                    })
                }
                Err(e) => {
                    // Reported immediately; the live request is untouched
                    // and no service call is made.
                    warn!("{}", e);
                    state.set_notice(e.to_string(), true);
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Outcome Messages
        // ─────────────────────────────────────────────────────────
        Message::AnalysisResolved { test_case_id, raw } => {
            if state.orchestrator.on_service_resolved(&test_case_id, raw) {
                info!("analysis settled for {}", test_case_id);
            }
            UpdateResult::none()
        }

        Message::AnalysisFailed {
            test_case_id,
            error,
        } => {
            if state.orchestrator.on_service_rejected(&test_case_id, error) {
                warn!("analysis failed for {}", test_case_id);
            }
            UpdateResult::none()
        }
    }
}
