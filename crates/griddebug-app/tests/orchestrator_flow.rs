//! Integration tests for the analysis request lifecycle
//!
//! Drives the real update loop (process_message + spawned backend calls)
//! against a scripted backend, pumping outcome messages back through the
//! channel exactly as the event loop does.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use griddebug_app::config::Settings;
use griddebug_app::process::process_message;
use griddebug_app::state::CatalogState;
use griddebug_app::{AnalysisFailure, AppState, Message};
use griddebug_client::{ScriptedBackend, StaticBackend};
use griddebug_core::{Error, RawDiagnosticResult};

struct Harness {
    state: AppState,
    backend: Arc<ScriptedBackend>,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
}

impl Harness {
    fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(32);
        let mut state = AppState::new(Settings::default(), "offline");
        state.catalog = CatalogState::Ready(StaticBackend::builtin_cases());
        Self {
            state,
            backend: Arc::new(ScriptedBackend::with_default_cases()),
            msg_tx,
            msg_rx,
        }
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &self.msg_tx, &self.backend);
    }

    fn select(&mut self, id: &str) {
        self.send(Message::Select {
            test_case_id: id.to_string(),
        });
    }

    /// Drain every message the background tasks produce within a short
    /// window, feeding each back through the update loop.
    async fn pump(&mut self) {
        loop {
            match tokio::time::timeout(Duration::from_millis(100), self.msg_rx.recv()).await {
                Ok(Some(message)) => self.send(message),
                _ => break,
            }
        }
    }
}

fn valid_raw(cause: &str) -> RawDiagnosticResult {
    RawDiagnosticResult {
        root_causes: vec![cause.to_string()],
        analysis_status: Some("success".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_select_analyze_and_render_flow() {
    let mut h = Harness::new();
    h.backend.push_ok(valid_raw("undervoltage at bus 30"));

    h.select("case30_test1");
    assert!(h.state.request_view().is_loading);

    h.pump().await;

    let view = h.state.request_view();
    assert!(!view.is_loading);
    let result = view.result.expect("settled result");
    assert_eq!(result.root_causes, vec!["undervoltage at bus 30"]);
    assert_eq!(h.backend.calls(), vec![(
        "case30_test1".to_string(),
        Default::default(),
    )]);
}

#[tokio::test]
async fn test_superseded_response_never_reaches_the_view() {
    let mut h = Harness::new();
    h.backend.push_ok(valid_raw("stale cause"));
    h.backend.push_ok(valid_raw("fresh cause"));

    h.select("case14_test1");
    h.select("case14_test2");

    h.pump().await;

    let view = h.state.request_view();
    assert_eq!(view.test_case_id, Some("case14_test2"));
    let result = view.result.expect("live request settled");
    assert_eq!(result.root_causes, vec!["fresh cause"]);
    assert_eq!(h.backend.call_count(), 2);
}

#[tokio::test]
async fn test_service_rejection_settles_as_failure() {
    let mut h = Harness::new();
    h.backend.push_err(Error::service("connection refused"));

    h.select("case14_test1");
    h.pump().await;

    let view = h.state.request_view();
    assert!(!view.is_loading);
    assert!(view.result.is_none());
    match view.error {
        Some(AnalysisFailure::Service { detail }) => {
            assert!(detail.contains("connection refused"));
        }
        other => panic!("expected service failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_contract_violation_fails_closed() {
    let mut h = Harness::new();
    // Parses fine as a raw payload, fails structural validation.
    h.backend.push_ok(RawDiagnosticResult {
        root_causes: vec!["cause".to_string()],
        analysis_status: Some("bogus_status".to_string()),
        ..Default::default()
    });

    h.select("case14_test1");
    h.pump().await;

    let view = h.state.request_view();
    assert!(view.result.is_none());
    assert!(matches!(
        view.error,
        Some(AnalysisFailure::SchemaViolation { .. })
    ));
}

#[tokio::test]
async fn test_recovery_after_failure() {
    let mut h = Harness::new();
    h.backend.push_err(Error::service("first attempt failed"));
    h.backend.push_ok(valid_raw("second attempt"));

    h.select("case57_test1");
    h.pump().await;
    assert!(h.state.request_view().error.is_some());

    h.select("case57_test1");
    h.pump().await;

    let view = h.state.request_view();
    assert!(view.error.is_none());
    assert_eq!(
        view.result.expect("retry settled").root_causes,
        vec!["second attempt"]
    );
}

#[tokio::test]
async fn test_invalid_selection_makes_no_backend_call() {
    let mut h = Harness::new();

    h.select("not_in_catalog");
    h.pump().await;

    assert_eq!(h.backend.call_count(), 0);
    let view = h.state.request_view();
    assert!(!view.is_loading);
    assert!(view.result.is_none());
}
