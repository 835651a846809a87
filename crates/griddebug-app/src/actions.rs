//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use griddebug_client::{AnalysisService, TestCaseCatalog};
use griddebug_core::Error;

use crate::message::Message;
use crate::orchestrator::AnalysisFailure;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Outcomes come back as messages on `msg_tx`; nothing here touches
/// `AppState` directly.
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<S>)
where
    S: AnalysisService + TestCaseCatalog + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchCatalog => {
            tokio::spawn(async move {
                fetch_catalog(backend, msg_tx).await;
            });
        }

        UpdateAction::SpawnAnalysis {
            test_case_id,
            pipeline,
        } => {
            tokio::spawn(async move {
                debug!("dispatching analysis: {} ({})", test_case_id, pipeline.label());
                let message = match backend.analyze(&test_case_id, pipeline).await {
                    Ok(raw) => Message::AnalysisResolved { test_case_id, raw },
                    Err(e) => {
                        error!("analysis call failed for {}: {}", test_case_id, e);
                        Message::AnalysisFailed {
                            test_case_id,
                            error: failure_from_error(e),
                        }
                    }
                };
                let _ = msg_tx.send(message).await;
            });
        }
    }
}

async fn fetch_catalog<S>(backend: Arc<S>, msg_tx: mpsc::Sender<Message>)
where
    S: TestCaseCatalog + Send + Sync,
{
    let message = match backend.list_test_cases().await {
        Ok(cases) => Message::CatalogLoaded { cases },
        Err(e) => {
            error!("catalog fetch failed: {}", e);
            Message::CatalogLoadFailed {
                error: e.to_string(),
            }
        }
    };
    let _ = msg_tx.send(message).await;
}

/// Map a transport-layer error onto the two failure categories the
/// report view distinguishes.
fn failure_from_error(error: Error) -> AnalysisFailure {
    match error {
        Error::SchemaViolation(violation) => AnalysisFailure::schema(&violation),
        other => AnalysisFailure::service(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griddebug_client::ScriptedBackend;
    use griddebug_core::{ContractViolation, RawDiagnosticResult};

    #[tokio::test]
    async fn test_fetch_catalog_sends_loaded_message() {
        let backend = Arc::new(ScriptedBackend::with_default_cases());
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::FetchCatalog, tx, backend);

        match rx.recv().await {
            Some(Message::CatalogLoaded { cases }) => assert!(!cases.is_empty()),
            other => panic!("expected CatalogLoaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_analysis_resolves() {
        let backend = ScriptedBackend::with_default_cases();
        backend.push_ok(RawDiagnosticResult {
            root_causes: vec!["cause".to_string()],
            analysis_status: Some("success".to_string()),
            ..Default::default()
        });
        let backend = Arc::new(backend);
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SpawnAnalysis {
                test_case_id: "case14_test1".to_string(),
                pipeline: Default::default(),
            },
            tx,
            backend.clone(),
        );

        match rx.recv().await {
            Some(Message::AnalysisResolved { test_case_id, .. }) => {
                assert_eq!(test_case_id, "case14_test1");
            }
            other => panic!("expected AnalysisResolved, got {other:?}"),
        }
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_spawn_analysis_maps_failures() {
        let backend = ScriptedBackend::with_default_cases();
        backend.push_err(Error::service("backend returned 500"));
        let backend = Arc::new(backend);
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SpawnAnalysis {
                test_case_id: "case14_test1".to_string(),
                pipeline: Default::default(),
            },
            tx,
            backend,
        );

        match rx.recv().await {
            Some(Message::AnalysisFailed { error, .. }) => {
                assert!(matches!(error, AnalysisFailure::Service { .. }));
            }
            other => panic!("expected AnalysisFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_schema_errors_keep_their_category() {
        let err = Error::SchemaViolation(ContractViolation::MissingField {
            field: "analysisStatus",
        });
        assert!(matches!(
            failure_from_error(err),
            AnalysisFailure::SchemaViolation { .. }
        ));

        assert!(matches!(
            failure_from_error(Error::service("timeout")),
            AnalysisFailure::Service { .. }
        ));
    }
}
