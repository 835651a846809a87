//! Request-lifecycle orchestration for analysis calls
//!
//! Single authority for "what analysis is currently relevant" and "what is
//! its status". Exactly one [`RequestState`] is live at any time; a new
//! selection always supersedes the previous one regardless of its
//! settlement status. Staleness is enforced purely by matching the test
//! case id of an arriving outcome against the live request -- no
//! cancellation primitive is needed, a superseded in-flight call simply
//! runs to completion and its outcome is discarded.

use griddebug_core::contract::{self, ContractViolation};
use griddebug_core::prelude::*;
use griddebug_core::{DiagnosticResult, RawDiagnosticResult, TestCase};

/// Why an analysis request failed to complete.
///
/// Kept separate from [`griddebug_core::Error`] so it can live inside the
/// observable state (cloned into views, compared in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// The service returned structurally invalid data.
    SchemaViolation { detail: String },
    /// Transport failure or service-side rejection.
    Service { detail: String },
}

impl AnalysisFailure {
    pub fn schema(violation: &ContractViolation) -> Self {
        Self::SchemaViolation {
            detail: violation.to_string(),
        }
    }

    pub fn service(detail: impl Into<String>) -> Self {
        Self::Service {
            detail: detail.into(),
        }
    }

    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisFailure::SchemaViolation { .. } => "Schema violation",
            AnalysisFailure::Service { .. } => "Service error",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AnalysisFailure::SchemaViolation { detail } => detail,
            AnalysisFailure::Service { detail } => detail,
        }
    }
}

/// Lifecycle of the one live analysis request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// No analysis selected yet.
    #[default]
    Idle,
    /// A selection was made; the service call is in flight.
    Loading { test_case_id: String },
    /// The service resolved and the payload passed validation.
    Settled {
        test_case_id: String,
        result: DiagnosticResult,
    },
    /// The service rejected, or its payload failed validation.
    Failed {
        test_case_id: String,
        error: AnalysisFailure,
    },
}

impl RequestState {
    /// The test case id this request belongs to, if any.
    pub fn test_case_id(&self) -> Option<&str> {
        match self {
            RequestState::Idle => None,
            RequestState::Loading { test_case_id }
            | RequestState::Settled { test_case_id, .. }
            | RequestState::Failed { test_case_id, .. } => Some(test_case_id),
        }
    }
}

/// Pure projection of [`RequestState`] for the presentation layer.
///
/// Always exactly one of four mutually exclusive shapes: idle (all fields
/// empty), loading, settled (result set), failed (error set). `is_loading`
/// and a non-`None` result are never observed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestView<'a> {
    pub is_loading: bool,
    pub result: Option<&'a DiagnosticResult>,
    pub error: Option<&'a AnalysisFailure>,
    /// Which test case the view refers to (`None` only when idle).
    pub test_case_id: Option<&'a str>,
}

/// The core request-lifecycle state machine.
///
/// Mutated only by discrete events on the single event-processing sequence
/// (the TEA update loop); no locking is required.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOrchestrator {
    request: RequestState,
}

impl AnalysisOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Id of the live request, if one exists.
    pub fn live_id(&self) -> Option<&str> {
        self.request.test_case_id()
    }

    /// Begin a new analysis request for `test_case_id`.
    ///
    /// The id must be present in the catalog's current listing; otherwise
    /// this fails with [`Error::InvalidSelection`] and the live request is
    /// left untouched (no service call is made). On success the state
    /// transitions synchronously to `Loading`, superseding whatever was
    /// live before -- including an unsettled `Loading` for the same id:
    /// re-selection is a fresh request, never a no-op.
    ///
    /// The caller is responsible for issuing the actual service call after
    /// a successful return.
    pub fn select(&mut self, catalog: &[TestCase], test_case_id: &str) -> Result<()> {
        if !catalog.iter().any(|c| c.id == test_case_id) {
            return Err(Error::invalid_selection(test_case_id));
        }

        debug!("analysis selected: {}", test_case_id);
        self.request = RequestState::Loading {
            test_case_id: test_case_id.to_string(),
        };
        Ok(())
    }

    /// Deliver a service resolution.
    ///
    /// If `test_case_id` does not match the live request the resolution is
    /// stale and discarded with no observable effect (returns `false`).
    /// Otherwise the raw payload is validated against the data contract:
    /// `Settled` on success, `Failed(SchemaViolation)` on any structural
    /// violation. A payload with a degraded `analysisStatus` is a normal
    /// settled result.
    pub fn on_service_resolved(&mut self, test_case_id: &str, raw: RawDiagnosticResult) -> bool {
        if !self.is_live(test_case_id) {
            debug!("discarding stale resolution for {}", test_case_id);
            return false;
        }

        self.request = match contract::validate(raw) {
            Ok(result) => RequestState::Settled {
                test_case_id: test_case_id.to_string(),
                result,
            },
            Err(violation) => {
                warn!("diagnostic payload rejected: {}", violation);
                RequestState::Failed {
                    test_case_id: test_case_id.to_string(),
                    error: AnalysisFailure::schema(&violation),
                }
            }
        };
        true
    }

    /// Deliver a service rejection. Same staleness rule as
    /// [`Self::on_service_resolved`].
    pub fn on_service_rejected(&mut self, test_case_id: &str, error: AnalysisFailure) -> bool {
        if !self.is_live(test_case_id) {
            debug!("discarding stale rejection for {}", test_case_id);
            return false;
        }

        self.request = RequestState::Failed {
            test_case_id: test_case_id.to_string(),
            error,
        };
        true
    }

    /// Drop the live request (e.g. when the catalog is reloaded).
    pub fn clear(&mut self) {
        self.request = RequestState::Idle;
    }

    /// Side-effect-free projection for rendering.
    pub fn current_view(&self) -> RequestView<'_> {
        match &self.request {
            RequestState::Idle => RequestView {
                is_loading: false,
                result: None,
                error: None,
                test_case_id: None,
            },
            RequestState::Loading { test_case_id } => RequestView {
                is_loading: true,
                result: None,
                error: None,
                test_case_id: Some(test_case_id),
            },
            RequestState::Settled {
                test_case_id,
                result,
            } => RequestView {
                is_loading: false,
                result: Some(result),
                error: None,
                test_case_id: Some(test_case_id),
            },
            RequestState::Failed {
                test_case_id,
                error,
            } => RequestView {
                is_loading: false,
                result: None,
                error: Some(error),
                test_case_id: Some(test_case_id),
            },
        }
    }

    fn is_live(&self, test_case_id: &str) -> bool {
        // Only a Loading request can settle; a Settled/Failed outcome for
        // the same id has already been superseded or consumed.
        matches!(
            &self.request,
            RequestState::Loading { test_case_id: live } if live == test_case_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griddebug_core::{
        AnalysisStatus, BusSystem, FailureType, RawComponentDetail, TestCase,
    };

    fn case(id: &str) -> TestCase {
        TestCase {
            id: id.to_string(),
            name: format!("Case {id}"),
            description: String::new(),
            bus_system: BusSystem::Ieee14,
            failure_type: FailureType::NonConvergence,
        }
    }

    fn catalog() -> Vec<TestCase> {
        vec![case("case14_test1"), case("case30_test1")]
    }

    fn ok_raw() -> RawDiagnosticResult {
        RawDiagnosticResult {
            root_causes: vec!["R1".to_string()],
            analysis_status: Some("success".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let orchestrator = AnalysisOrchestrator::new();
        assert_eq!(*orchestrator.request(), RequestState::Idle);
        let view = orchestrator.current_view();
        assert!(!view.is_loading);
        assert!(view.result.is_none());
        assert!(view.error.is_none());
        assert!(view.test_case_id.is_none());
    }

    #[test]
    fn test_select_transitions_to_loading() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        let view = orchestrator.current_view();
        assert!(view.is_loading);
        assert!(view.result.is_none());
        assert!(view.error.is_none());
        assert_eq!(view.test_case_id, Some("case14_test1"));
    }

    #[test]
    fn test_invalid_selection_leaves_state_unchanged() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();

        let err = orchestrator
            .select(&catalog(), "not_a_real_id")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { .. }));
        assert_eq!(orchestrator.live_id(), Some("case14_test1"));
        assert!(orchestrator.current_view().is_loading);
    }

    #[test]
    fn test_resolution_settles_with_validated_result() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();

        assert!(orchestrator.on_service_resolved("case14_test1", ok_raw()));
        let view = orchestrator.current_view();
        assert!(!view.is_loading);
        let result = view.result.expect("settled result");
        assert_eq!(result.analysis_status, AnalysisStatus::Success);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_invalid_payload_fails_closed() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();

        let mut raw = ok_raw();
        raw.affected_components = vec![
            RawComponentDetail {
                id: "c1".to_string(),
                name: "Bus 1".to_string(),
                kind: Some("bus".to_string()),
                value: Some(1.02),
            },
            RawComponentDetail {
                id: "c1".to_string(),
                name: "Bus 1 again".to_string(),
                kind: Some("bus".to_string()),
                value: Some(1.03),
            },
        ];
        assert!(orchestrator.on_service_resolved("case14_test1", raw));

        let view = orchestrator.current_view();
        assert!(view.result.is_none());
        assert!(matches!(
            view.error,
            Some(AnalysisFailure::SchemaViolation { .. })
        ));
    }

    #[test]
    fn test_rejection_fails_the_request() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();

        assert!(orchestrator
            .on_service_rejected("case14_test1", AnalysisFailure::service("backend down")));
        let view = orchestrator.current_view();
        assert_eq!(view.error, Some(&AnalysisFailure::service("backend down")));
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        orchestrator.select(&catalog(), "case30_test1").unwrap();

        // The first case's outcome arrives after supersession.
        assert!(!orchestrator.on_service_resolved("case14_test1", ok_raw()));
        let view = orchestrator.current_view();
        assert!(view.is_loading);
        assert_eq!(view.test_case_id, Some("case30_test1"));
    }

    #[test]
    fn test_stale_rejection_is_discarded() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        orchestrator.select(&catalog(), "case30_test1").unwrap();

        assert!(
            !orchestrator.on_service_rejected("case14_test1", AnalysisFailure::service("late"))
        );
        assert!(orchestrator.current_view().is_loading);
    }

    #[test]
    fn test_staleness_for_all_interleavings() {
        // A then B selected; A's outcome arrives before or after B's.
        for a_first in [true, false] {
            let mut orchestrator = AnalysisOrchestrator::new();
            orchestrator.select(&catalog(), "case14_test1").unwrap();
            orchestrator.select(&catalog(), "case30_test1").unwrap();

            if a_first {
                orchestrator.on_service_resolved("case14_test1", ok_raw());
                orchestrator.on_service_resolved("case30_test1", ok_raw());
            } else {
                orchestrator.on_service_resolved("case30_test1", ok_raw());
                orchestrator.on_service_resolved("case14_test1", ok_raw());
            }

            let view = orchestrator.current_view();
            assert_eq!(view.test_case_id, Some("case30_test1"));
            assert!(view.result.is_some());
        }
    }

    #[test]
    fn test_reselection_is_a_fresh_loading_transition() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        orchestrator.on_service_resolved("case14_test1", ok_raw());
        assert!(orchestrator.current_view().result.is_some());

        orchestrator.select(&catalog(), "case14_test1").unwrap();
        let view = orchestrator.current_view();
        assert!(view.is_loading);
        assert!(view.result.is_none());
    }

    #[test]
    fn test_outcome_after_settlement_is_ignored() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        orchestrator.on_service_resolved("case14_test1", ok_raw());

        // A duplicate late outcome for the already-settled id changes nothing.
        assert!(!orchestrator
            .on_service_rejected("case14_test1", AnalysisFailure::service("duplicate")));
        assert!(orchestrator.current_view().result.is_some());
    }

    #[test]
    fn test_view_shapes_are_mutually_exclusive() {
        let mut orchestrator = AnalysisOrchestrator::new();

        let check = |view: RequestView<'_>| {
            let populated = usize::from(view.is_loading)
                + usize::from(view.result.is_some())
                + usize::from(view.error.is_some());
            assert!(populated <= 1, "view shapes overlap: {view:?}");
        };

        check(orchestrator.current_view());
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        check(orchestrator.current_view());
        orchestrator.on_service_resolved("case14_test1", ok_raw());
        check(orchestrator.current_view());
        orchestrator.select(&catalog(), "case30_test1").unwrap();
        orchestrator.on_service_rejected("case30_test1", AnalysisFailure::service("down"));
        check(orchestrator.current_view());
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut orchestrator = AnalysisOrchestrator::new();
        orchestrator.select(&catalog(), "case14_test1").unwrap();
        orchestrator.clear();
        assert_eq!(*orchestrator.request(), RequestState::Idle);
    }
}
