//! Message types for the application (TEA pattern)

use griddebug_core::{RawDiagnosticResult, TestCase};

use crate::input_key::InputKey;
use crate::orchestrator::AnalysisFailure;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Catalog listing arrived from the backend
    CatalogLoaded { cases: Vec<TestCase> },
    /// Catalog listing failed
    CatalogLoadFailed { error: String },
    /// Re-fetch the catalog (r)
    ReloadCatalog,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Move the highlight up one case
    SelectPrev,
    /// Move the highlight down one case
    SelectNext,
    /// Jump to the first/last case
    SelectFirst,
    SelectLast,
    /// Toggle the diagnosis pipeline (baseline/agentic)
    TogglePipeline,
    /// Run analysis for the highlighted case (Enter)
    RunAnalysis,
    /// Begin an analysis request for an explicit test case id
    Select { test_case_id: String },

    // ─────────────────────────────────────────────────────────
    // Analysis Outcome Messages (from background tasks)
    // ─────────────────────────────────────────────────────────
    /// The service resolved with a raw (not yet validated) payload
    AnalysisResolved {
        test_case_id: String,
        raw: RawDiagnosticResult,
    },
    /// The service rejected
    AnalysisFailed {
        test_case_id: String,
        error: AnalysisFailure,
    },
}
