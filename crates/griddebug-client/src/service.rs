//! Collaborator traits for the analysis backend
//!
//! The orchestration core depends only on these two read/call interfaces,
//! not on how entries are sourced or how the diagnosis is transported.

use griddebug_core::prelude::*;
use griddebug_core::{Pipeline, RawDiagnosticResult, TestCase};

/// The external diagnosis operation.
///
/// Implementations deliver the *raw* wire payload; contract validation
/// happens in the orchestrator so that staleness is judged before structure.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Run a diagnosis for one test case. May fail with a transport or
    /// service error; a degraded analysis outcome is a successful return
    /// with a degraded `analysisStatus`.
    async fn analyze(
        &self,
        test_case_id: &str,
        pipeline: Pipeline,
    ) -> Result<RawDiagnosticResult>;
}

/// Read-only provider of the selectable test cases.
///
/// Produces a finite, restartable sequence: callable repeatedly with the
/// same result absent an external catalog change. No ordering guarantee
/// beyond "stable for the lifetime of one UI session".
#[trait_variant::make(TestCaseCatalog: Send)]
pub trait LocalTestCaseCatalog {
    async fn list_test_cases(&self) -> Result<Vec<TestCase>>;
}
