//! Scripted backend double for orchestrator tests
//!
//! Enabled with the `test-helpers` feature. Responses are queued per call so
//! tests can drive arbitrary resolve/reject interleavings without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use griddebug_core::prelude::*;
use griddebug_core::{Pipeline, RawDiagnosticResult, TestCase};

use crate::service::{AnalysisService, TestCaseCatalog};
use crate::static_backend::StaticBackend;

/// A scripted analysis backend: serves a fixed catalog and pops one queued
/// response per `analyze` call, recording every call it receives.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    cases: Vec<TestCase>,
    responses: Mutex<VecDeque<Result<RawDiagnosticResult>>>,
    calls: Mutex<Vec<(String, Pipeline)>>,
}

impl ScriptedBackend {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self {
            cases,
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A scripted backend preloaded with the offline catalog.
    pub fn with_default_cases() -> Self {
        Self::new(StaticBackend::builtin_cases())
    }

    /// Queue a successful raw payload for the next `analyze` call.
    pub fn push_ok(&self, raw: RawDiagnosticResult) {
        self.responses.lock().unwrap().push_back(Ok(raw));
    }

    /// Queue a rejection for the next `analyze` call.
    pub fn push_err(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every `(test_case_id, pipeline)` pair `analyze` was called with.
    pub fn calls(&self) -> Vec<(String, Pipeline)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl AnalysisService for ScriptedBackend {
    async fn analyze(
        &self,
        test_case_id: &str,
        pipeline: Pipeline,
    ) -> Result<RawDiagnosticResult> {
        self.calls
            .lock()
            .unwrap()
            .push((test_case_id.to_string(), pipeline));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::service("no scripted response queued")))
    }
}

impl TestCaseCatalog for ScriptedBackend {
    async fn list_test_cases(&self) -> Result<Vec<TestCase>> {
        Ok(self.cases.clone())
    }
}
