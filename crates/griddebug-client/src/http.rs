//! HTTP implementation of the backend collaborators
//!
//! Talks to the GridDebugAgent API: `GET /testcases` for the catalog and
//! `POST /diagnose` for analysis runs. The configured request timeout turns
//! "no resolution within T" into a synthetic rejection at this boundary;
//! the core state machine defines no timeout of its own.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use griddebug_core::contract::ContractViolation;
use griddebug_core::prelude::*;
use griddebug_core::{Pipeline, RawDiagnosticResult, TestCase};

use crate::protocol::{CatalogResponse, DiagnoseRequest};
use crate::service::{AnalysisService, TestCaseCatalog};

/// Default request timeout when the settings do not specify one.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP client for the GridDebugAgent backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend client for `base_url` with a per-request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Create a backend client with the default timeout.
    pub fn with_default_timeout(base_url: Url) -> Result<Self> {
        Self::new(base_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::http(format!("invalid endpoint '{path}': {e}")))
    }
}

impl AnalysisService for HttpBackend {
    async fn analyze(
        &self,
        test_case_id: &str,
        pipeline: Pipeline,
    ) -> Result<RawDiagnosticResult> {
        let url = self.endpoint("diagnose")?;
        let request = DiagnoseRequest {
            test_case: test_case_id.to_string(),
            pipeline,
        };

        debug!(
            "POST {} test_case={} pipeline={}",
            url,
            test_case_id,
            pipeline.label()
        );

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::service(format!("diagnosis for '{test_case_id}' timed out"))
                } else {
                    Error::http(format!("diagnose request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::service(format!(
                "diagnose returned HTTP {status} for '{test_case_id}'"
            )));
        }

        // The raw struct is permissive; a body that cannot even parse into
        // it is a contract violation, not a transport error.
        response.json::<RawDiagnosticResult>().await.map_err(|e| {
            Error::SchemaViolation(ContractViolation::MalformedPayload {
                detail: e.to_string(),
            })
        })
    }
}

impl TestCaseCatalog for HttpBackend {
    async fn list_test_cases(&self) -> Result<Vec<TestCase>> {
        let url = self.endpoint("testcases")?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::catalog(format!("catalog request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::catalog(format!("catalog returned HTTP {status}")));
        }

        let envelope: CatalogResponse = response
            .json()
            .await
            .map_err(|e| Error::catalog(format!("catalog payload malformed: {e}")))?;

        Ok(envelope.testcases)
    }
}
