//! Wire protocol types for the GridDebugAgent HTTP API

use serde::{Deserialize, Serialize};

use griddebug_core::{Pipeline, TestCase};

/// Request body for `POST /diagnose`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    /// Selected test-case id.
    pub test_case: String,
    /// Diagnosis pipeline to run the case through.
    #[serde(default)]
    pub pipeline: Pipeline,
}

/// Response envelope for `GET /testcases`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub testcases: Vec<TestCase>,
}
