//! griddebug-client - Backend collaborators for GridDebug
//!
//! Provides the two external interfaces the orchestration core consumes --
//! the analysis service and the test-case catalog -- plus their HTTP and
//! offline implementations and the wire protocol types.

pub mod http;
pub mod protocol;
pub mod service;
pub mod static_backend;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use http::{HttpBackend, DEFAULT_TIMEOUT_MS};
pub use protocol::{CatalogResponse, DiagnoseRequest};
pub use service::{AnalysisService, TestCaseCatalog};
pub use static_backend::StaticBackend;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_utils::ScriptedBackend;
