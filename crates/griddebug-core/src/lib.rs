//! # griddebug-core - Core Domain Types
//!
//! Foundation crate for GridDebug. Provides the power-flow diagnostic domain
//! types, the analysis-result data contract with boundary validation, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TestCase`] - A selectable pre-defined failure test case
//! - [`BusSystem`], [`FailureType`] - Network size and injected failure mode
//! - [`DiagnosticResult`] - A validated diagnostic report
//! - [`ComponentDetail`], [`CorrectiveAction`] - Report entries
//! - [`Pipeline`] - Diagnosis pipeline selector (baseline/agentic)
//!
//! ### Data Contract (`contract`)
//! - [`RawDiagnosticResult`] - Unvalidated wire payload from the service
//! - [`validate()`] - Fail-closed boundary validation
//! - [`ContractViolation`] - Structural violation detail
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with recoverability classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use griddebug_core::prelude::*;
//! ```

pub mod contract;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all GridDebug crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use contract::{
    validate, ContractViolation, RawComponentDetail, RawCorrectiveAction, RawDiagnosticResult,
};
pub use error::{Error, Result, ResultExt};
pub use types::{
    ActionCategory, ActionPriority, AnalysisStatus, BusSystem, ComponentDetail, ComponentKind,
    CorrectiveAction, DiagnosticResult, FailureType, Pipeline, TestCase,
};
