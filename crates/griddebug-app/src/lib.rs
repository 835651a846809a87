//! griddebug-app - Application state and orchestration for GridDebug
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the request-lifecycle orchestrator, the update function, the
//! action dispatcher that spawns backend calls, and configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod orchestrator;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{load_settings, Settings};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use orchestrator::{AnalysisFailure, AnalysisOrchestrator, RequestState, RequestView};
pub use state::{AppState, CatalogState, Notice};
