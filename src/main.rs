//! GridDebug - a TUI client for power-flow failure diagnostics
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use url::Url;

use griddebug_app::config;
use griddebug_client::{HttpBackend, StaticBackend};
use griddebug_core::prelude::*;
use griddebug_core::Pipeline;

/// GridDebug - interactive diagnostics for power-flow failure scenarios
#[derive(Parser, Debug)]
#[command(name = "griddebug")]
#[command(about = "A TUI client for power-flow failure diagnostics", long_about = None)]
struct Args {
    /// Base URL of the GridDebugAgent backend (overrides config)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Run against the built-in scenario suite, no backend required
    #[arg(long)]
    offline: bool,

    /// Diagnosis pipeline to start with (baseline or agentic)
    #[arg(long, value_name = "PIPELINE")]
    pipeline: Option<Pipeline>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to file; the TUI owns stdout
    griddebug_core::logging::init()?;

    let args = Args::parse();

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = config::load_settings(&working_dir);
    if let Some(url) = args.url {
        settings.backend.url = url;
    }
    if let Some(pipeline) = args.pipeline {
        settings.backend.pipeline = pipeline;
    }

    if args.offline {
        info!("running offline against the built-in scenario suite");
        let backend = Arc::new(StaticBackend::new());
        return griddebug_tui::run(settings, backend, "offline".to_string()).await;
    }

    let base_url = Url::parse(&settings.backend.url)
        .map_err(|e| Error::config(format!("invalid backend URL '{}': {e}", settings.backend.url)))?;
    let label = base_url.to_string();
    let timeout = Duration::from_millis(settings.backend.timeout_ms);

    info!("backend: {} (timeout {:?})", label, timeout);
    let backend = Arc::new(HttpBackend::new(base_url, timeout)?);
    griddebug_tui::run(settings, backend, label).await
}
