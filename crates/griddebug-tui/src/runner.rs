//! Main TUI runner - entry point and event loop
//!
//! `run` owns the terminal for the lifetime of the session: it installs the
//! panic hook, kicks off the initial catalog fetch, then loops draining
//! backend messages, drawing, and polling terminal events until quit.

use std::sync::Arc;

use tokio::sync::mpsc;

use griddebug_app::actions::handle_action;
use griddebug_app::config::Settings;
use griddebug_app::process::process_message;
use griddebug_app::{signals, AppState, Message, UpdateAction};
use griddebug_client::{AnalysisService, TestCaseCatalog};
use griddebug_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against the given analysis backend.
pub async fn run<S>(settings: Settings, backend: Arc<S>, backend_label: String) -> Result<()>
where
    S: AnalysisService + TestCaseCatalog + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::new(settings, backend_label);

    // Unified message channel: background tasks and the signal handler all
    // resolve into messages on this channel.
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    // Initial catalog fetch; the catalog panel shows its loading state
    // until the listing message lands.
    handle_action(UpdateAction::FetchCatalog, msg_tx.clone(), backend.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, backend);

    ratatui::restore();
    info!("GridDebug exited");
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<S>,
) -> Result<()>
where
    S: AnalysisService + TestCaseCatalog + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Drain messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &backend);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms poll; timeout yields a tick)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &backend);
        }
    }

    Ok(())
}
