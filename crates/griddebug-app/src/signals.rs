//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;

use griddebug_core::prelude::*;

use crate::message::Message;

/// Spawn a task that turns termination signals into a quit message, so
/// shutdown runs through the normal update loop and restores the terminal.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("signal handler error: {}", e);
            return;
        }

        info!("shutdown signal received");
        let _ = tx.send(Message::Quit).await;
    });
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => info!("received SIGINT"),
            _ = sigterm.recv() => info!("received SIGTERM"),
        }

        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("failed to listen for Ctrl+C: {}", e)))?;
        info!("received Ctrl+C");
        Ok(())
    }
}
