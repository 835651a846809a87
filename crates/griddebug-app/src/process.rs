//! Message processing: the TEA update loop driver

use std::sync::Arc;

use tokio::sync::mpsc;

use griddebug_client::{AnalysisService, TestCaseCatalog};

use crate::actions::handle_action;
use crate::message::Message;
use crate::state::AppState;
use crate::{handler, UpdateResult};

/// Process a message through the TEA update function, dispatching any
/// resulting action and draining follow-up messages until the chain ends.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<S>,
) where
    S: AnalysisService + TestCaseCatalog + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let UpdateResult { message, action } = handler::update(state, m);

        if let Some(action) = action {
            handle_action(action, msg_tx.clone(), backend.clone());
        }

        msg = message;
    }
}
