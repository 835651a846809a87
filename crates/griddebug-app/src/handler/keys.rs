//! Key event handling
//!
//! Maps normalized keys to messages. Navigation keys mutate the selector
//! highlight directly; everything with side effects goes through a message
//! so the update loop stays the single transition point.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Handle a key press, optionally producing a follow-up message.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Enter => Some(Message::RunAnalysis),
        InputKey::Char('p') => Some(Message::TogglePipeline),
        InputKey::Char('r') => Some(Message::ReloadCatalog),

        InputKey::Esc => {
            state.clear_notice();
            None
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn state() -> AppState {
        AppState::new(Settings::default(), "offline")
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert!(matches!(
            handle_key(&mut s, InputKey::Char('q')),
            Some(Message::Quit)
        ));
        assert!(matches!(
            handle_key(&mut s, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_navigation_keys() {
        let mut s = state();
        assert!(matches!(
            handle_key(&mut s, InputKey::Up),
            Some(Message::SelectPrev)
        ));
        assert!(matches!(
            handle_key(&mut s, InputKey::Char('j')),
            Some(Message::SelectNext)
        ));
        assert!(matches!(
            handle_key(&mut s, InputKey::End),
            Some(Message::SelectLast)
        ));
    }

    #[test]
    fn test_enter_runs_analysis() {
        let mut s = state();
        assert!(matches!(
            handle_key(&mut s, InputKey::Enter),
            Some(Message::RunAnalysis)
        ));
    }

    #[test]
    fn test_esc_clears_notice() {
        let mut s = state();
        s.set_notice("oops", true);
        assert!(handle_key(&mut s, InputKey::Esc).is_none());
        assert!(s.notice.is_none());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut s = state();
        assert!(handle_key(&mut s, InputKey::Char('z')).is_none());
    }
}
