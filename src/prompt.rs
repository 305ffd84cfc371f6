//! Blocking Dialogs
//!
//! Alerts and confirmations shown to the user.

/// Shown when creating a party fails
pub const CREATE_FAILED: &str = "Could not create party. Check the date and try again.";
/// Shown when deleting a party fails
pub const DELETE_FAILED: &str = "Could not delete party. Try again.";

/// Confirmation text before deleting a party
pub fn delete_question(party_name: &str) -> String {
    format!("Delete \"{}\"? This cannot be undone.", party_name)
}

pub trait Prompt {
    fn alert(&self, message: &str);
    /// `true` when the user accepts
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
