//! Blocking acknowledgment dialogs.

use gloo_utils::window;

/// Shows `message` in a native alert and waits for acknowledgment.
pub fn notify(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("Alert failed: {:?}", e);
    }
}
