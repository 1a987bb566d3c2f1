//! Session-storage backed hand-off slot.

use gloo_utils::window;
use web_sys::Storage;

use crate::state::HandoffSlot;
use crate::types::{AppError, AppResult};

/// One key of `window.sessionStorage`.
///
/// Cleared implicitly when the browser session ends.
#[derive(Clone, Copy, Debug)]
pub struct SessionSlot {
    key: &'static str,
}

impl SessionSlot {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> AppResult<Storage> {
        window()
            .session_storage()
            .map_err(AppError::storage)?
            .ok_or_else(|| AppError::Storage("sessionStorage unavailable".to_string()))
    }
}

impl HandoffSlot for SessionSlot {
    fn read(&self) -> AppResult<Option<String>> {
        Self::storage()?.get_item(self.key).map_err(AppError::storage)
    }

    fn write(&self, value: &str) -> AppResult<()> {
        Self::storage()?.set_item(self.key, value).map_err(AppError::storage)
    }

    fn clear(&self) -> AppResult<()> {
        Self::storage()?.remove_item(self.key).map_err(AppError::storage)
    }
}
