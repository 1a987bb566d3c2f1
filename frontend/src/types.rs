//! Common types used across the front end.
//!
//! # Categories
//!
//! - **File Types** - descriptors for user-selected files
//! - **Error Types** - front-end error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::JsValue;

// =============================================================================
// File Types
// =============================================================================

/// A user-selected file as this layer sees it.
///
/// Only the name and byte size are ever read; content stays opaque.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name including extension
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }

    /// Size formatted for display, e.g. `12.3 KB`.
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

impl From<&web_sys::File> for FileDescriptor {
    fn from(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size().max(0.0) as u64,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Front-end application errors.
///
/// None of these are shown to the user: callers log them and fall back.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Browser storage unavailable or refused the operation.
    Storage(String),
    /// Hand-off payload could not be (de)serialized.
    Serialization(String),
    /// Invalid user input.
    Validation(String),
}

impl AppError {
    /// Wrap a JavaScript exception as a storage error.
    pub fn storage(err: JsValue) -> Self {
        AppError::Storage(format!("{:?}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Result type alias for front-end operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label_one_decimal() {
        assert_eq!(FileDescriptor::new("a.pdf", 12_595).size_label(), "12.3 KB");
        assert_eq!(FileDescriptor::new("a.pdf", 0).size_label(), "0.0 KB");
    }

    #[test]
    fn test_serde_error_becomes_serialization() {
        let err: AppError = serde_json::from_str::<FileDescriptor>("{").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
