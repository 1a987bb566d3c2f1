//! Error types for the EssayPass server.
//!
//! - [`ConfigError`] - Invalid serve configuration
//! - [`ServerError`] - Top-level server errors
//!
//! Conversion is via `From`, so `?` works across the boundary.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while validating [`crate::ServeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The dist directory does not exist.
    #[error("Dist directory not found: {}", .0.display())]
    MissingDist(PathBuf),

    /// The dist directory has no `index.html`.
    #[error("No index.html in {} (run `trunk build` first)", .0.display())]
    MissingIndex(PathBuf),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Bind or serve failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let config_err = ConfigError::MissingIndex(PathBuf::from("dist"));
        let server_err: ServerError = config_err.into();
        let msg = server_err.to_string();
        assert!(msg.contains("index.html"));
        assert!(msg.contains("dist"));

        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let server_err: ServerError = io_err.into();
        assert!(server_err.to_string().contains("port taken"));
    }

    #[test]
    fn test_missing_dist_format() {
        let err = ConfigError::MissingDist(PathBuf::from("frontend/dist"));
        assert_eq!(err.to_string(), "Dist directory not found: frontend/dist");
    }
}
