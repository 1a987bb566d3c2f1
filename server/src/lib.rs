//! # EssayPass server - static hosting for the EssayPass front end
//!
//! Serves the `trunk`-built front end and falls back to `index.html` for
//! every unmatched path, so client-side routes such as
//! `/ai-essay-writer/task/123456` survive a reload or a shared link.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────────────┐
//! │   Request   │────▶│   /health   │     │  dist/<asset>       │
//! │             │────▶│  ServeDir   │────▶│  else dist/index.html│
//! └─────────────┘     └─────────────┘     └─────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Serve configuration and validation
//! - [`api`] - HTTP router and server

pub mod api;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{build_router, start_server, RouteInfo, ROUTES};
pub use config::ServeConfig;
pub use error::{ConfigError, ConfigResult, ServerError, ServerResult};
