//! HTTP API module.
//!
//! Static hosting with client-side route fallback, plus a health check.

pub mod server;

pub use server::{build_router, start_server, RouteInfo, ROUTES};
