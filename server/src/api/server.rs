//! HTTP server for the EssayPass front end.
//!
//! # Endpoints
//!
//! | Method | Path      | Description                                   |
//! |--------|-----------|-----------------------------------------------|
//! | GET    | `/health` | Health check                                  |
//! | GET    | `/*`      | Asset from `dist/`, else `dist/index.html`    |

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;
use crate::error::ServerResult;

// =============================================================================
// Client routes
// =============================================================================

/// A page rendered client-side by the front end router.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub page: &'static str,
}

/// Routes the front end resolves; all of them are served `index.html`.
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo { path: "/", page: "Landing (composer + confirmation)" },
    RouteInfo { path: "/ai-essay-writer", page: "Essay writer composer" },
    RouteInfo { path: "/ai-essay-writer/task/:id", page: "Order confirmation" },
    RouteInfo { path: "/ai-detector", page: "AI detector" },
];

// =============================================================================
// Router
// =============================================================================

/// Builds the application router for `config.dist`.
pub fn build_router(config: &ServeConfig) -> Router {
    // Permissive CORS for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let static_files = ServeDir::new(&config.dist).fallback(ServeFile::new(config.index_html()));

    Router::new()
        .route("/health", get(health))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Validates `config`, binds and serves until Ctrl-C.
pub async fn start_server(config: ServeConfig) -> ServerResult<()> {
    config.validate()?;

    let app = build_router(&config);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🚀 EssayPass running on http://localhost:{}", config.port);
    tracing::info!("   Serving {}", config.dist.display());
    for route in ROUTES {
        tracing::info!("   {:<28} {}", route.path, route.page);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "essaypass",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": ROUTES,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>essaypass</body></html>";

    fn dist_fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), INDEX).unwrap();
        fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dist = dist_fixture();
        let app = build_router(&ServeConfig::new(0, dist.path()));

        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "essaypass");
        assert_eq!(json["routes"].as_array().unwrap().len(), ROUTES.len());
    }

    #[tokio::test]
    async fn test_deep_link_falls_back_to_index() {
        let dist = dist_fixture();
        let app = build_router(&ServeConfig::new(0, dist.path()));

        let (status, body) = get_body(app, "/ai-essay-writer/task/123456").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_root_and_assets() {
        let dist = dist_fixture();
        let config = ServeConfig::new(0, dist.path());

        let (status, body) = get_body(build_router(&config), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);

        let (status, body) = get_body(build_router(&config), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console.log"));
    }

    #[test]
    fn test_routes_cover_pages() {
        let paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
        assert!(paths.contains(&"/ai-essay-writer/task/:id"));
        assert!(paths.contains(&"/ai-detector"));
    }
}
