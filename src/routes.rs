//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is static HTML plus the `client` WASM bundle. This router
//! serves the site directory at `/` (with `index.html` on directories), the
//! bundle at `/pkg`, and a liveness probe at `/healthz`. There are no API
//! routes; the contact form never leaves the browser.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
