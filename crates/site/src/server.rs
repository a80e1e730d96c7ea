//! HTTP server for the documentation site
//!
//! This module provides an axum-based development server that renders pages
//! from an in-memory registry snapshot. Routes mirror the static site's flat
//! layout (`/clearErrors.html`, `/faq.html`, ...), plus a JSON search API
//! and a registry dump.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use hookform_content::data::API;
use hookform_content::{ContentEntry, Registry};

use crate::render;

/// Application state shared across handlers.
pub struct SiteServerState {
    /// The content registry snapshot being served
    pub registry: Registry,
    /// Path to extra static assets, if any
    pub assets_path: Option<String>,
}

impl SiteServerState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            assets_path: None,
        }
    }

    pub fn with_assets(mut self, path: impl Into<String>) -> Self {
        self.assets_path = Some(path.into());
        self
    }
}

/// Create the documentation site router.
pub fn site_router(state: Arc<SiteServerState>) -> Router {
    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/api/search", get(search_handler))
        .route("/api/registry", get(registry_api_handler))
        .route("/{page}", get(page_handler))
        .with_state(state.clone());

    // Serve extra static assets if configured
    if let Some(ref assets_path) = state.assets_path {
        router = router.nest_service("/assets", ServeDir::new(assets_path));
    }

    router
}

/// Home page handler.
async fn index_handler(State(state): State<Arc<SiteServerState>>) -> impl IntoResponse {
    Html(render::render_home_page(&state.registry))
}

/// Page handler for the flat `/<key>.html` layout.
async fn page_handler(
    State(state): State<Arc<SiteServerState>>,
    Path(page): Path<String>,
) -> (StatusCode, Html<String>) {
    let key = page_key(&page);
    let registry = &state.registry;

    if key == "index" {
        return (StatusCode::OK, Html(render::render_home_page(registry)));
    }

    // Listing collections are served as a single page; API entries get
    // their own page each.
    let is_listing = registry
        .collections()
        .iter()
        .any(|c| c.key == key && c.key != API);
    if is_listing {
        return (
            StatusCode::OK,
            Html(render::render_listing_page(registry, key)),
        );
    }

    match registry.get(key) {
        Ok(entry) => (
            StatusCode::OK,
            Html(render::render_entry_page(registry, entry)),
        ),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Html(render::render_not_found_page(registry, &page)),
        ),
    }
}

/// Search API handler.
#[derive(serde::Deserialize)]
pub struct SearchQuery {
    q: String,
}

async fn search_handler(
    State(state): State<Arc<SiteServerState>>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let results: Vec<ContentEntry> = state
        .registry
        .search(&query.q)
        .into_iter()
        .take(20)
        .cloned()
        .collect();

    Json(results)
}

/// Registry dump handler (returns the complete registry as JSON).
async fn registry_api_handler(State(state): State<Arc<SiteServerState>>) -> impl IntoResponse {
    Json(state.registry.clone())
}

/// Normalize a request path segment to a registry key.
fn page_key(page: &str) -> &str {
    page.strip_suffix(".html").unwrap_or(page)
}

/// Configuration for the documentation server.
pub struct SiteServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Host to bind to
    pub host: String,
    /// Path to extra static assets
    pub assets_path: Option<String>,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            assets_path: None,
        }
    }
}

/// Start the documentation server.
pub async fn serve(registry: Registry, config: SiteServerConfig) -> Result<(), std::io::Error> {
    let mut state = SiteServerState::new(registry);
    if let Some(assets_path) = config.assets_path {
        state = state.with_assets(assets_path);
    }

    let app = site_router(Arc::new(state));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Documentation server listening on http://{}", addr);

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_key_strips_html_suffix() {
        assert_eq!(page_key("clearErrors.html"), "clearErrors");
        assert_eq!(page_key("faq"), "faq");
        assert_eq!(page_key("index.html"), "index");
    }

    #[test]
    fn router_builds_with_and_without_assets() {
        let registry = Registry::default();
        let _ = site_router(Arc::new(SiteServerState::new(registry.clone())));
        let _ = site_router(Arc::new(
            SiteServerState::new(registry).with_assets("/tmp/assets"),
        ));
    }
}
