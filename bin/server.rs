// Menu Sheet - Web Server
// Serves the rendered menu page plus a small JSON API with Axum

use anyhow::{Context, Result};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use menu_sheet::{
    init_logging, load_menu, render_page, CategoryGroup, HttpFetcher, LoadedMenu, MenuConfig,
    MenuFetcher, MenuItem,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared application state
#[derive(Clone)]
struct AppState {
    config: Arc<MenuConfig>,
    fetcher: Arc<dyn MenuFetcher>,
}

impl AppState {
    /// Every request is its own render pass: fetch, parse, group.
    async fn load(&self) -> LoadedMenu {
        load_menu(&self.config, self.fetcher.as_ref()).await
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    is_fallback: bool,
}

impl<T> ApiResponse<T> {
    fn ok(data: T, is_fallback: bool) -> Self {
        Self {
            success: true,
            data,
            is_fallback,
        }
    }
}

/// Category response with the anchor the page uses for it
#[derive(Serialize)]
struct CategoryResponse {
    category: String,
    anchor: String,
    items: Vec<MenuItem>,
}

impl From<CategoryGroup> for CategoryResponse {
    fn from(group: CategoryGroup) -> Self {
        Self {
            anchor: menu_sheet::anchor_id(&group.category),
            category: group.category,
            items: group.items,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK", false))
}

/// GET /api/menu - Grouped menu
async fn get_menu(State(state): State<AppState>) -> impl IntoResponse {
    let menu = state.load().await;
    let groups: Vec<CategoryResponse> = menu.groups.into_iter().map(Into::into).collect();

    Json(ApiResponse::ok(groups, menu.is_fallback))
}

/// GET /api/items - Flat item list in source order
async fn get_items(State(state): State<AppState>) -> impl IntoResponse {
    let menu = state.load().await;

    Json(ApiResponse::ok(menu.items, menu.is_fallback))
}

/// GET / - Rendered menu page
async fn serve_menu(State(state): State<AppState>) -> impl IntoResponse {
    let menu = state.load().await;

    Html(render_page(&menu, &state.config))
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/menu", get(get_menu))
        .route("/items", get(get_items))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_menu))
        .with_state(state)
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = MenuConfig::load(None)?;
    match &config.source_url {
        Some(url) => info!(source = %url, "menu source configured"),
        None => info!("no menu source configured, the fallback menu will be served"),
    }

    let state = AppState {
        fetcher: Arc::new(HttpFetcher::from_config(&config)),
        config: Arc::new(config),
    };
    let addr = state.config.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("🚀 Server running on http://{}", addr);
    info!("   API: http://{}/api/menu", addr);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
