//! HTTP route handlers: one route per page plus a small JSON API.

use std::path::Path;

use axum::Router;
use axum::extract::State;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use site::SiteError;
use site::core::registry::PageSummary;
use tower_http::services::ServeDir;
use tracing::error;

use crate::state::AppState;

/// Full application: pages, `/api`, then static files or a plain 404.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .nest("/api", api_router())
        .merge(page_router(&state));
    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).not_found_service(not_found_handler.into_service()),
        ),
        None => router.fallback(not_found_handler),
    };
    router.with_state(state)
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/pages", get(list_pages))
}

/// One route per registered page, reachable as `/{id}` and `/{id}.{ext}`.
/// `/` and `/index.{ext}` serve the first page.
pub fn page_router(state: &AppState) -> Router<AppState> {
    let registry = state.renderer.registry();
    let ext = &state.renderer.settings().page_extension;

    let mut router = Router::new().route("/", get(get_index));
    if !registry.contains("index") {
        router = router.route(&format!("/index.{ext}"), get(get_index));
    }
    for id in registry.ids() {
        let handler = move |State(state): State<AppState>| async move { render(&state, id) };
        router = router
            .route(&format!("/{id}"), get(handler))
            .route(&format!("/{id}.{ext}"), get(handler));
    }
    router
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/pages - pages in navigation order.
async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    Json(state.renderer.pages())
}

/// GET / - the first registered page.
async fn get_index(State(state): State<AppState>) -> Response {
    match state.renderer.registry().first() {
        Some(page) => render(&state, page.id),
        None => not_found("index"),
    }
}

async fn not_found_handler(uri: Uri) -> Response {
    not_found(uri.path().trim_start_matches('/'))
}

fn render(state: &AppState, id: &str) -> Response {
    match state.renderer.render_page(id) {
        Ok(html) => Html(html).into_response(),
        Err(err) if err.is_not_found() => not_found(id),
        Err(err) => internal_error(id, &err),
    }
}

fn not_found(id: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("page not found: {id}\n")).into_response()
}

fn internal_error(id: &str, err: &SiteError) -> Response {
    error!(page = id, error = %err, "page render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "render failed\n").into_response()
}
