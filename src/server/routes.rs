//! Route table for the site. Every page goes through `App::render`.

use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::Route;
use crate::error::SiteError;
use crate::server::state::AppState;

pub fn create_router(state: AppState, public_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/datasets", get(datasets))
        .route("/datasets/:id", get(dataset))
        .route("/about", get(about))
        .route("/documentation", get(documentation))
        .nest_service("/public", ServeDir::new(public_dir.as_ref()))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn render_page(state: &AppState, route: &Route) -> Result<Response, SiteError> {
    let page = state.app().render(route)?;
    Ok((page.status, Html(page.html)).into_response())
}

async fn home(State(state): State<AppState>) -> Result<Response, SiteError> {
    render_page(&state, &Route::Home)
}

async fn datasets(State(state): State<AppState>) -> Result<Response, SiteError> {
    render_page(&state, &Route::Datasets)
}

async fn dataset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, SiteError> {
    render_page(&state, &Route::Dataset(id))
}

async fn about(State(state): State<AppState>) -> Result<Response, SiteError> {
    render_page(&state, &Route::About)
}

async fn documentation(State(state): State<AppState>) -> Result<Response, SiteError> {
    render_page(&state, &Route::Documentation)
}

/// Trailing-slash variants still resolve; anything else is a 404 page.
async fn fallback(State(state): State<AppState>, uri: Uri) -> Result<Response, SiteError> {
    render_page(&state, &Route::parse(uri.path()))
}
