use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    extract::multipart::MultipartError,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, PageView};
use crate::render::render_page;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        .route("/", get(index).post(translate))
        // Health check
        .route("/api/health", get(health_check))
        // Static file serving
        .nest_service("/static", ServeDir::new(&system_config.static_dir))
        .layer(DefaultBodyLimit::max(system_config.max_upload_bytes))
}

/// Full application: routes, request tracing and shared state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let view = PageView::blank(&state.config.system_config.default_language);
    Html(render_page(&view))
}

async fn translate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, MultipartError> {
    let submission = handlers::read_submission(&mut multipart).await?;
    let view = handlers::process_submission(&state, submission).await;
    Ok(Html(render_page(&view)))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
