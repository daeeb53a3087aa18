//! HTTP routes: the form page, form submission, health and static assets.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::core::app;
use crate::core::story::StoryRequest;

use super::page::IndexPage;
use super::{AppState, ServerError};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/health", get(health))
        .nest_service("/static", assets)
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: app::VERSION.to_string(),
    })
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let page = IndexPage {
        models: state.models.list_available_models().await,
        missing_api_key: !state.config.has_api_key(),
        ..IndexPage::default()
    };
    Ok(Html(state.pages.render_index(&page)?))
}

/// Always renders the page (200); generation failures become the page's error message.
async fn generate(
    State(state): State<Arc<AppState>>,
    Form(request): Form<StoryRequest>,
) -> Result<Html<String>, ServerError> {
    // Refresh the list so the selector stays populated.
    let models = state.models.list_available_models().await;
    let (story, error) = match state.stories.generate_story(&request).await {
        Ok(story) => (Some(story), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let page = IndexPage {
        models,
        missing_api_key: !state.config.has_api_key(),
        story,
        error,
        word1: request.word1,
        word2: request.word2,
        word3: request.word3,
        selected_model: request.selected_model,
    };
    Ok(Html(state.pages.render_index(&page)?))
}
