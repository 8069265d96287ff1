// API layer module (adapters for controllers)
// Exposes the prompt library over HTTP; nothing here talks to a model.

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::prompts::PromptLibrary;
use handlers::{models, prompts};

/// Shared, read-only handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub library: Arc<PromptLibrary>,
}

impl AppState {
    pub fn new(library: PromptLibrary) -> Self {
        Self {
            library: Arc::new(library),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PromptLibrary::builtin())
    }
}

/// Build the application router with every route mounted under `prefix`
pub fn router(state: AppState, prefix: &str) -> Router {
    let api = Router::new()
        .route("/prompts/templates", get(prompts::list_templates))
        .route("/prompts/templates/:id", get(prompts::get_template))
        .route("/prompts/settings/default", get(prompts::default_settings))
        .route("/prompts/build", post(prompts::preview_prompt))
        .route("/prompts/multi-axis", get(prompts::list_multi_axis_templates))
        .route("/prompts/multi-axis/:id", get(prompts::get_multi_axis_template))
        .route("/models", get(models::list_providers))
        .route("/models/:provider/:model_id", get(models::get_model));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest(prefix, api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
