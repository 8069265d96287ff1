use axum::{extract::Path, Json};

use crate::api::errors::ApiError;
use crate::prompts::models::{get_model_by_id, model_providers, ModelOption, ModelProvider, ProviderConfig};

/// List providers with their model catalogs
///
/// GET /api/v1/models
pub async fn list_providers() -> Json<Vec<ProviderConfig>> {
    Json(model_providers())
}

/// Fetch one model of a provider
///
/// GET /api/v1/models/:provider/:model_id
pub async fn get_model(
    Path((provider, model_id)): Path<(String, String)>,
) -> Result<Json<ModelOption>, ApiError> {
    let provider: ModelProvider = provider.parse()?;

    get_model_by_id(provider, &model_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Model not found: {}/{}", provider, model_id)))
}
