use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::prompts::{
    build_evaluation_prompt, EvaluationPrompt, EvaluationPromptRequest, MultiAxisTemplate,
    PromptSettings, PromptTemplate,
};

/// List single-axis templates
///
/// GET /api/v1/prompts/templates
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<PromptTemplate>> {
    Json(state.library.single.templates().to_vec())
}

/// Fetch one single-axis template
///
/// GET /api/v1/prompts/templates/:id
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptTemplate>, ApiError> {
    state
        .library
        .single
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Template not found: {}", id)))
}

/// Settings a new installation starts from
///
/// GET /api/v1/prompts/settings/default
pub async fn default_settings() -> Json<PromptSettings> {
    Json(PromptSettings::default())
}

/// Build the evaluation messages without calling any model
///
/// POST /api/v1/prompts/build
pub async fn preview_prompt(
    State(state): State<AppState>,
    Json(req): Json<EvaluationPromptRequest>,
) -> Json<EvaluationPrompt> {
    let prompt = build_evaluation_prompt(&req, &state.library);
    tracing::info!(
        template_id = %prompt.template_id,
        multi_axis = req.use_multi_axis,
        "Built evaluation prompt"
    );

    Json(prompt)
}

/// List multi-axis templates
///
/// GET /api/v1/prompts/multi-axis
pub async fn list_multi_axis_templates(
    State(state): State<AppState>,
) -> Json<Vec<MultiAxisTemplate>> {
    Json(state.library.multi_axis.templates().to_vec())
}

/// Fetch one multi-axis template
///
/// GET /api/v1/prompts/multi-axis/:id
pub async fn get_multi_axis_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MultiAxisTemplate>, ApiError> {
    state
        .library
        .multi_axis
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Multi-axis template not found: {}", id)))
}
