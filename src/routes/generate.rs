use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::dto::quiz_dto::QuizRequest;
use crate::models::quiz::GenerationResult;
use crate::AppState;

#[axum::debug_handler]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> crate::error::Result<Json<GenerationResult>> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected generate request body");
        rejection
    })?;
    tracing::info!(animal = %payload.animal, "Generating animal quiz");
    let result = state.generation_service.generate(&payload.animal).await?;
    Ok(Json(result))
}
