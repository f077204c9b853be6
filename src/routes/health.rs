use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::dto::quiz_dto::HomeResponse;

#[axum::debug_handler]
pub async fn home() -> impl IntoResponse {
    let body = HomeResponse {
        message: "Welcome to the Animal Quiz API 🐾".to_string(),
        status: "running".to_string(),
    };
    (StatusCode::OK, Json(body))
}
