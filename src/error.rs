use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

pub const PROVIDER_UNAVAILABLE_MESSAGE: &str =
    "All Gemini models are currently unavailable. Please try again later.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Failed to generate data";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single model attempt failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Every model in the fallback list failed; holds the last failure.
    #[error("All models failed, last error: {0}")]
    ProviderUnavailable(Box<Error>),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// The request body was not a valid `{ animal: string }` document.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            Error::ProviderUnavailable(_) | Error::Provider(_) | Error::Reqwest(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                PROVIDER_UNAVAILABLE_MESSAGE.to_string(),
            ),
            Error::MalformedResponse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MALFORMED_RESPONSE_MESSAGE.to_string(),
            ),
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
