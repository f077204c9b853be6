use super::session::Phase;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Please enter an animal name")]
    EmptyAnimal,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Cannot {action} while in {phase:?}")]
    InvalidState { action: &'static str, phase: Phase },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
