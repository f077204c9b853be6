pub mod api_client;
pub mod error;
pub mod render;
pub mod session;

pub use api_client::{ApiClient, ClientConfig};
pub use error::ClientError;
pub use session::{Phase, QuizSession};
