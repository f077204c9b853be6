use reqwest::Client;
use url::Url;

use super::error::{ClientError, ClientResult};
use crate::dto::quiz_dto::{ErrorResponse, QuizRequest};
use crate::models::quiz::GenerationResult;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Build-time `ANIMAL_QUIZ_API_URL`, overridable by the same variable at run time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("ANIMAL_QUIZ_API_URL")
            .ok()
            .or_else(|| option_env!("ANIMAL_QUIZ_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    generate_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, client: Client) -> ClientResult<Self> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let generate_url = Url::parse(&base)?.join("api/generate")?;
        Ok(Self {
            client,
            generate_url,
        })
    }

    pub fn generate_url(&self) -> &Url {
        &self.generate_url
    }

    pub async fn generate(&self, animal: &str) -> ClientResult<GenerationResult> {
        let res = self
            .client
            .post(self.generate_url.clone())
            .json(&QuizRequest {
                animal: animal.to_string(),
            })
            .send()
            .await?;

        let status = res.status();
        let bytes = res.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .map(|e| e.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            tracing::warn!(status = status.as_u16(), %message, "Generation request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> ApiClient {
        ApiClient::new(
            &ClientConfig {
                base_url: base.to_string(),
            },
            Client::new(),
        )
        .unwrap()
    }

    #[test]
    fn appends_api_path_to_base() {
        assert_eq!(
            client_for("http://localhost:3001/").generate_url().as_str(),
            "http://localhost:3001/api/generate"
        );
    }

    #[test]
    fn base_without_trailing_slash_keeps_its_path() {
        assert_eq!(
            client_for("https://quiz.example.org/backend").generate_url().as_str(),
            "https://quiz.example.org/backend/api/generate"
        );
    }

    #[test]
    fn rejects_garbage_base() {
        let result = ApiClient::new(
            &ClientConfig {
                base_url: "not a url".to_string(),
            },
            Client::new(),
        );
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
