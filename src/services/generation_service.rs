use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::quiz::GenerationResult;
use crate::services::gemini_service::{GeminiProvider, TextProvider};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

const PROMPT_TEMPLATE: &str = r#"You are a zoologist and expert quiz master. Generate detailed and educational content about the animal: {animal}.

Your output should be strictly in JSON format, with no extra text, code blocks, or explanations.

{
  "info": {
    "scientific_name": "",
    "classification": {
      "kingdom": "",
      "phylum": "",
      "class": "",
      "order": "",
      "family": "",
      "genus": ""
    },
    "habitat": "",
    "geographical_distribution": "",
    "diet": "",
    "average_lifespan": "",
    "physical_characteristics": "",
    "behavior_and_social_structure": "",
    "reproduction_and_offspring": "",
    "conservation_status": "",
    "interesting_facts": ["", "", ""]
  },
  "quiz": [
    {
      "question": "",
      "options": ["", "", "", ""],
      "answer": ""
    }
  ]
}

Requirements:
- The "info" section should give enough detailed information for students to learn about this animal.
- Generate exactly 10 quiz questions related to the animal (biology, facts, habits, conservation, etc.).
- Every question is multiple-choice with exactly 4 distinct options and only one correct answer, copied verbatim into the "answer" field.
- Make sure JSON is valid and strictly follows the given structure.
"#;

pub fn build_prompt(animal: &str) -> String {
    PROMPT_TEMPLATE.replacen("{animal}", animal, 1)
}

/// Removes markdown fence markers (tagged or bare) anywhere in the text.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_generation(raw: &str) -> Result<GenerationResult> {
    let clean = strip_code_fences(raw);
    let result: GenerationResult = serde_json::from_str(&clean)
        .map_err(|e| Error::MalformedResponse(format!("invalid JSON: {}", e)))?;
    result.validate()?;

    for (idx, q) in result.quiz.iter().enumerate() {
        if !q.answer_in_options() {
            tracing::warn!(question = idx + 1, answer = %q.answer, "Answer is not among the options");
        }
    }
    Ok(result)
}

#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn TextProvider>,
    models: Vec<String>,
    fallback_delay: Duration,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn TextProvider>, models: Vec<String>, fallback_delay: Duration) -> Self {
        Self {
            provider,
            models,
            fallback_delay,
        }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        let provider = GeminiProvider::new(
            config.gemini_api_key.clone(),
            config.gemini_base_url.clone(),
            client,
        )
        .with_timeout(config.request_timeout());
        Self::new(
            Arc::new(provider),
            config.model_fallbacks.clone(),
            config.fallback_delay(),
        )
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub async fn generate(&self, animal: &str) -> Result<GenerationResult> {
        let prompt = build_prompt(animal);
        let raw = self.generate_with_fallback(&prompt).await?;
        parse_generation(&raw).map_err(|e| {
            tracing::error!(animal, error = %e, "Model output could not be parsed");
            e
        })
    }

    /// Tries each model in order and returns the first successful text.
    /// Every failure, the last one included, is followed by `fallback_delay`.
    pub async fn generate_with_fallback(&self, prompt: &str) -> Result<String> {
        let mut last_error: Option<Error> = None;

        for model in &self.models {
            tracing::info!(model = %model, "Trying model");
            match self.provider.generate(model, prompt).await {
                Ok(text) => {
                    tracing::info!(model = %model, "Model succeeded");
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!(model = %model, error = %e, "Model failed");
                    last_error = Some(e);
                    tokio::time::sleep(self.fallback_delay).await;
                }
            }
        }

        let last = last_error.unwrap_or_else(|| Error::Provider("no models configured".to_string()));
        tracing::error!(error = %last, "All models failed");
        Err(Error::ProviderUnavailable(Box::new(last)))
    }
}
