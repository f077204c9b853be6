#![allow(dead_code)]

use animal_quiz::error::{Error, Result};
use animal_quiz::services::gemini_service::TextProvider;
use animal_quiz::services::generation_service::GenerationService;
use animal_quiz::{build_router, AppState};
use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value as JsonValue};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const MODELS: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-2.0-flash",
];

/// Fails for the first `failures` calls, then answers with `reply`.
pub struct StubProvider {
    failures: usize,
    reply: String,
    pub calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(failures: usize, reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            failures,
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl TextProvider for StubProvider {
    async fn generate(&self, model: &str, _prompt: &str) -> Result<String> {
        let mut calls = self.calls.lock().expect("calls mutex poisoned");
        calls.push(model.to_string());
        if calls.len() <= self.failures {
            return Err(Error::Provider(format!("{} returned 503", model)));
        }
        Ok(self.reply.clone())
    }
}

pub fn app_with(provider: Arc<StubProvider>) -> Router {
    let models = MODELS.iter().map(|m| m.to_string()).collect();
    let service = GenerationService::new(provider, models, Duration::from_millis(5));
    build_router(AppState::with_service(service))
}

pub fn elephant_payload() -> JsonValue {
    let quiz: Vec<JsonValue> = (1..=10)
        .map(|i| {
            json!({
                "question": format!("Elephant question {}", i),
                "options": [
                    format!("correct {}", i),
                    format!("wrong {}a", i),
                    format!("wrong {}b", i),
                    format!("wrong {}c", i)
                ],
                "answer": format!("correct {}", i)
            })
        })
        .collect();

    json!({
        "info": {
            "scientific_name": "Loxodonta africana",
            "classification": {
                "kingdom": "Animalia",
                "phylum": "Chordata",
                "class": "Mammalia",
                "order": "Proboscidea",
                "family": "Elephantidae",
                "genus": "Loxodonta"
            },
            "habitat": "Savannas, forests and deserts",
            "geographical_distribution": "Sub-Saharan Africa",
            "diet": "Grasses, bark, fruit",
            "average_lifespan": "60-70 years",
            "physical_characteristics": "Large ears, trunk, tusks",
            "behavior_and_social_structure": "Matriarchal family herds",
            "reproduction_and_offspring": "Single calf after ~22 months",
            "conservation_status": "Endangered",
            "interesting_facts": [
                "Elephants can recognise themselves in a mirror.",
                "They communicate with infrasound.",
                "A trunk has around 40,000 muscles."
            ]
        },
        "quiz": quiz
    })
}
