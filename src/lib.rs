pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::generation_service::GenerationService;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use reqwest::Client;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub generation_service: GenerationService,
}

impl AppState {
    pub fn new(config: &Config) -> error::Result<Self> {
        let http_client = Client::builder().build()?;
        let generation_service = GenerationService::from_config(config, http_client);
        Ok(Self::with_service(generation_service))
    }

    pub fn with_service(generation_service: GenerationService) -> Self {
        Self { generation_service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/home", get(routes::health::home))
        .route("/api/generate", post(routes::generate::generate))
        .with_state(state)
        .layer(middleware::cors::quiz_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(64 * 1024))
}
