use animal_quiz::{
    build_router,
    config::{get_config, init_config},
    utils::telemetry::init_tracing,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");
    init_config()?;
    let config = get_config()?;

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; every generation request will fail");
    }

    let app_state = AppState::new(config)?;
    info!(
        models = ?app_state.generation_service.models(),
        delay_ms = config.fallback_delay_ms,
        "Model fallback chain loaded"
    );

    let app = build_router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Backend running on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
