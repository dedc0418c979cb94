//! WaterProofFish chat server

use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waterproof_chat::api::{create_router, AppState};
use waterproof_chat::config::Config;
use waterproof_chat::llm::{GeminiService, LlmService, LoggingService};
use waterproof_chat::session::{Personality, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waterproof_chat=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let config = Config::from_env()?;
    tracing::info!(config = ?config, "Configuration loaded");

    // Model client
    let gemini = GeminiService::new(
        config.model.api_key.clone(),
        &config.model.model,
        config.model.base_url.as_deref(),
    )?;
    let service: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(gemini)));

    // First session; failing here is fatal
    let session = Session::initialize(Personality::default(), service).await?;
    tracing::info!(
        conversation = %session.conversation().id(),
        personality = %session.personality(),
        "Chat session initialized"
    );

    let state = AppState::new(session);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    tracing::info!("WaterProofFish chat listening on http://{}", config.listen);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
