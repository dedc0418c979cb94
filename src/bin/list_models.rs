//! Print the models available to the configured API key

use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waterproof_chat::config::ModelConfig;
use waterproof_chat::llm::{GeminiService, LlmError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waterproof_chat=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let show_methods = std::env::args().skip(1).any(|arg| arg == "--methods");

    match run(show_methods).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(show_methods: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ModelConfig::from_env()?;
    let service = GeminiService::new(config.api_key, &config.model, config.base_url.as_deref())?;

    let models = service.list_models().await.inspect_err(|e: &LlmError| {
        tracing::error!(kind = ?e.kind, error = %e, "Model listing failed");
    })?;

    println!("Available models:");
    for model in models {
        println!("- {}", model.name);
        if show_methods {
            println!(
                "   Supported methods: {}",
                model.supported_generation_methods.join(", ")
            );
        }
    }
    Ok(())
}
