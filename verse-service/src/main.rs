use verse_service::config::VerseConfig;
use verse_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use verse_service::services::providers::TextProvider;
use verse_service::startup::Application;

use service_core::observability::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("verse-service", "info");

    let config = VerseConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let gemini_config = GeminiConfig {
        api_key: config.google.api_key.clone(),
        model: config.models.text_model.clone(),
    };
    let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

    tracing::info!(
        model = %config.models.text_model,
        "Initialized Gemini text provider"
    );

    let app = Application::build(config, text_provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("verse-service listening on port {}", app.port());

    app.run_until_stopped().await
}
