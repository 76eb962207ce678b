use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Model used when `GEMINI_MODEL` is not set.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct VerseConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub text_model: String,
}

impl VerseConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(VerseConfig {
            common,
            google: GoogleConfig {
                // An unset key stays empty; outbound calls then fail with
                // an authentication error from the API.
                api_key: env::var("GEMINI_API_KEY")
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
            },
            models: ModelConfig {
                text_model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            },
        })
    }
}
