//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

enum MockReply {
    Text(String),
    Failure(String),
}

/// Mock text provider returning a canned response or a forced failure.
///
/// Records the last prompt it was asked about so tests can assert on
/// prompt construction.
pub struct MockTextProvider {
    reply: MockReply,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    /// A provider that answers every prompt with `text`.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Text(text.into()),
            last_prompt: Mutex::new(None),
        }
    }

    /// A provider whose calls fail with a network error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Failure(message.into()),
            last_prompt: Mutex::new(None),
        }
    }

    /// The prompt from the most recent `generate` call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Failure(message) => Err(ProviderError::NetworkError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.reply {
            MockReply::Text(_) => Ok(()),
            MockReply::Failure(message) => Err(ProviderError::NetworkError(message.clone())),
        }
    }
}
