//! The search endpoint: prompt the model with the caller's statement,
//! extract the JSON block from its answer, and relay it.

use crate::services::extract::extract_json_span;
use crate::services::prompt::build_prompt;
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Search request body.
///
/// A missing `text` field is treated as the empty statement.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub text: String,
}

/// Errors surfaced by the search endpoint.
///
/// All map to HTTP 500; the body distinguishes them only through the
/// message and the attached raw text.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not extract JSON from the model response")]
    Extraction { raw_response: String },

    #[error("model response was not valid JSON")]
    Parse { raw_json: String },

    #[error("upstream model call failed: {0}")]
    Upstream(#[from] ProviderError),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = match &self {
            SearchError::Extraction { raw_response } => json!({
                "error": self.to_string(),
                "raw_response": raw_response,
            }),
            SearchError::Parse { raw_json } => json!({
                "error": self.to_string(),
                "raw_json": raw_json,
            }),
            SearchError::Upstream(_) => json!({
                "error": self.to_string(),
            }),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Handle a search statement.
///
/// POST /api/search
///
/// The parsed object is returned verbatim: no check that `verse` or
/// `prayer` are present, or that the model didn't add keys of its own.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Value>, SearchError> {
    let prompt = build_prompt(&req.text);

    let response_text = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Model call failed");
        e
    })?;

    tracing::info!(raw = %response_text, "Model response received");

    let span = extract_json_span(&response_text).ok_or_else(|| {
        tracing::warn!("No JSON span found in model response");
        SearchError::Extraction {
            raw_response: response_text.clone(),
        }
    })?;

    match serde_json::from_str::<Value>(span) {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::warn!(error = %e, "Extracted span is not valid JSON");
            Err(SearchError::Parse {
                raw_json: span.to_string(),
            })
        }
    }
}
