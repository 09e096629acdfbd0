use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{ApiErrorDetail, RequestParams};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonResponse {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

pub fn encode_json_body(params: &RequestParams) -> Result<String, TransportError> {
    Ok(serde_json::to_string(params)?)
}

/// Decode a 2xx body. An empty body (e.g. `204 No Content`) is decoded as JSON `null`.
pub fn decode_json_response<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode the `errors` array of a non-2xx body; anything else yields an empty list.
pub fn decode_error_response(body: &str) -> Vec<ApiErrorDetail> {
    serde_json::from_str::<ErrorJsonResponse>(body)
        .map(|parsed| parsed.errors)
        .unwrap_or_default()
}
