//! `/chat/completions` protocol request helper.

use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse};

/// Send one `/chat/completions` request and parse the chat response payload.
pub(super) async fn request(
    http: &reqwest::Client,
    base_url: &str,
    request: &ChatRequest,
    api_key: &str,
) -> Result<ChatResponse, ApiError> {
    let url = format!("{base_url}/chat/completions");
    tracing::debug!(model = %request.model, "dispatching chat completion request");

    let response = http.post(&url).bearer_auth(api_key).json(request).send().await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "chat completion request failed");
        return Err(ApiError::Status { code: status, body });
    }

    response.json::<ChatResponse>().await.map_err(ApiError::from)
}
