//! `/moderations` protocol request helper.

use crate::error::ApiError;
use crate::types::{ModerationRequest, ModerationResponse};

/// Send one `/moderations` request and parse the classification payload.
pub(super) async fn request(
    http: &reqwest::Client,
    base_url: &str,
    request: &ModerationRequest,
    api_key: &str,
) -> Result<ModerationResponse, ApiError> {
    let url = format!("{base_url}/moderations");
    tracing::debug!(model = %request.model, "dispatching moderation request");

    let response = http.post(&url).bearer_auth(api_key).json(request).send().await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "moderation request failed");
        return Err(ApiError::Status { code: status, body });
    }

    response
        .json::<ModerationResponse>()
        .await
        .map_err(ApiError::from)
}
