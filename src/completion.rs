//! Completion invoker: one chat request, normalized to content plus usage.

use crate::api::ModelClient;
use crate::error::ApiError;
use crate::types::{ChatRequest, Usage};

/// Normalized result of one successful chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// First choice's message content, verbatim.
    pub content: String,
    /// Token accounting copied from the provider response. Zeroed when the
    /// provider omits the usage block.
    pub usage: Usage,
}

/// Send one chat completion request and extract the first choice.
///
/// The content is returned verbatim with no post-processing. A response with
/// no choices, or whose first choice carries null content, is
/// [`ApiError::EmptyResponse`]. Transport and provider failures surface as
/// typed errors; nothing is swallowed.
pub async fn complete(
    client: &dyn ModelClient,
    request: ChatRequest,
) -> Result<Completion, ApiError> {
    let response = client.chat(&request).await?;

    let usage = response.usage.unwrap_or_default();
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ApiError::EmptyResponse)?;

    tracing::debug!(
        prompt_tokens = usage.prompt_tokens,
        completion_tokens = usage.completion_tokens,
        total_tokens = usage.total_tokens,
        "chat completion succeeded"
    );

    Ok(Completion { content, usage })
}
