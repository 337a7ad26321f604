//! Client handle for OpenAI-compatible model APIs.

use super::{completions, moderations, ModelClient};
use crate::config::ApiKey;
use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse, ModerationRequest, ModerationResponse};
use async_trait::async_trait;

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Reusable client handle bound to one resolved API key.
///
/// Construction performs no network validation; a key only proves itself on
/// the first request. The handle carries no per-call mutable state, so it is
/// safe to reuse across sequential calls. No request timeout is configured;
/// the transport default bounds a hung call.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl ApiClient {
    /// Build a client against the default OpenAI endpoint.
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a non-default OpenAI-compatible endpoint.
    pub fn with_base_url(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Endpoint this client dispatches against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ModelClient for ApiClient {
    /// Send one `/chat/completions` request.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        completions::request(&self.http, &self.base_url, request, self.api_key.expose()).await
    }

    /// Send one `/moderations` request.
    async fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, ApiError> {
        moderations::request(&self.http, &self.base_url, request, self.api_key.expose()).await
    }
}
