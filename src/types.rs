//! Data model for the OpenAI chat-completion and moderation APIs.
//!
//! These types serialize/deserialize directly to/from the JSON payloads
//! expected by any OpenAI-compatible endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Message roles
// ---------------------------------------------------------------------------

/// Conversation participant role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction message.
    System,
    /// End-user message.
    User,
    /// Assistant/model message.
    Assistant,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A single message in the conversation sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Author role for this conversation turn.
    pub role: Role,
    /// Text content. The provider may return null content on some choices.
    pub content: Option<String>,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Chat completion request / response
// ---------------------------------------------------------------------------

/// Default sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default output token cap sent with every request.
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Request body for POST /chat/completions.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier used for request routing.
    pub model: String,
    /// Ordered conversation history sent to the model.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum number of output tokens.
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Build a request with the default temperature and token cap.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the output token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Response body from POST /chat/completions.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Provider response id.
    pub id: String,
    /// Ranked response choices.
    pub choices: Vec<Choice>,
    /// Token usage metadata. Optional on the wire.
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A single choice in the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Choice index in the provider response.
    pub index: u32,
    /// Assistant message payload for this choice.
    pub message: Message,
    /// Provider stop reason (`stop`, `length`, etc.).
    pub finish_reason: Option<String>,
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    /// Input tokens consumed by the request.
    pub prompt_tokens: u64,
    /// Output tokens generated by the model.
    pub completion_tokens: u64,
    /// Total tokens billed for the request.
    pub total_tokens: u64,
}

// ---------------------------------------------------------------------------
// Moderation request / response
// ---------------------------------------------------------------------------

/// Default moderation model.
pub const DEFAULT_MODERATION_MODEL: &str = "text-moderation-latest";

/// Request body for POST /moderations.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationRequest {
    /// Text to classify.
    pub input: String,
    /// Moderation model identifier.
    pub model: String,
}

impl ModerationRequest {
    /// Build a request, defaulting to [`DEFAULT_MODERATION_MODEL`].
    pub fn new(input: impl Into<String>, model: Option<&str>) -> Self {
        Self {
            input: input.into(),
            model: model.unwrap_or(DEFAULT_MODERATION_MODEL).to_string(),
        }
    }
}

/// Response body from POST /moderations.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationResponse {
    /// Provider response id.
    pub id: String,
    /// Moderation model that produced the classification.
    pub model: String,
    /// One result entry per input.
    pub results: Vec<ModerationResult>,
}

/// Classification for a single moderation input.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationResult {
    /// Whether the input violates content policy.
    pub flagged: bool,
    /// Per-category boolean verdicts.
    #[serde(default)]
    pub categories: BTreeMap<String, bool>,
    /// Per-category confidence scores.
    #[serde(default)]
    pub category_scores: BTreeMap<String, f64>,
}
