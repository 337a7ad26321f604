//! HTTP client for OpenAI-compatible APIs.
//!
//! The API layer is split into cohesive protocol modules:
//! - `completions`: `/chat/completions`
//! - `moderations`: `/moderations`
//! - `client`: shared dispatch orchestration

use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse, ModerationRequest, ModerationResponse};
use async_trait::async_trait;

mod client;
mod completions;
mod moderations;

pub use client::{ApiClient, DEFAULT_BASE_URL};

/// Minimal provider API interface used by the invokers.
///
/// This trait lets tests provide deterministic mock responses without network
/// calls while the production path uses [`ApiClient`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    async fn moderate(&self, request: &ModerationRequest)
        -> Result<ModerationResponse, ApiError>;
}
