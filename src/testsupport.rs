//! Shared test fixtures: a temp-dir helper for config-file tests and a
//! deterministic [`ModelClient`] stub for invoker tests.
//!
//! Kept std-only so unit tests need no extra dependencies.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::api::ModelClient;
use crate::error::ApiError;
use crate::types::{
    ChatRequest, ChatResponse, Choice, Message, ModerationRequest, ModerationResponse,
    ModerationResult, Role, Usage,
};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("courier-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

// ---------------------------------------------------------------------------
// StubClient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum ChatStub {
    Reply {
        content: Option<String>,
        usage: Option<Usage>,
    },
    Empty,
}

#[derive(Debug, Clone)]
enum ModerationStub {
    Reply { flagged: bool },
    Empty,
}

/// Deterministic in-process [`ModelClient`] implementation.
///
/// Each call rebuilds its response from the configured stub, so repeated
/// calls observe identical payloads and no hidden state accumulates.
#[derive(Debug)]
pub struct StubClient {
    chat: ChatStub,
    moderation: ModerationStub,
    failure: Option<(u16, String)>,
    last_moderation_model: Mutex<Option<String>>,
}

impl StubClient {
    fn base(chat: ChatStub, moderation: ModerationStub) -> Self {
        Self {
            chat,
            moderation,
            failure: None,
            last_moderation_model: Mutex::new(None),
        }
    }

    /// Stub whose chat endpoint replies with `content` and the given
    /// `(prompt, completion, total)` token counts.
    pub fn with_chat_reply(content: &str, usage: (u64, u64, u64)) -> Self {
        Self::base(
            ChatStub::Reply {
                content: Some(content.to_string()),
                usage: Some(Usage {
                    prompt_tokens: usage.0,
                    completion_tokens: usage.1,
                    total_tokens: usage.2,
                }),
            },
            ModerationStub::Reply { flagged: false },
        )
    }

    /// Stub whose chat endpoint replies with no choices at all.
    pub fn with_empty_chat_reply() -> Self {
        Self::base(ChatStub::Empty, ModerationStub::Reply { flagged: false })
    }

    /// Stub whose chat endpoint replies with a choice carrying null content.
    pub fn with_null_content_reply() -> Self {
        Self::base(
            ChatStub::Reply {
                content: None,
                usage: None,
            },
            ModerationStub::Reply { flagged: false },
        )
    }

    /// Stub whose moderation endpoint replies with one result entry.
    pub fn with_moderation_reply(flagged: bool) -> Self {
        Self::base(
            ChatStub::Reply {
                content: Some("ok".into()),
                usage: None,
            },
            ModerationStub::Reply { flagged },
        )
    }

    /// Stub whose moderation endpoint replies with an empty result list.
    pub fn with_empty_moderation_reply() -> Self {
        Self::base(
            ChatStub::Reply {
                content: Some("ok".into()),
                usage: None,
            },
            ModerationStub::Empty,
        )
    }

    /// Stub for which every endpoint fails with the given status.
    pub fn failing(code: u16, body: &str) -> Self {
        let mut stub = Self::base(ChatStub::Empty, ModerationStub::Empty);
        stub.failure = Some((code, body.to_string()));
        stub
    }

    /// Remove the usage block from chat replies.
    pub fn drop_usage(&mut self) {
        if let ChatStub::Reply { usage, .. } = &mut self.chat {
            *usage = None;
        }
    }

    /// Moderation model id seen on the most recent `moderate` call.
    pub fn last_moderation_model(&self) -> Option<String> {
        self.last_moderation_model
            .lock()
            .expect("stub mutex poisoned")
            .clone()
    }

    fn failure_error(&self) -> Option<ApiError> {
        self.failure.as_ref().map(|(code, body)| ApiError::Status {
            code: *code,
            body: body.clone(),
        })
    }
}

#[async_trait]
impl ModelClient for StubClient {
    async fn chat(&self, _request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        if let Some(err) = self.failure_error() {
            return Err(err);
        }
        let (choices, usage) = match &self.chat {
            ChatStub::Empty => (Vec::new(), None),
            ChatStub::Reply { content, usage } => (
                vec![Choice {
                    index: 0,
                    message: Message {
                        role: Role::Assistant,
                        content: content.clone(),
                    },
                    finish_reason: Some("stop".to_string()),
                }],
                usage.clone(),
            ),
        };
        Ok(ChatResponse {
            id: "chatcmpl-stub".to_string(),
            choices,
            usage,
        })
    }

    async fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, ApiError> {
        *self
            .last_moderation_model
            .lock()
            .expect("stub mutex poisoned") = Some(request.model.clone());
        if let Some(err) = self.failure_error() {
            return Err(err);
        }
        let results = match &self.moderation {
            ModerationStub::Empty => Vec::new(),
            ModerationStub::Reply { flagged } => vec![ModerationResult {
                flagged: *flagged,
                categories: [("hate".to_string(), *flagged)].into_iter().collect(),
                category_scores: [("hate".to_string(), if *flagged { 0.97 } else { 0.01 })]
                    .into_iter()
                    .collect(),
            }],
        };
        Ok(ModerationResponse {
            id: "modr-stub".to_string(),
            model: request.model.clone(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let dir = TestTempDir::new("fixture");
        let file = dir.write_text("sub/key.toml", "x = 1\n");
        assert!(file.starts_with(dir.path()));
        assert_eq!(fs::read_to_string(&file).unwrap(), "x = 1\n");
    }
}
