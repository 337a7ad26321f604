//! Courier — a one-shot client for OpenAI-compatible chat and moderation APIs.
//!
//! This crate does three small things and nothing else:
//! - resolve an API key (explicit argument → `OPENAI_API_KEY` → config file),
//! - issue a single `/chat/completions` request and normalize the result to
//!   (content, token usage),
//! - issue a single `/moderations` request and normalize the result to a
//!   tagged verdict.
//!
//! There is no retry, streaming, conversation state, or caching. Every
//! failure is a typed error; nothing is swallowed or reported through stdout.
//!
//! # Quick start
//!
//! ```no_run
//! use courier::api::ApiClient;
//! use courier::config::resolve_api_key;
//! use courier::types::{ChatRequest, Message};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let key = resolve_api_key(None, None)?;
//! let client = ApiClient::new(key);
//!
//! let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("Hello!")]);
//! let completion = courier::completion::complete(&client, request).await?;
//! println!("{} ({} tokens)", completion.content, completion.usage.total_tokens);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod completion;
pub mod config;
pub mod error;
pub mod moderation;
#[cfg(test)]
pub mod testsupport;
pub mod types;
