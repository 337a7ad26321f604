//! API key resolution.
//!
//! Precedence implements the crate's credential contract:
//! explicit argument > `OPENAI_API_KEY` > config file.
//!
//! The config file is TOML with the key nested under
//! `[api_credentials.openai]`:
//!
//! ```toml
//! [api_credentials.openai]
//! api_key = "sk-..."
//! ```
//!
//! The core resolver is parameterized over file-read and env-lookup closures
//! so tests never touch the real process environment or working directory.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable consulted when no explicit key is given.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Default config file path, relative to the process working directory.
///
/// Callers that want to avoid cwd coupling should pass an absolute path to
/// [`resolve_api_key`] instead of relying on this.
pub const DEFAULT_CONFIG_PATH: &str = "courier.toml";

// ---------------------------------------------------------------------------
// ApiKey
// ---------------------------------------------------------------------------

/// An opaque API credential.
///
/// The inner secret is only reachable through [`ApiKey::expose`]; `Debug`
/// output is redacted so the key cannot leak through logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a non-empty secret string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Borrow the secret for constructing an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// ---------------------------------------------------------------------------
// Config file shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api_credentials: ApiCredentials,
}

#[derive(Debug, Default, Deserialize)]
struct ApiCredentials {
    #[serde(default)]
    openai: OpenAiCredentials,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAiCredentials {
    api_key: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve an API key from the explicit argument, the environment, or the
/// config file, in that order.
///
/// `config_path` overrides [`DEFAULT_CONFIG_PATH`]. Empty or whitespace-only
/// values at any tier are treated as absent. Returns
/// [`ConfigError::CredentialNotFound`] when no tier yields a usable key.
pub fn resolve_api_key(
    explicit: Option<&str>,
    config_path: Option<&Path>,
) -> Result<ApiKey, ConfigError> {
    resolve_api_key_from_sources(
        explicit,
        config_path,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
    )
}

pub(crate) fn resolve_api_key_from_sources<FRead, FEnv>(
    explicit: Option<&str>,
    config_path: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
) -> Result<ApiKey, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
{
    // 1) Explicit keys always win; no further lookup happens.
    if let Some(key) = explicit.map(str::trim).filter(|key| !key.is_empty()) {
        return Ok(ApiKey::new(key));
    }

    // 2) Environment variable.
    if let Some(key) = env_lookup(API_KEY_ENV_VAR) {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(ApiKey::new(trimmed));
        }
    }

    // 3) Config file. A missing file is the same outcome as a missing key;
    //    any other read failure or a parse failure is surfaced as typed.
    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
    let text = match read_file(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file not found");
            return Err(ConfigError::CredentialNotFound);
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };
    let parsed: FileConfig = toml::from_str(&text)?;

    parsed
        .api_credentials
        .openai
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(ApiKey::new)
        .ok_or(ConfigError::CredentialNotFound)
}
