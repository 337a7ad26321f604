//! Moderation check: one classification request, normalized to a verdict.

use crate::api::ModelClient;
use crate::error::ApiError;
use crate::types::{ModerationRequest, ModerationResponse};

/// Tagged classification verdict, derived from the first result entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The input violates content policy.
    Flagged,
    /// The input passed moderation.
    Clean,
}

/// Verdict plus the full wire response, so callers keep category detail.
#[derive(Debug, Clone)]
pub struct ModerationOutcome {
    pub verdict: Verdict,
    pub response: ModerationResponse,
}

impl ModerationOutcome {
    /// Whether the checked text was flagged.
    pub fn is_flagged(&self) -> bool {
        self.verdict == Verdict::Flagged
    }
}

/// Send one moderation request and classify `text`.
///
/// `model` defaults to `text-moderation-latest`. The verdict comes from the
/// first result entry; a response with no results is
/// [`ApiError::EmptyResponse`]. Failures surface as typed errors rather than
/// printed diagnostics, so callers can branch on the outcome.
pub async fn check(
    client: &dyn ModelClient,
    text: &str,
    model: Option<&str>,
) -> Result<ModerationOutcome, ApiError> {
    let request = ModerationRequest::new(text, model);
    let response = client.moderate(&request).await?;

    let first = response.results.first().ok_or(ApiError::EmptyResponse)?;
    let verdict = if first.flagged {
        Verdict::Flagged
    } else {
        Verdict::Clean
    };
    tracing::debug!(model = %response.model, flagged = first.flagged, "moderation check completed");

    Ok(ModerationOutcome { verdict, response })
}
