use thiserror::Error;

/// Failures while calling the external advisory provider.
///
/// These never convert into HTTP responses directly: the chat endpoint
/// degrades to a canned reply and the analysis endpoint returns a generic
/// failure message, both after logging the underlying cause.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Transport failure, timeout, or non-success status from the provider.
    #[error("advisor request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The provider answered but produced no usable text candidate.
    #[error("advisor returned no usable candidate")]
    EmptyResponse,

    /// The structured-analysis response was not valid JSON for the schema.
    #[error("advisor returned malformed analysis JSON: {0}")]
    MalformedAnalysis(#[from] serde_json::Error),
}
