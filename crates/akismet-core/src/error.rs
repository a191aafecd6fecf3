//! Error taxonomy shared by every Akismet operation

/// Every way an Akismet call can fail. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AkismetError {
    /// The client has no API key configured.
    #[error("api_key must be set on the client before calling any API methods")]
    MissingApiKey,

    /// A required parameter is absent and has no fallback.
    #[error("{0} is a required parameter")]
    MissingParameter(String),

    /// Keys outside the allowed set were supplied (sorted).
    #[error("the following unrecognised parameters were supplied: {}", .0.join(", "))]
    ExtraParameters(Vec<String>),

    /// The service answered with an unexpected body or status.
    #[error("Akismet server returned an error: {0}")]
    Server(String),

    /// A library invariant was violated. Indicates a bug here, not bad input.
    #[error("internal client error: {0}")]
    Internal(String),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Transport(String),
}
