//! Error types for token acquisition

/// Errors from token acquisition.
///
/// `AuthenticationFailed` carries the observed HTTP status so callers can
/// branch on it programmatically instead of parsing printed output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication failed: token endpoint returned {status}: {body}")]
    AuthenticationFailed { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}

/// Result alias for token operations.
pub type Result<T> = std::result::Result<T, Error>;
