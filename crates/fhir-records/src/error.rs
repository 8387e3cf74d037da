//! Error types for record retrieval

/// Errors from patient record retrieval.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("record endpoint returned {status}")]
    Status { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid record response: {0}")]
    InvalidResponse(String),
}

/// Result alias for record operations.
pub type Result<T> = std::result::Result<T, Error>;
