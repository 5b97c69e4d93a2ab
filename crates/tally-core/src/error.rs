//! Error types for the Tally client

/// Errors that can occur in the Tally client
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API error: status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, TallyError>;
