//! Error types for Mail Assist.
//!
//! The analysis pipeline itself is total and never returns these; they cover
//! the edges around it (configuration, lexicon files, email datasets).

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading or indexing a set of emails.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid email dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate email id: {0}")]
    DuplicateId(String),
}
