//! Error types for the bootstrap binary

/// Errors surfaced while provisioning the datastore
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
