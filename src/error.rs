use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Completion service returned no usable text: {0}")]
    EmptyResponse(String),

    #[error("Report rendering failed: {0}")]
    RenderFailure(String),

    #[error("Invalid transaction category '{0}': expected 'Income' or 'Expense'")]
    InvalidCategory(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
