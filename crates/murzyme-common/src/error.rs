use thiserror::Error;

#[derive(Debug, Error)]
pub enum MurzymeError {
    #[error("Invalid form field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MurzymeError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField { field: field.into(), reason: reason.into() }
    }

    /// True when the error was caused by caller-supplied input rather than the host.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidField { .. } | Self::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, MurzymeError>;
