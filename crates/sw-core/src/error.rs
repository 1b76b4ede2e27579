use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwError {
    #[error("Invalid configuration: {param} {reason}")]
    InvalidConfig { param: &'static str, reason: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwError {
    pub fn invalid_config(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { param, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, SwError>;
