use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("confirm endpoint: {0}")]
    Endpoint(String),

    #[error("config: {0}")]
    Config(String),
}
