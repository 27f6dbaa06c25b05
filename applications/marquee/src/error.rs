/// Application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend error: {0}")]
    Client(#[from] marquee_client::ClientError),

    #[error(transparent)]
    Core(#[from] marquee_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
