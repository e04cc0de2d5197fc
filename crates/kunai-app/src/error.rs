use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
