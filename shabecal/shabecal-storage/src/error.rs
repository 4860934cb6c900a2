use shabecal_auth::AuthError;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage access token unavailable: {0}")]
    Auth(#[from] AuthError),

    #[error("GCS {operation} failed ({status}): {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("GCS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid GCS url: {0}")]
    InvalidUrl(String),
}
