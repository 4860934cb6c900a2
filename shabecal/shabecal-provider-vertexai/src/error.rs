use shabecal_auth::AuthError;
use thiserror::Error;

pub type VertexResult<T> = Result<T, VertexError>;

#[derive(Debug, Error)]
pub enum VertexError {
    #[error("Vertex AI access token unavailable: {0}")]
    Auth(#[from] AuthError),

    #[error("Vertex AI error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Vertex AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Vertex AI response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vertex AI returned no summary text")]
    EmptySummary,
}
