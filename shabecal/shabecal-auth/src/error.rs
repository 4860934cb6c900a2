use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

/// Every way acquiring a bearer token can fail.
///
/// Variants carry plain strings so a remembered failure can be cloned and
/// handed back to later callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The key JSON is unreadable or lacks a required field.
    #[error("invalid service account key: {0}")]
    CredentialValidation(String),

    /// The private key is not usable PKCS#8 RSA material.
    #[error("failed to import private key: {0}")]
    KeyImport(String),

    /// The token endpoint answered with a non-2xx status.
    #[error("failed to obtain access token ({status}): {body}")]
    TokenExchange { status: u16, body: String },

    /// No response was received from the token endpoint.
    #[error("token endpoint request failed: {0}")]
    Network(String),

    /// The credential source could not be read.
    #[error("credential configuration error: {0}")]
    Configuration(String),

    /// The token endpoint answered 2xx with a body we cannot use.
    #[error("malformed token response: {0}")]
    InvalidTokenResponse(String),
}

impl AuthError {
    /// HTTP status reported by the token endpoint, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::TokenExchange { status, .. } => Some(*status),
            _ => None,
        }
    }
}
