use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// A Google service account key as downloaded from the cloud console.
///
/// Construct it through [`ServiceAccountCredential::from_json`] so the
/// required fields are checked once, when the key is loaded.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceAccountCredential {
    #[serde(rename = "type", default)]
    pub account_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountCredential {
    pub fn from_json(raw: &[u8]) -> AuthResult<Self> {
        let mut credential: ServiceAccountCredential = serde_json::from_slice(raw)
            .map_err(|e| AuthError::CredentialValidation(format!("key file is not valid JSON: {e}")))?;
        if credential.token_uri.trim().is_empty() {
            credential.token_uri = default_token_uri();
        }
        credential.validate()?;
        Ok(credential)
    }

    pub fn validate(&self) -> AuthResult<()> {
        let missing: Vec<&str> = [
            ("project_id", &self.project_id),
            ("private_key", &self.private_key),
            ("client_email", &self.client_email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthError::CredentialValidation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}

impl fmt::Debug for ServiceAccountCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredential")
            .field("account_type", &self.account_type)
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("client_id", &self.client_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
