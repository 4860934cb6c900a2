use serde::{Deserialize, Serialize};

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Form body posted to the token endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TokenRequest {
    pub grant_type: String,
    pub assertion: String,
}

impl TokenRequest {
    pub fn jwt_bearer(assertion: &str) -> Self {
        Self {
            grant_type: JWT_BEARER_GRANT_TYPE.to_string(),
            assertion: assertion.to_string(),
        }
    }
}

/// Raw reply from the token endpoint, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEndpointResponse {
    pub status: u16,
    pub body: String,
}

impl TokenEndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleAccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: u64,
}
