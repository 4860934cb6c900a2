use std::time::Duration;

use async_trait::async_trait;

use crate::contracts::{TokenEndpointResponse, TokenRequest};
use crate::error::{AuthError, AuthResult};

/// Delivers a token request and returns the endpoint's raw answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenTransport: Send + Sync {
    async fn post_form(&self, endpoint: &str, request: &TokenRequest) -> AuthResult<TokenEndpointResponse>;
}

#[derive(Clone, Debug, Default)]
pub struct ReqwestTokenTransport {
    client: reqwest::Client,
}

impl ReqwestTokenTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> AuthResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Network(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TokenTransport for ReqwestTokenTransport {
    async fn post_form(&self, endpoint: &str, request: &TokenRequest) -> AuthResult<TokenEndpointResponse> {
        let res = self
            .client
            .post(endpoint)
            .form(request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(TokenEndpointResponse { status, body })
    }
}
