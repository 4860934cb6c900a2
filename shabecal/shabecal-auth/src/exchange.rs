//! Two-legged OAuth2 JWT-bearer grant.

use crate::assertion::SignedAssertion;
use crate::contracts::{GoogleAccessToken, TokenRequest};
use crate::error::{AuthError, AuthResult};
use crate::transport::TokenTransport;

/// Trades a signed assertion for an access token. Never retries.
pub async fn exchange_assertion(
    transport: &dyn TokenTransport,
    endpoint: &str,
    assertion: &SignedAssertion,
) -> AuthResult<GoogleAccessToken> {
    let request = TokenRequest::jwt_bearer(assertion.as_str());
    let response = transport.post_form(endpoint, &request).await?;

    if !response.is_success() {
        return Err(AuthError::TokenExchange {
            status: response.status,
            body: response.body,
        });
    }

    let token: GoogleAccessToken = serde_json::from_str(&response.body)
        .map_err(|e| AuthError::InvalidTokenResponse(e.to_string()))?;
    if token.access_token.is_empty() {
        return Err(AuthError::InvalidTokenResponse("access_token is empty".to_string()));
    }
    Ok(token)
}
