//! Builds and signs the RS256 JWT assertion exchanged for an access token.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, Header};

use crate::contracts::{GoogleClaims, ServiceAccountCredential};
use crate::error::{AuthError, AuthResult};
use crate::key::import_signing_key;

/// Assertions are always valid for exactly one hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 60 * 60;

/// A compact `header.payload.signature` JWT.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedAssertion(String);

impl SignedAssertion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `header.payload`, the bytes covered by the signature.
    pub fn signing_input(&self) -> &str {
        self.0.rsplit_once('.').map(|(input, _)| input).unwrap_or(&self.0)
    }

    pub fn signature(&self) -> &str {
        self.0.rsplit_once('.').map(|(_, sig)| sig).unwrap_or("")
    }

    pub fn into_string(self) -> String {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for SignedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SignedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignedAssertion").field(&self.signing_input()).finish()
    }
}

pub fn build_claims(
    credential: &ServiceAccountCredential,
    scope: &str,
    audience: &str,
    issued_at: DateTime<Utc>,
) -> GoogleClaims {
    let iat = issued_at.timestamp();
    GoogleClaims {
        iss: credential.client_email.clone(),
        scope: scope.to_string(),
        aud: audience.to_string(),
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    }
}

/// Signs a claim set for `scope` with the credential's private key.
///
/// RSASSA-PKCS1-v1_5 is deterministic, so identical inputs produce an
/// identical assertion.
pub fn sign_assertion(
    credential: &ServiceAccountCredential,
    scope: &str,
    audience: &str,
    issued_at: DateTime<Utc>,
) -> AuthResult<SignedAssertion> {
    let key = import_signing_key(&credential.private_key)?;
    let claims = build_claims(credential, scope, audience, issued_at);

    let jwt = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| AuthError::KeyImport(e.to_string()))?;
    Ok(SignedAssertion(jwt))
}
