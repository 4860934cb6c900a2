use serde::{Deserialize, Serialize};

/// Claim set of the JWT-bearer assertion. Field order is the serialized order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GoogleClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}
