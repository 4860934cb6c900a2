pub mod service_account_credential;
pub use service_account_credential::{ServiceAccountCredential, DEFAULT_TOKEN_URI};

pub mod google_claims;
pub use google_claims::GoogleClaims;

pub mod access_token;
pub use access_token::{GoogleAccessToken, TokenEndpointResponse, TokenRequest, JWT_BEARER_GRANT_TYPE};
