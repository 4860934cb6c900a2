//! Service account credentials, JWT-bearer token exchange and a per-broker
//! token cache for Google APIs.

pub mod assertion;
pub mod broker;
pub mod cache;
pub mod clock;
pub mod contracts;
pub mod error;
pub mod exchange;
pub mod key;
pub mod source;
pub mod transport;

pub use assertion::{ASSERTION_LIFETIME_SECS, SignedAssertion, sign_assertion};
pub use broker::{AccessTokenProvider, BrokerConfig, CredentialBroker, STORAGE_FULL_CONTROL_SCOPE, VERTEX_AI_SCOPE};
pub use cache::{AccessTokenCache, CachedToken};
pub use clock::{Clock, ManualClock, SystemClock};
pub use contracts::ServiceAccountCredential;
pub use error::{AuthError, AuthResult};
pub use source::{CredentialSource, EnvCredentialSource, FileCredentialSource, StaticCredentialSource, load_credential};
pub use transport::{ReqwestTokenTransport, TokenTransport};
