//! Where service account key bytes come from.

use std::path::PathBuf;

use crate::contracts::ServiceAccountCredential;
use crate::error::{AuthError, AuthResult};

/// Yields the raw key JSON. Implementations do no parsing.
pub trait CredentialSource: Send + Sync {
    fn load(&self) -> AuthResult<Vec<u8>>;

    fn describe(&self) -> String;
}

/// Reads the key JSON from a named environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn load(&self) -> AuthResult<Vec<u8>> {
        match std::env::var(&self.var) {
            Ok(raw) if !raw.trim().is_empty() => Ok(raw.into_bytes()),
            Ok(_) => Err(AuthError::Configuration(format!("{} is empty", self.var))),
            Err(_) => Err(AuthError::Configuration(format!(
                "{} environment variable is not set",
                self.var
            ))),
        }
    }

    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }
}

/// Reads the key JSON from a file, e.g. one the user picked.
#[derive(Debug, Clone)]
pub struct FileCredentialSource {
    path: PathBuf,
}

impl FileCredentialSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialSource for FileCredentialSource {
    fn load(&self) -> AuthResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            AuthError::Configuration(format!("failed to read {}: {e}", self.path.display()))
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[derive(Debug, Clone)]
pub struct StaticCredentialSource {
    raw: Vec<u8>,
}

impl StaticCredentialSource {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn load(&self) -> AuthResult<Vec<u8>> {
        Ok(self.raw.clone())
    }

    fn describe(&self) -> String {
        "in-memory key".to_string()
    }
}

/// Loads and validates a credential in one step.
pub fn load_credential(source: &dyn CredentialSource) -> AuthResult<ServiceAccountCredential> {
    let raw = source.load()?;
    ServiceAccountCredential::from_json(&raw)
}
