use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BUCKET: &str = "byok-next";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const CREDENTIAL_ENV_VAR: &str = "GCS_SERVICE_ACCOUNT_KEY";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub bucket: String,
    /// Variable holding the operator's service-account key JSON.
    pub credential_var: String,
    pub http_timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("SHABECAL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid SHABECAL_BIND_ADDR '{}': {}", bind_addr, e))?;

        let bucket = std::env::var("GCS_BUCKET")
            .ok()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        let http_timeout = match std::env::var("SHABECAL_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("invalid SHABECAL_HTTP_TIMEOUT_SECS '{}': {}", raw, e))?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            bucket,
            credential_var: CREDENTIAL_ENV_VAR.to_string(),
            http_timeout: Duration::from_secs(http_timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_environment_with_defaults() {
        unsafe {
            std::env::remove_var("SHABECAL_BIND_ADDR");
            std::env::remove_var("GCS_BUCKET");
            std::env::remove_var("SHABECAL_HTTP_TIMEOUT_SECS");
        }
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.bucket, "byok-next");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.credential_var, "GCS_SERVICE_ACCOUNT_KEY");

        unsafe {
            std::env::set_var("SHABECAL_BIND_ADDR", "127.0.0.1:8080");
            std::env::set_var("GCS_BUCKET", "clinic-bucket");
            std::env::set_var("SHABECAL_HTTP_TIMEOUT_SECS", "5");
        }
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.bucket, "clinic-bucket");
        assert_eq!(config.http_timeout, Duration::from_secs(5));

        unsafe {
            std::env::set_var("SHABECAL_HTTP_TIMEOUT_SECS", "soon");
        }
        assert!(ApiConfig::from_env().is_err());

        unsafe {
            std::env::remove_var("SHABECAL_BIND_ADDR");
            std::env::remove_var("GCS_BUCKET");
            std::env::remove_var("SHABECAL_HTTP_TIMEOUT_SECS");
        }
    }
}
