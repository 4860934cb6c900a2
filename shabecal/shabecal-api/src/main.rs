use std::sync::Arc;

use anyhow::Context;
use shabecal_api::{ApiConfig, AppState, create_app};
use shabecal_auth::{BrokerConfig, CredentialBroker, EnvCredentialSource, ReqwestTokenTransport, SystemClock};
use shabecal_storage::GcsObjectStore;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env()?;

    let transport = ReqwestTokenTransport::with_timeout(config.http_timeout)?;
    let broker = CredentialBroker::new(BrokerConfig::object_storage(), Arc::new(transport), Arc::new(SystemClock))
        .with_source(Arc::new(EnvCredentialSource::new(config.credential_var.clone())));

    // Fail at startup rather than on the first request.
    let credential = broker
        .credential()
        .await
        .with_context(|| format!("loading storage credential from {}", config.credential_var))?;
    info!(account = %credential.client_email, bucket = %config.bucket, "Storage credential loaded");

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("building HTTP client")?;
    let store = GcsObjectStore::new(Arc::new(broker), config.bucket.clone()).with_client(http);

    let state = Arc::new(AppState::new(Arc::new(store), Arc::new(SystemClock)));
    let app = create_app(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
