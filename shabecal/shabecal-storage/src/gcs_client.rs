//! # GCS API Client
//!
//! Upload, download, list and delete against the Cloud Storage JSON API,
//! authorized with a bearer token from an [`AccessTokenProvider`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use shabecal_auth::AccessTokenProvider;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::store::ObjectStore;
use crate::types::{ListResponse, ObjectItem};

pub const GCS_BASE_URL: &str = "https://storage.googleapis.com";
const LIST_PAGE_SIZE: &str = "500";

#[derive(Clone)]
pub struct GcsObjectStore {
    tokens: Arc<dyn AccessTokenProvider>,
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl GcsObjectStore {
    pub fn new(tokens: Arc<dyn AccessTokenProvider>, bucket: impl Into<String>) -> Self {
        Self {
            tokens,
            client: reqwest::Client::new(),
            base_url: GCS_BASE_URL.to_string(),
            bucket: bucket.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment so an
    /// object name containing `/` stays a single segment.
    fn url(&self, segments: &[&str]) -> StorageResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| StorageError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| StorageError::InvalidUrl(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn objects_url(&self) -> StorageResult<Url> {
        self.url(&["storage", "v1", "b", &self.bucket, "o"])
    }

    fn object_url(&self, name: &str) -> StorageResult<Url> {
        self.url(&["storage", "v1", "b", &self.bucket, "o", name])
    }

    /// Sends with the current token; on 401 refreshes once and resends.
    async fn send_authorized<F>(&self, build: F) -> StorageResult<reqwest::Response>
    where
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder + Send + Sync,
    {
        let token = self.tokens.access_token().await?;
        let res = build(&self.client).bearer_auth(&token).send().await?;
        if res.status() != StatusCode::UNAUTHORIZED {
            return Ok(res);
        }

        warn!(bucket = %self.bucket, "storage rejected access token, refreshing once");
        let token = self.tokens.refresh_access_token().await?;
        Ok(build(&self.client).bearer_auth(&token).send().await?)
    }
}

async fn ensure_success(operation: &'static str, res: reqwest::Response) -> StorageResult<reqwest::Response> {
    if res.status().is_success() {
        return Ok(res);
    }
    let status = res.status().as_u16();
    let body = match res.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(operation, status, error = %e, "failed to read GCS error body");
            String::new()
        }
    };
    Err(StorageError::Status { operation, status, body })
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn upload(&self, name: &str, data: Vec<u8>, content_type: &str) -> StorageResult<ObjectItem> {
        let mut url = self.url(&["upload", "storage", "v1", "b", &self.bucket, "o"])?;
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", name);

        debug!(bucket = %self.bucket, object = %name, bytes = data.len(), "uploading object");
        let res = self
            .send_authorized(|client| {
                client
                    .post(url.clone())
                    .header(reqwest::header::CONTENT_TYPE, content_type)
                    .body(data.clone())
            })
            .await?;
        let res = ensure_success("upload", res).await?;
        Ok(res.json().await?)
    }

    async fn download(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        let mut url = self.object_url(name)?;
        url.query_pairs_mut().append_pair("alt", "media");

        let res = self.send_authorized(|client| client.get(url.clone())).await?;
        if res.status() == StatusCode::NOT_FOUND {
            debug!(bucket = %self.bucket, object = %name, "object not found");
            return Ok(None);
        }
        let res = ensure_success("download", res).await?;
        Ok(Some(res.bytes().await?.to_vec()))
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<ObjectItem>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.objects_url()?;
            {
                let mut qp = url.query_pairs_mut();
                qp.append_pair("prefix", prefix);
                qp.append_pair("maxResults", LIST_PAGE_SIZE);
                if let Some(ref t) = page_token {
                    qp.append_pair("pageToken", t);
                }
            }

            let res = self.send_authorized(|client| client.get(url.clone())).await?;
            let page: ListResponse = ensure_success("list", res).await?.json().await?;
            items.extend(page.items);

            page_token = page.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        debug!(bucket = %self.bucket, %prefix, count = items.len(), "listed objects");
        Ok(items)
    }

    async fn delete(&self, name: &str) -> StorageResult<()> {
        let url = self.object_url(name)?;
        let res = self.send_authorized(|client| client.delete(url.clone())).await?;
        ensure_success("delete", res).await?;
        Ok(())
    }
}
