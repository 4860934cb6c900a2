use std::sync::Arc;

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use shabecal_auth::Clock;
use shabecal_storage::ObjectStore;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};

pub const PROMPTS_PREFIX: &str = "prompts";
pub const ANONYMOUS_ALIAS: &str = "Anonymous";
const MANIFEST_FILE: &str = "manifest.json";

/// Object-safe file name for a prompt title.
pub fn prompt_file_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => '_',
            other => other,
        })
        .collect();
    format!("{safe}.txt")
}

pub fn like_key(author_id: &str, file_name: &str) -> String {
    format!("{author_id}_{file_name}")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') { c } else { '_' })
        .collect()
}

pub fn prompt_object(author_id: &str, file_name: &str) -> String {
    format!("{PROMPTS_PREFIX}/{author_id}/{file_name}")
}

pub fn manifest_object(author_id: &str) -> String {
    format!("{PROMPTS_PREFIX}/{author_id}/{MANIFEST_FILE}")
}

pub fn like_prefix(author_id: &str, file_name: &str) -> String {
    format!("{PROMPTS_PREFIX}/_likes/{}/", like_key(author_id, file_name))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptManifest {
    pub author_id: String,
    #[serde(default)]
    pub author_alias: String,
    #[serde(default)]
    pub prompts: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    pub file_name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPrompt {
    pub name: String,
    pub author_id: String,
    pub author_alias: String,
    pub file_name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrompt {
    pub name: Option<String>,
    pub text: Option<String>,
    pub browser_id: Option<String>,
    pub author_alias: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeInfo {
    pub liked: bool,
    pub count: usize,
}

/// Shared prompt library kept in the operator's bucket.
#[derive(Clone)]
pub struct PromptLibrary {
    store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
}

impl PromptLibrary {
    pub fn new(store: Arc<dyn ObjectStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Every published prompt, newest first. Manifests that cannot be read
    /// or parsed are skipped.
    pub async fn list_prompts(&self) -> ApiResult<Vec<CommunityPrompt>> {
        let items = self.store.list(&format!("{PROMPTS_PREFIX}/")).await?;

        let mut prompts = Vec::new();
        for item in items.iter().filter(|i| i.name.ends_with(&format!("/{MANIFEST_FILE}"))) {
            let manifest = match self.store.download(&item.name).await {
                Ok(Some(bytes)) => match serde_json::from_slice::<PromptManifest>(&bytes) {
                    Ok(manifest) => manifest,
                    Err(e) => {
                        warn!(object = %item.name, "Skipping broken manifest: {}", e);
                        continue;
                    }
                },
                Ok(None) => continue,
                Err(e) => {
                    warn!(object = %item.name, "Skipping unreadable manifest: {}", e);
                    continue;
                }
            };

            let alias = if manifest.author_alias.is_empty() {
                ANONYMOUS_ALIAS.to_string()
            } else {
                manifest.author_alias.clone()
            };
            prompts.extend(manifest.prompts.into_iter().map(|p| CommunityPrompt {
                name: p.name,
                author_id: manifest.author_id.clone(),
                author_alias: alias.clone(),
                file_name: p.file_name,
                created_at: p.created_at,
            }));
        }

        prompts.sort_by_key(|p| std::cmp::Reverse(DateTime::parse_from_rfc3339(&p.created_at).ok()));
        Ok(prompts)
    }

    pub async fn save_prompt(&self, request: &NewPrompt) -> ApiResult<()> {
        let (Some(name), Some(text), Some(browser_id)) = (
            non_empty(&request.name),
            non_empty(&request.text),
            non_empty(&request.browser_id),
        ) else {
            return Err(ApiError::BadRequest("name, text, browserId are required".to_string()));
        };
        let alias = non_empty(&request.author_alias);

        let file_name = prompt_file_name(name);
        self.store
            .upload(&prompt_object(browser_id, &file_name), text.as_bytes().to_vec(), "text/plain; charset=utf-8")
            .await?;

        let manifest_path = manifest_object(browser_id);
        let existing = self.store.download(&manifest_path).await?;
        let mut manifest = existing
            .and_then(|bytes| serde_json::from_slice::<PromptManifest>(&bytes).ok())
            .unwrap_or_else(|| PromptManifest {
                author_id: browser_id.to_string(),
                author_alias: alias.unwrap_or(ANONYMOUS_ALIAS).to_string(),
                prompts: Vec::new(),
            });

        manifest.prompts.retain(|p| p.file_name != file_name);
        manifest.prompts.push(ManifestEntry {
            name: name.to_string(),
            file_name: file_name.clone(),
            created_at: self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        if let Some(alias) = alias {
            manifest.author_alias = alias.to_string();
        }

        let body = serde_json::to_vec_pretty(&manifest).map_err(|e| ApiError::Internal(e.to_string()))?;
        self.store.upload(&manifest_path, body, "application/json").await?;

        info!(author = %browser_id, file = %file_name, "Prompt published");
        Ok(())
    }

    /// Full text of a prompt; empty when the object is gone.
    pub async fn prompt_text(&self, author_id: &str, file_name: &str) -> ApiResult<String> {
        let bytes = self.store.download(&prompt_object(author_id, file_name)).await?;
        Ok(bytes.map(|b| String::from_utf8_lossy(&b).into_owned()).unwrap_or_default())
    }

    pub async fn like_info(&self, author_id: &str, file_name: &str, browser_id: &str) -> ApiResult<LikeInfo> {
        let items = self.store.list(&like_prefix(author_id, file_name)).await?;
        let suffix = format!("/{browser_id}");
        Ok(LikeInfo {
            liked: items.iter().any(|i| i.name.ends_with(&suffix)),
            count: items.len(),
        })
    }

    pub async fn toggle_like(&self, author_id: &str, file_name: &str, browser_id: &str) -> ApiResult<LikeInfo> {
        let prefix = like_prefix(author_id, file_name);
        let like_object = format!("{prefix}{browser_id}");
        let items = self.store.list(&prefix).await?;

        if items.iter().any(|i| i.name == like_object) {
            self.store.delete(&like_object).await?;
            Ok(LikeInfo { liked: false, count: items.len() - 1 })
        } else {
            self.store.upload(&like_object, b"1".to_vec(), "text/plain").await?;
            Ok(LikeInfo { liked: true, count: items.len() + 1 })
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
