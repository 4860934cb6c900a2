use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::Deserialize;
use shabecal_auth::Clock;
use shabecal_storage::ObjectStore;

pub mod community;
pub mod config;
pub mod error;

pub use community::{CommunityPrompt, LikeInfo, NewPrompt, PromptLibrary};
pub use config::ApiConfig;
pub use error::{ApiError, ApiJson, ApiQuery, ApiResult};

use community::non_empty;

pub struct AppState {
    pub library: PromptLibrary,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, clock: Arc<dyn Clock>) -> Self {
        Self { library: PromptLibrary::new(store, clock) }
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/prompts", get(handle_list_prompts).post(handle_save_prompt))
        .route("/api/prompts/text", get(handle_prompt_text))
        .route("/api/prompts/like", get(handle_like_info).post(handle_toggle_like))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRef {
    pub author_id: Option<String>,
    pub file_name: Option<String>,
    pub browser_id: Option<String>,
}

impl PromptRef {
    fn author_and_file(&self) -> ApiResult<(&str, &str)> {
        match (non_empty(&self.author_id), non_empty(&self.file_name)) {
            (Some(author), Some(file)) => Ok((author, file)),
            _ => Err(ApiError::BadRequest("authorId and fileName are required".to_string())),
        }
    }

    fn with_browser(&self) -> ApiResult<(&str, &str, &str)> {
        match (non_empty(&self.author_id), non_empty(&self.file_name), non_empty(&self.browser_id)) {
            (Some(author), Some(file), Some(browser)) => Ok((author, file, browser)),
            _ => Err(ApiError::BadRequest("authorId, fileName, browserId are required".to_string())),
        }
    }
}

async fn handle_list_prompts(State(state): State<Arc<AppState>>) -> ApiResult<Json<serde_json::Value>> {
    let prompts = state.library.list_prompts().await?;
    Ok(Json(serde_json::json!({ "prompts": prompts })))
}

async fn handle_save_prompt(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<NewPrompt>,
) -> ApiResult<Json<serde_json::Value>> {
    state.library.save_prompt(&request).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

async fn handle_prompt_text(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PromptRef>,
) -> ApiResult<Json<serde_json::Value>> {
    let (author, file) = query.author_and_file()?;
    let text = state.library.prompt_text(author, file).await?;
    Ok(Json(serde_json::json!({ "text": text })))
}

async fn handle_like_info(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PromptRef>,
) -> ApiResult<Json<LikeInfo>> {
    let (author, file, browser) = query.with_browser()?;
    Ok(Json(state.library.like_info(author, file, browser).await?))
}

async fn handle_toggle_like(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<PromptRef>,
) -> ApiResult<Json<LikeInfo>> {
    let (author, file, browser) = request.with_browser()?;
    Ok(Json(state.library.toggle_like(author, file, browser).await?))
}
