use std::sync::Arc;

use reqwest::StatusCode;
use shabecal_auth::{CredentialBroker, ServiceAccountCredential};
use tracing::{info, warn};

use crate::contracts::{AudioClip, GoogleGenerateContentRequest, GoogleGenerateContentResponse, SummarySettings};
use crate::error::{VertexError, VertexResult};
use crate::prompts::resolve_prompt;

pub const DEFAULT_API_URL: &str = "https://{{REGION}}-aiplatform.googleapis.com/v1/projects/{{PROJECT}}/locations/{{REGION}}/publishers/google/models/{{MODEL}}";

/// Turns consultation recordings into SOAP notes with Gemini on Vertex AI.
///
/// Tokens come from a shared [`CredentialBroker`]; the caller supplies the
/// service account on every request.
#[derive(Clone)]
pub struct VertexAiClient {
    broker: Arc<CredentialBroker>,
    client: reqwest::Client,
    pub api_url: String,
}

impl VertexAiClient {
    pub fn new(broker: Arc<CredentialBroker>) -> Self {
        Self {
            broker,
            client: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Override the model URL template. `{{REGION}}`, `{{PROJECT}}` and
    /// `{{MODEL}}` are substituted per request.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn generate_content_url(&self, project_id: &str, settings: &SummarySettings) -> String {
        self.api_url
            .replace("{{REGION}}", &settings.region)
            .replace("{{PROJECT}}", project_id)
            .replace("{{MODEL}}", &settings.model)
            + ":generateContent"
    }

    pub async fn transcribe_and_summarize(
        &self,
        credential: &ServiceAccountCredential,
        audio: &AudioClip,
        settings: &SummarySettings,
    ) -> VertexResult<String> {
        let url = self.generate_content_url(&credential.project_id, settings);
        let prompt = resolve_prompt(settings.prompt.as_deref());
        let body = GoogleGenerateContentRequest::soap_note(prompt, audio, settings);

        info!(
            model = %settings.model,
            region = %settings.region,
            mime_type = audio.mime_type(),
            audio_bytes = audio.data.len(),
            "Vertex AI: requesting SOAP summary"
        );

        let token = self.broker.access_token_for(credential).await?;
        let mut res = self.post(&url, &token, &body).await?;

        if res.status() == StatusCode::UNAUTHORIZED {
            warn!("Vertex AI: access token rejected, refreshing once");
            let token = self.broker.refresh_for(credential).await?;
            res = self.post(&url, &token, &body).await?;
        }

        let status = res.status();
        if !status.is_success() {
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "Vertex AI: failed to read error body");
                    String::new()
                }
            };
            return Err(VertexError::Api { status: status.as_u16(), body });
        }

        let text = res.text().await?;
        let response: GoogleGenerateContentResponse = serde_json::from_str(&text)?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or(VertexError::EmptySummary)
    }

    async fn post(
        &self,
        url: &str,
        token: &str,
        body: &GoogleGenerateContentRequest,
    ) -> VertexResult<reqwest::Response> {
        let res = self.client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Ok(res)
    }
}
