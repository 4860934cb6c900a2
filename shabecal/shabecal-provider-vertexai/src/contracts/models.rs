use serde::{Deserialize, Serialize};

use super::summary::{AudioClip, SummarySettings};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GoogleGenerateContentRequest {
    pub contents: Vec<GoogleContent>,

    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GoogleGenerationConfig>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GoogleContent {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<GooglePart>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct GooglePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<GoogleInlineData>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GoogleInlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GoogleGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleGenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GoogleCandidate>,
    #[serde(rename = "usageMetadata", default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<GoogleUsageMetadata>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleCandidate {
    #[serde(default)]
    pub content: Option<GoogleContent>,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleUsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: Option<u32>,
    #[serde(rename = "totalTokenCount", default)]
    pub total_token_count: Option<u32>,
}

impl GoogleGenerateContentRequest {
    /// One user turn: the instruction text followed by the recording.
    pub fn soap_note(prompt: &str, audio: &AudioClip, settings: &SummarySettings) -> Self {
        GoogleGenerateContentRequest {
            contents: vec![GoogleContent {
                role: "user".to_string(),
                parts: vec![
                    GooglePart {
                        text: Some(prompt.to_string()),
                        ..Default::default()
                    },
                    GooglePart {
                        inline_data: Some(GoogleInlineData {
                            mime_type: audio.mime_type().to_string(),
                            data: audio.to_base64(),
                        }),
                        ..Default::default()
                    },
                ],
            }],
            generation_config: Some(GoogleGenerationConfig {
                temperature: Some(settings.temperature),
                max_output_tokens: Some(settings.max_output_tokens),
            }),
        }
    }
}

impl GoogleGenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}
