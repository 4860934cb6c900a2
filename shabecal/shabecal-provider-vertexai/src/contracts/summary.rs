use base64::{Engine, engine::general_purpose::STANDARD};

pub const DEFAULT_REGION: &str = "asia-northeast1";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AUDIO_MIME_TYPE: &str = "audio/webm";

/// A recorded consultation.
#[derive(Clone, Debug)]
pub struct AudioClip {
    pub data: Vec<u8>,
    pub mime_type: Option<String>,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        Self { data, mime_type }
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_AUDIO_MIME_TYPE)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

/// Guess a MIME type from a recording's file extension.
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "webm" => Some("audio/webm"),
        "ogg" | "oga" | "opus" => Some("audio/ogg"),
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "m4a" | "mp4" => Some("audio/mp4"),
        "flac" => Some("audio/flac"),
        "aac" => Some("audio/aac"),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct SummarySettings {
    pub region: String,
    pub model: String,
    /// Custom instruction; blank or absent falls back to the SOAP default.
    pub prompt: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: None,
            temperature: 0.2,
            max_output_tokens: 4096,
        }
    }
}
