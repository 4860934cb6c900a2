pub mod models;
pub use models::{
    GoogleCandidate,
    GoogleContent,
    GoogleGenerateContentRequest,
    GoogleGenerateContentResponse,
    GoogleGenerationConfig,
    GoogleInlineData,
    GooglePart,
    GoogleUsageMetadata
};

pub mod summary;
pub use summary::{AudioClip, SummarySettings, mime_type_for_extension, DEFAULT_AUDIO_MIME_TYPE, DEFAULT_MODEL, DEFAULT_REGION};
