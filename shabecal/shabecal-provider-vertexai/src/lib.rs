pub mod contracts;
pub mod error;
pub mod prompts;
pub mod vertexai_client;

pub use contracts::{AudioClip, SummarySettings};
pub use error::{VertexError, VertexResult};
pub use prompts::{DEFAULT_SOAP_PROMPT, resolve_prompt};
pub use vertexai_client::{DEFAULT_API_URL, VertexAiClient};
