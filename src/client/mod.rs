//! Remote generation client.
//!
//! The rest of the crate talks to the generative API only through the
//! [`GenerationBackend`] trait. [`GeminiClient`] is the production
//! implementation; tests use a scripted in-process backend.
//!
//! Failure semantics differ per capability:
//! - text generation and trend discovery return `Err` and the caller reports it
//! - image generation returns `None`; the slot degrades to "no image" and is
//!   never retried

mod gemini;
mod trends;
mod wire;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub use gemini::GeminiClient;
pub use trends::parse_trend_response;

/// Text returned when the model answers with no text at all.
pub const EMPTY_TEXT_FALLBACK: &str = "No content generated. Please try again.";

/// Errors from a single remote call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request blocked by content policy: {0}")]
    Blocked(String),

    #[error("response could not be parsed: {0}")]
    Parse(String),
}

/// Visual treatment requested for a generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStyle {
    /// Lifestyle photo with the regional and brand-colour constraints.
    Photographic,
    /// Flat vector infographic.
    Infographic,
}

/// Per-request image configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub style: ImageStyle,
    /// `W:H`, e.g. `16:9`.
    pub aspect_ratio: String,
}

/// A generated image as returned by the API: base64 payload plus mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data_base64: String,
}

impl GeneratedImage {
    /// `data:` URL suitable for an inline Markdown image.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data_base64)
    }
}

/// The remote capabilities quill needs.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text from a system instruction and a user instruction.
    async fn generate_text(&self, system: &str, user: &str) -> Result<String, ClientError>;

    /// Generate one image. Any failure is `None`.
    async fn generate_image(&self, prompt: &str, request: &ImageRequest)
    -> Option<GeneratedImage>;

    /// Run a search-grounded prompt and return the raw text answer.
    async fn discover_trends(&self, prompt: &str) -> Result<String, ClientError>;
}

#[async_trait]
impl<T: GenerationBackend + ?Sized> GenerationBackend for Arc<T> {
    async fn generate_text(&self, system: &str, user: &str) -> Result<String, ClientError> {
        (**self).generate_text(system, user).await
    }

    async fn generate_image(
        &self,
        prompt: &str,
        request: &ImageRequest,
    ) -> Option<GeneratedImage> {
        (**self).generate_image(prompt, request).await
    }

    async fn discover_trends(&self, prompt: &str) -> Result<String, ClientError> {
        (**self).discover_trends(prompt).await
    }
}
