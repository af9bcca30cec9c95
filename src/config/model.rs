//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for quill.
///
/// This struct represents the contents of `quill.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Remote API settings
    // =========================================================================
    /// Base URL of the generative language REST API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API key. When absent, `GEMINI_API_KEY` then `API_KEY` are consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model used for article text and trend discovery.
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for image and chart synthesis.
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Sampling temperature for text generation.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Per-request timeout. Unset means the HTTP client's own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    // =========================================================================
    // Image settings
    // =========================================================================
    /// Whether generated documents get their image directives filled in.
    #[serde(default = "default_true")]
    pub generate_images: bool,

    /// Aspect ratio for photographic images.
    #[serde(default = "default_aspect_ratio")]
    pub photo_aspect_ratio: String,

    /// Aspect ratio for infographic charts.
    #[serde(default = "default_aspect_ratio")]
    pub chart_aspect_ratio: String,

    // =========================================================================
    // Trend and output settings
    // =========================================================================
    /// Maximum number of trend suggestions kept.
    #[serde(default = "default_trend_count")]
    pub trend_count: usize,

    /// Directory archives and saved Markdown land in by default.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            text_model: default_text_model(),
            image_model: default_image_model(),
            temperature: default_temperature(),
            request_timeout_secs: None,
            generate_images: default_true(),
            photo_aspect_ratio: default_aspect_ratio(),
            chart_aspect_ratio: default_aspect_ratio(),
            trend_count: default_trend_count(),
            output_dir: default_output_dir(),
        }
    }
}
