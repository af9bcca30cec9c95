//! Configuration constants and default value functions.

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "quill.yaml";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

pub(crate) fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
pub(crate) fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}
pub(crate) fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}
pub(crate) fn default_temperature() -> f32 {
    0.7
}
pub(crate) fn default_aspect_ratio() -> String {
    "16:9".to_string()
}
pub(crate) fn default_trend_count() -> usize {
    5
}
pub(crate) fn default_output_dir() -> String {
    ".".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}

/// Check that an aspect ratio looks like `W:H` with positive integers.
pub fn is_valid_aspect_ratio(ratio: &str) -> bool {
    match ratio.split_once(':') {
        Some((w, h)) => matches!(
            (w.trim().parse::<u32>(), h.trim().parse::<u32>()),
            (Ok(w), Ok(h)) if w > 0 && h > 0
        ),
        None => false,
    }
}
