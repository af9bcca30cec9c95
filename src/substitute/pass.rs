//! Concurrent image fan-out and span merge.

use super::directive::{Directive, Rejected, scan};
use crate::client::{GenerationBackend, ImageRequest, ImageStyle};
use crate::config::Config;
use crate::prompt::{CHART_STYLE, PHOTO_STYLE};
use futures::future::join_all;

/// Aspect ratios applied per image style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSettings {
    pub photo_aspect_ratio: String,
    pub chart_aspect_ratio: String,
}

impl ImageSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            photo_aspect_ratio: config.photo_aspect_ratio.clone(),
            chart_aspect_ratio: config.chart_aspect_ratio.clone(),
        }
    }

    fn request_for(&self, style: ImageStyle) -> ImageRequest {
        let aspect_ratio = match style {
            ImageStyle::Photographic => &self.photo_aspect_ratio,
            ImageStyle::Infographic => &self.chart_aspect_ratio,
        };
        ImageRequest {
            style,
            aspect_ratio: aspect_ratio.clone(),
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of one substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Final document.
    pub text: String,
    /// Number of image requests issued.
    pub requested: usize,
    /// Requests that came back with an image.
    pub succeeded: usize,
    /// Directives left untouched.
    pub rejected: Vec<Rejected>,
}

impl Substitution {
    pub fn failed(&self) -> usize {
        self.requested - self.succeeded
    }
}

/// Prompt sent to the image model: the directive prompt plus the style modifier.
pub fn styled_prompt(prompt: &str, style: ImageStyle) -> String {
    let modifier = match style {
        ImageStyle::Photographic => PHOTO_STYLE,
        ImageStyle::Infographic => CHART_STYLE,
    };
    format!("{} {}", prompt, modifier)
}

/// Replace every directive in `text` with a generated image or a failure marker.
///
/// All image requests run concurrently and are joined before any splicing, so
/// the output does not depend on completion order. Image failures become
/// visible markers and never abort the pass.
pub async fn substitute_directives(
    backend: &dyn GenerationBackend,
    text: &str,
    settings: &ImageSettings,
) -> Substitution {
    let scan = scan(text);
    if scan.directives.is_empty() {
        return Substitution {
            text: text.to_string(),
            requested: 0,
            succeeded: 0,
            rejected: scan.rejected,
        };
    }

    tracing::info!(count = scan.directives.len(), "requesting directive images");

    let requests = scan.directives.iter().map(|directive| async move {
        let style = directive.style();
        let image = backend
            .generate_image(
                &styled_prompt(&directive.prompt, style),
                &settings.request_for(style),
            )
            .await;
        let succeeded = image.is_some();
        let replacement = match image {
            Some(image) => format!(
                "![{}]({})\n\n{}",
                directive.alt_text(),
                image.to_data_url(),
                directive.caption()
            ),
            None => failure_marker(directive),
        };
        (directive, replacement, succeeded)
    });
    let results = join_all(requests).await;

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut succeeded = 0;
    for (directive, replacement, ok) in &results {
        output.push_str(&text[cursor..directive.span.start]);
        output.push_str(replacement);
        cursor = directive.span.end;
        if *ok {
            succeeded += 1;
        } else {
            tracing::warn!(prompt = %directive.prompt, "image slot left as failure marker");
        }
    }
    output.push_str(&text[cursor..]);

    Substitution {
        text: output,
        requested: results.len(),
        succeeded,
        rejected: scan.rejected,
    }
}

fn failure_marker(directive: &Directive) -> String {
    format!("[圖片生成失敗：{}]", directive.alt_text())
}
