use crate::client::{ClientError, GeneratedImage, GenerationBackend, ImageRequest};
use async_trait::async_trait;
use std::sync::Mutex;

/// One-pixel PNG, base64.
pub(crate) const PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Text { system: String, user: String },
    Image { prompt: String, request: ImageRequest },
    Trends { prompt: String },
}

/// In-process backend with canned answers that records every request.
pub(crate) struct ScriptedBackend {
    text: Option<String>,
    trends: Option<String>,
    failing_image_prompts: Vec<String>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self {
            text: Some(String::new()),
            trends: Some(String::new()),
            failing_image_prompts: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Text generation answers with an API error.
    pub(crate) fn failing_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub(crate) fn with_trends(mut self, answer: &str) -> Self {
        self.trends = Some(answer.to_string());
        self
    }

    pub(crate) fn failing_trends(mut self) -> Self {
        self.trends = None;
        self
    }

    /// Image requests whose prompt contains `needle` return no image.
    pub(crate) fn failing_image_when(mut self, needle: &str) -> Self {
        self.failing_image_prompts.push(needle.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn image_calls(&self) -> Vec<(String, ImageRequest)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Image { prompt, request } => Some((prompt, request)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn scripted_failure() -> ClientError {
    ClientError::Api {
        status: 503,
        body: "scripted failure".to_string(),
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_text(&self, system: &str, user: &str) -> Result<String, ClientError> {
        self.record(Call::Text {
            system: system.to_string(),
            user: user.to_string(),
        });
        self.text.clone().ok_or_else(scripted_failure)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        request: &ImageRequest,
    ) -> Option<GeneratedImage> {
        self.record(Call::Image {
            prompt: prompt.to_string(),
            request: request.clone(),
        });
        if self
            .failing_image_prompts
            .iter()
            .any(|needle| prompt.contains(needle.as_str()))
        {
            return None;
        }
        Some(GeneratedImage {
            mime_type: "image/png".to_string(),
            data_base64: PNG_B64.to_string(),
        })
    }

    async fn discover_trends(&self, prompt: &str) -> Result<String, ClientError> {
        self.record(Call::Trends {
            prompt: prompt.to_string(),
        });
        self.trends.clone().ok_or_else(scripted_failure)
    }
}
