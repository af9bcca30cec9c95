//! Google Generative Language API backend.

use super::wire::{
    Content, GenerateRequest, GenerateResponse, GenerationConfig, ImageConfig, Tool,
};
use super::{
    ClientError, EMPTY_TEXT_FALLBACK, GeneratedImage, GenerationBackend, ImageRequest,
};
use crate::config::Config;
use crate::error::{QuillError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP client for `models/{model}:generateContent`.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    text_model: String,
    image_model: String,
    temperature: f32,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_base", &self.api_base)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from config.
    ///
    /// Fails with `ConfigError` when no API key can be resolved, so a missing
    /// credential blocks every remote call up front.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        Self::with_api_key(config, api_key)
    }

    /// Build a client with an explicit key.
    pub fn with_api_key(config: &Config, api_key: String) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| {
            QuillError::ConfigError(format!("failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            temperature: config.temperature,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }

    async fn call(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> std::result::Result<GenerateResponse, ClientError> {
        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        if let Some(reason) = parsed.block_reason() {
            return Err(ClientError::Blocked(reason.to_string()));
        }

        Ok(parsed)
    }

    async fn request_image(
        &self,
        prompt: &str,
        request: &ImageRequest,
    ) -> std::result::Result<GeneratedImage, ClientError> {
        let body = GenerateRequest {
            system_instruction: None,
            contents: vec![Content::text(Some("user"), prompt)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
                image_config: Some(ImageConfig {
                    aspect_ratio: request.aspect_ratio.clone(),
                }),
                ..Default::default()
            }),
            tools: Vec::new(),
        };

        let response = self.call(&self.image_model, &body).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| missing_image(&response))?;

        if inline.data.is_empty() {
            return Err(ClientError::Parse("image payload was empty".to_string()));
        }

        Ok(GeneratedImage {
            mime_type: inline.mime_type.clone(),
            data_base64: inline.data.clone(),
        })
    }
}

fn missing_image(response: &GenerateResponse) -> ClientError {
    match response.finish_reason() {
        Some(reason) => ClientError::Parse(format!(
            "response contained no image (finish reason {})",
            reason
        )),
        None => ClientError::Parse("response contained no image".to_string()),
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate_text(
        &self,
        system: &str,
        user: &str,
    ) -> std::result::Result<String, ClientError> {
        tracing::info!(model = %self.text_model, prompt_len = user.len(), "generating text");

        let body = GenerateRequest {
            system_instruction: Some(Content::text(None, system)),
            contents: vec![Content::text(Some("user"), user)],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.temperature),
                ..Default::default()
            }),
            tools: Vec::new(),
        };

        let response = self.call(&self.text_model, &body).await?;
        let text = response.text();
        if text.trim().is_empty() {
            tracing::warn!(model = %self.text_model, "model returned no text");
            return Ok(EMPTY_TEXT_FALLBACK.to_string());
        }
        Ok(text)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        request: &ImageRequest,
    ) -> Option<GeneratedImage> {
        tracing::info!(
            model = %self.image_model,
            style = ?request.style,
            aspect_ratio = %request.aspect_ratio,
            "generating image"
        );

        match self.request_image(prompt, request).await {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!(model = %self.image_model, error = %e, "image generation failed");
                None
            }
        }
    }

    async fn discover_trends(&self, prompt: &str) -> std::result::Result<String, ClientError> {
        tracing::info!(model = %self.text_model, "searching trends");

        let body = GenerateRequest {
            system_instruction: None,
            contents: vec![Content::text(Some("user"), prompt)],
            generation_config: None,
            tools: vec![Tool {
                google_search: serde_json::json!({}),
            }],
        };

        let response = self.call(&self.text_model, &body).await?;
        Ok(response.text())
    }
}
