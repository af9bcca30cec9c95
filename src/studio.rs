//! Session state for one authoring session.
//!
//! A `Studio` owns everything a session needs: the remote backend, the
//! active mode and form inputs, the library, the last result and any trend
//! suggestions. `generate` and `search_trends` take `&mut self`, so a session
//! can only have one request in flight.

use crate::archive::{Archive, build_archive, save_archive};
use crate::client::{GenerationBackend, ImageRequest, ImageStyle, parse_trend_response};
use crate::config::Config;
use crate::error::{QuillError, Result};
use crate::history::{HistoryItem, HistoryStore};
use crate::prompt::{
    AppMode, GeneratorInputs, SYSTEM_INSTRUCTION, build_user_prompt, cover_prompt, trend_prompt,
};
use crate::substitute::{ImageSettings, Substitution, substitute_directives};
use std::path::{Path, PathBuf};

/// Per-call switches for [`Studio::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Fill image directives in the generated text.
    pub images: bool,
    /// Prepend a header cover image.
    pub cover: bool,
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            images: config.generate_images,
            cover: false,
        }
    }
}

/// What one generation produced.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub content: String,
    /// Library id when the mode records its output.
    pub history_id: Option<u64>,
    /// Present when the substitution pass ran.
    pub images: Option<Substitution>,
    /// `Some(true)` when a cover was added, `Some(false)` when it failed.
    pub cover: Option<bool>,
}

pub struct Studio {
    backend: Box<dyn GenerationBackend>,
    config: Config,
    history: HistoryStore,
    mode: AppMode,
    pub inputs: GeneratorInputs,
    busy: bool,
    last_result: Option<String>,
    trend_suggestions: Vec<String>,
}

impl Studio {
    pub fn new(backend: Box<dyn GenerationBackend>, config: Config) -> Self {
        Self {
            backend,
            config,
            history: HistoryStore::new(),
            mode: AppMode::Article,
            inputs: GeneratorInputs::default(),
            busy: false,
            last_result: None,
            trend_suggestions: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Switch mode. Trend suggestions belong to the previous mode and are dropped.
    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
        self.trend_suggestions.clear();
    }

    /// True while a remote call is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn trend_suggestions(&self) -> &[String] {
        &self.trend_suggestions
    }

    /// Drop the displayed result.
    pub fn clear(&mut self) {
        self.last_result = None;
    }

    /// Generate content for the active mode.
    ///
    /// Text failure is a `GenerationError`. Image and cover failures degrade
    /// in place and never fail the call. Article modes are recorded in the
    /// library.
    pub async fn generate(&mut self, options: GenerateOptions) -> Result<GenerationReport> {
        self.busy = true;
        self.last_result = None;
        let result = self.run_generate(options).await;
        self.busy = false;

        let report = result?;
        self.last_result = Some(report.content.clone());
        Ok(report)
    }

    async fn run_generate(&mut self, options: GenerateOptions) -> Result<GenerationReport> {
        let mode = self.mode;
        let user_prompt = build_user_prompt(mode, &self.inputs, &self.history.titles())?;

        tracing::info!(mode = %mode, "generating content");
        let text = self
            .backend
            .generate_text(SYSTEM_INSTRUCTION, &user_prompt)
            .await
            .map_err(|e| QuillError::GenerationError(e.to_string()))?;

        let (mut content, images) = if options.images {
            let settings = ImageSettings::from_config(&self.config);
            let pass = substitute_directives(self.backend.as_ref(), &text, &settings).await;
            (pass.text.clone(), Some(pass))
        } else {
            (text, None)
        };

        let cover = if options.cover {
            self.add_cover(&mut content).await?
        } else {
            None
        };

        let history_id = mode
            .produces_article()
            .then(|| self.history.record(mode, &self.inputs, content.clone()).id);

        Ok(GenerationReport {
            content,
            history_id,
            images,
            cover,
        })
    }

    /// Prepend a cover for the topic (or trend topic). `None` when there is no topic.
    async fn add_cover(&self, content: &mut String) -> Result<Option<bool>> {
        let topic = [&self.inputs.topic, &self.inputs.trend_topic]
            .into_iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty());
        let Some(topic) = topic else {
            return Ok(None);
        };

        let request = ImageRequest {
            style: ImageStyle::Photographic,
            aspect_ratio: self.config.photo_aspect_ratio.clone(),
        };
        let prompt = cover_prompt(topic)?;
        match self.backend.generate_image(&prompt, &request).await {
            Some(image) => {
                *content = format!("![{}]({})\n\n{}", topic, image.to_data_url(), content);
                Ok(Some(true))
            }
            None => {
                tracing::warn!(topic, "cover image failed, continuing without it");
                Ok(Some(false))
            }
        }
    }

    /// Ask the model for current trend topics and keep them as suggestions.
    /// A failed search leaves the list empty.
    pub async fn search_trends(&mut self) -> Result<&[String]> {
        self.trend_suggestions.clear();
        self.busy = true;
        let prompt = trend_prompt(self.config.trend_count);
        let answer = match prompt {
            Ok(prompt) => self
                .backend
                .discover_trends(&prompt)
                .await
                .map_err(|e| QuillError::TrendError(e.to_string())),
            Err(e) => Err(e),
        };
        self.busy = false;

        self.trend_suggestions = parse_trend_response(&answer?, self.config.trend_count);
        tracing::info!(count = self.trend_suggestions.len(), "trend suggestions updated");
        Ok(&self.trend_suggestions)
    }

    /// Copy suggestion `index` (1-based) into the trend topic field.
    pub fn use_trend(&mut self, index: usize) -> Result<&str> {
        let suggestion = index
            .checked_sub(1)
            .and_then(|i| self.trend_suggestions.get(i))
            .ok_or_else(|| {
                QuillError::UserError(format!(
                    "no trend suggestion #{} ({} available)",
                    index,
                    self.trend_suggestions.len()
                ))
            })?;
        self.inputs.trend_topic = suggestion.clone();
        Ok(&self.inputs.trend_topic)
    }

    /// Look up a library item or fail with a user error.
    pub fn item(&self, id: u64) -> Result<&HistoryItem> {
        self.history
            .get(id)
            .ok_or_else(|| QuillError::UserError(format!("no library item with id {}", id)))
    }

    /// Show a library item as the current result.
    pub fn view(&mut self, id: u64) -> Result<&str> {
        let content = self.item(id)?.content.clone();
        self.last_result = Some(content);
        Ok(self.last_result.as_deref().unwrap_or_default())
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.history.delete(id)
    }

    /// Package a library item, titled after the item.
    pub fn package(&self, id: u64) -> Result<Archive> {
        let item = self.item(id)?;
        build_archive(&item.content, Some(&item.title))
    }

    /// Package a library item and save it under `dir`.
    pub fn download(&self, id: u64, dir: &Path) -> Result<PathBuf> {
        let archive = self.package(id)?;
        save_archive(&archive, dir)
    }
}
