//! In-memory library of generated articles.
//!
//! Items live for the lifetime of one session, newest first. Nothing is
//! persisted; the library exists to feed previously generated titles back
//! into later prompts and to let the user view, save or package them.

use crate::archive::first_heading;
use crate::prompt::{AppMode, ArticleCategory, GeneratorInputs};
use chrono::{DateTime, Utc};

/// Title used when neither the content nor the inputs provide one.
pub const UNTITLED: &str = "未命名文章";

/// Category recorded for trend articles.
pub const TREND_CATEGORY: &str = "時事生活・Trend Notes";

/// Category recorded for modes without one.
pub const OTHER_CATEGORY: &str = "其他";

const PREVIEW_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    /// Epoch milliseconds at creation, bumped on collision.
    pub id: u64,
    pub title: String,
    pub category: String,
    pub mode: AppMode,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryItem {
    /// Plain-text teaser: Markdown markers removed, first 150 characters.
    pub fn preview(&self) -> String {
        let stripped: String = self
            .content
            .chars()
            .filter(|c| !matches!(c, '#' | '*' | '`'))
            .collect();
        stripped.trim().chars().take(PREVIEW_CHARS).collect()
    }
}

/// First heading, else topic, else trend topic, else [`UNTITLED`].
pub fn derive_title(content: &str, inputs: &GeneratorInputs) -> String {
    first_heading(content)
        .or_else(|| non_empty(&inputs.topic))
        .or_else(|| non_empty(&inputs.trend_topic))
        .unwrap_or_else(|| UNTITLED.to_string())
}

pub fn derive_category(mode: AppMode, inputs: &GeneratorInputs) -> String {
    match mode {
        AppMode::TrendArticle => TREND_CATEGORY.to_string(),
        AppMode::Article => non_empty(&inputs.category)
            .map(|c| ArticleCategory::resolve_label(&c))
            .unwrap_or_else(|| OTHER_CATEGORY.to_string()),
        AppMode::HubPage | AppMode::ArticlePlan => OTHER_CATEGORY.to_string(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[derive(Debug, Default)]
pub struct HistoryStore {
    items: Vec<HistoryItem>,
    last_id: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generated article at the front of the library.
    pub fn record(
        &mut self,
        mode: AppMode,
        inputs: &GeneratorInputs,
        content: String,
    ) -> &HistoryItem {
        self.record_at(mode, inputs, content, Utc::now())
    }

    pub fn record_at(
        &mut self,
        mode: AppMode,
        inputs: &GeneratorInputs,
        content: String,
        now: DateTime<Utc>,
    ) -> &HistoryItem {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;

        let item = HistoryItem {
            id,
            title: derive_title(&content, inputs),
            category: derive_category(mode, inputs),
            mode,
            content,
            created_at: now,
        };
        tracing::debug!(id, title = %item.title, "recorded history item");
        self.items.insert(0, item);
        &self.items[0]
    }

    /// Remove the item with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items, newest first.
    pub fn list(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|item| item.title.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
