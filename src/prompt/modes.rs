//! Generation modes, article categories, and the form inputs they read.

use crate::error::{QuillError, Result};
use std::fmt;

/// What the console is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Brand hub page: brand story or emotional-value content.
    HubPage,
    /// A series of article titles and outlines for one category.
    ArticlePlan,
    /// One complete knowledge article.
    Article,
    /// One article built around a current-events topic.
    TrendArticle,
}

impl AppMode {
    /// All modes in menu order.
    pub const ALL: [AppMode; 4] = [
        AppMode::HubPage,
        AppMode::ArticlePlan,
        AppMode::Article,
        AppMode::TrendArticle,
    ];

    /// Parse a mode from its CLI spelling (`article`, `trend-article`, ...)
    /// or its wire name (`TREND_ARTICLE`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "hub-page" | "hub" => Some(Self::HubPage),
            "article-plan" | "plan" => Some(Self::ArticlePlan),
            "article" => Some(Self::Article),
            "trend-article" | "trend" => Some(Self::TrendArticle),
            _ => None,
        }
    }

    /// CLI spelling.
    pub fn cli_name(&self) -> &'static str {
        match self {
            AppMode::HubPage => "hub-page",
            AppMode::ArticlePlan => "article-plan",
            AppMode::Article => "article",
            AppMode::TrendArticle => "trend-article",
        }
    }

    /// Name sent to the model in the `mode = ...` line.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AppMode::HubPage => "HUB_PAGE",
            AppMode::ArticlePlan => "ARTICLE_PLAN",
            AppMode::Article => "ARTICLE",
            AppMode::TrendArticle => "TREND_ARTICLE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppMode::HubPage => "璽歡心生活專區 (Brand Core)",
            AppMode::ArticlePlan => "分類文章規劃 (Article Plan)",
            AppMode::Article => "單篇知識文章 (Single Article)",
            AppMode::TrendArticle => "時事生活文 (Trend Note)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppMode::HubPage => "撰寫以「璽歡心生活」為核心的品牌故事或情緒價值傳遞內容。",
            AppMode::ArticlePlan => "規劃一系列文章標題與大綱，並附帶該分類的情境配圖建議。",
            AppMode::Article => "撰寫完整健康文章，自動生成封面與 3-5 張台灣情境配圖或圖表。",
            AppMode::TrendArticle => "結合熱門話題（科技/生活/情緒等），撰寫具備流量潛力的文章。",
        }
    }

    /// Whether results in this mode are saved to the library.
    pub fn produces_article(&self) -> bool {
        matches!(self, AppMode::Article | AppMode::TrendArticle)
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

/// The brand's fixed article categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleCategory {
    DailyWellbeing,
    SeasonalLiving,
    ActiveLiving,
    NutritionBasics,
    PlantNotes,
    FeelGoodNotes,
    TrendNotes,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 7] = [
        ArticleCategory::DailyWellbeing,
        ArticleCategory::SeasonalLiving,
        ArticleCategory::ActiveLiving,
        ArticleCategory::NutritionBasics,
        ArticleCategory::PlantNotes,
        ArticleCategory::FeelGoodNotes,
        ArticleCategory::TrendNotes,
    ];

    /// Short CLI key, e.g. `daily-wellbeing`.
    pub fn key(&self) -> &'static str {
        match self {
            ArticleCategory::DailyWellbeing => "daily-wellbeing",
            ArticleCategory::SeasonalLiving => "seasonal-living",
            ArticleCategory::ActiveLiving => "active-living",
            ArticleCategory::NutritionBasics => "nutrition-basics",
            ArticleCategory::PlantNotes => "plant-notes",
            ArticleCategory::FeelGoodNotes => "feel-good-notes",
            ArticleCategory::TrendNotes => "trend-notes",
        }
    }

    /// Bilingual label as it appears in prompts and the library.
    pub fn label(&self) -> &'static str {
        match self {
            ArticleCategory::DailyWellbeing => "日常保養・Daily Wellbeing",
            ArticleCategory::SeasonalLiving => "季節調整・Seasonal Living",
            ArticleCategory::ActiveLiving => "運動與動能・Active Living",
            ArticleCategory::NutritionBasics => "飲食與補給基礎知識・Nutrition Basics",
            ArticleCategory::PlantNotes => "自然植物 × 生活萃取・Plant Notes",
            ArticleCategory::FeelGoodNotes => "心情 × 情緒價值・Feel Good Notes",
            ArticleCategory::TrendNotes => "時事生活・Trend Notes",
        }
    }

    /// Match a key or a full label.
    pub fn lookup(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.label() == s)
    }

    /// Resolve user input to the label sent to the model.
    ///
    /// Known keys map to their label; anything else is a free-form category
    /// and passes through trimmed.
    pub fn resolve_label(s: &str) -> String {
        match Self::lookup(s) {
            Some(category) => category.label().to_string(),
            None => s.trim().to_string(),
        }
    }
}

/// Flavour of hub page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubPageType {
    #[default]
    BrandStory,
    EmotionalValue,
}

impl HubPageType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "brand-story" | "story" => Some(Self::BrandStory),
            "emotional-value" | "emotion" => Some(Self::EmotionalValue),
            _ => None,
        }
    }

    pub fn cli_name(&self) -> &'static str {
        match self {
            HubPageType::BrandStory => "brand-story",
            HubPageType::EmotionalValue => "emotional-value",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HubPageType::BrandStory => "品牌故事",
            HubPageType::EmotionalValue => "情緒價值傳遞",
        }
    }
}

/// Form fields shared by every mode.
///
/// Each mode reads the subset it needs; see [`crate::prompt::build_user_prompt`]
/// for which fields are required where.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorInputs {
    /// Category label (a known label or free-form text).
    pub category: String,
    pub topic: String,
    /// Target word-count range, e.g. `800-1000`.
    pub word_count: String,
    /// Number of planned articles.
    pub quantity: u32,
    pub trend_topic: String,
    pub brand_concept: String,
    pub hub_type: HubPageType,
}

impl Default for GeneratorInputs {
    fn default() -> Self {
        Self {
            category: ArticleCategory::DailyWellbeing.label().to_string(),
            topic: String::new(),
            word_count: "800-1000".to_string(),
            quantity: 10,
            trend_topic: String::new(),
            brand_concept: String::new(),
            hub_type: HubPageType::default(),
        }
    }
}

impl GeneratorInputs {
    /// Field names accepted by [`GeneratorInputs::set_field`].
    pub const FIELDS: [&'static str; 7] = [
        "category",
        "topic",
        "word-count",
        "quantity",
        "trend-topic",
        "brand-concept",
        "hub-type",
    ];

    /// Set one form field from text, as typed on the command line or console.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match field.trim().replace('_', "-").as_str() {
            "category" => self.category = ArticleCategory::resolve_label(value),
            "topic" => self.topic = value.to_string(),
            "word-count" => self.word_count = value.to_string(),
            "quantity" => {
                self.quantity = value.parse().map_err(|_| {
                    QuillError::UserError(format!(
                        "quantity must be a positive integer (found '{}')",
                        value
                    ))
                })?;
            }
            "trend-topic" => self.trend_topic = value.to_string(),
            "brand-concept" => self.brand_concept = value.to_string(),
            "hub-type" => {
                self.hub_type = HubPageType::from_str(value).ok_or_else(|| {
                    QuillError::UserError(format!(
                        "unknown hub type '{}'.\n\nValid values: brand-story, emotional-value",
                        value
                    ))
                })?;
            }
            other => {
                return Err(QuillError::UserError(format!(
                    "unknown field '{}'.\n\nValid fields: {}",
                    other,
                    Self::FIELDS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
