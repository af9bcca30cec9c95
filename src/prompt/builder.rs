//! User-prompt assembly from mode and form inputs.

use super::modes::{AppMode, ArticleCategory, GeneratorInputs};
use super::system::{COVER_PROMPT_TEMPLATE, TREND_PROMPT_TEMPLATE};
use super::template::{TemplateError, render_template, vars};
use crate::error::{QuillError, Result};
use std::collections::HashMap;

const MODE_LINE: &str = "請執行 mode = {mode}。\n\n";
const HUB_PAGE_TEMPLATE: &str = "請為「健康新知識」主頁產生完整內容規劃。\n主頁類型：{hub_type}";
const BRAND_CONCEPT_TEMPLATE: &str = "\n品牌概念：{brand_concept}";
const ARTICLE_PLAN_TEMPLATE: &str = "分類名稱：{category}\n預計數量：{quantity} 篇";
const ARTICLE_TEMPLATE: &str = "分類名稱：{category}\n文章主題：{topic}\n目標字數：{word_count}";
const TREND_ARTICLE_TEMPLATE: &str = "時事主題：{trend_topic}";
const LIBRARY_HEADER: &str = "\n\n[已生成文章列表]\n";

/// Build the user instruction for `mode`.
///
/// `library_titles` are the titles already in the history store; they are
/// listed so the model can link them in its read-more section.
///
/// Required fields per mode:
/// - `Article`: category, topic, word count
/// - `ArticlePlan`: category, quantity >= 1
/// - `TrendArticle`: trend topic
/// - `HubPage`: none (brand concept is optional)
pub fn build_user_prompt(
    mode: AppMode,
    inputs: &GeneratorInputs,
    library_titles: &[String],
) -> Result<String> {
    validate_inputs(mode, inputs)?;

    let variables = input_variables(mode, inputs);

    let mut prompt = render(MODE_LINE, &variables)?;
    match mode {
        AppMode::HubPage => {
            prompt.push_str(&render(HUB_PAGE_TEMPLATE, &variables)?);
            if !inputs.brand_concept.trim().is_empty() {
                prompt.push_str(&render(BRAND_CONCEPT_TEMPLATE, &variables)?);
            }
        }
        AppMode::ArticlePlan => prompt.push_str(&render(ARTICLE_PLAN_TEMPLATE, &variables)?),
        AppMode::Article => prompt.push_str(&render(ARTICLE_TEMPLATE, &variables)?),
        AppMode::TrendArticle => prompt.push_str(&render(TREND_ARTICLE_TEMPLATE, &variables)?),
    }

    if !library_titles.is_empty() {
        prompt.push_str(LIBRARY_HEADER);
        for title in library_titles {
            prompt.push_str("- ");
            prompt.push_str(title);
            prompt.push('\n');
        }
    }

    Ok(prompt)
}

/// Check the fields `mode` needs are filled in.
pub fn validate_inputs(mode: AppMode, inputs: &GeneratorInputs) -> Result<()> {
    let missing = |field: &str, flag: &str| {
        QuillError::UserError(format!(
            "{} is required in {} mode.\n\nSet it with `{}`.",
            field, mode, flag
        ))
    };

    match mode {
        AppMode::HubPage => {}
        AppMode::ArticlePlan => {
            if inputs.category.trim().is_empty() {
                return Err(missing("category", "--category"));
            }
            if inputs.quantity == 0 {
                return Err(QuillError::UserError(
                    "quantity must be at least 1 in article-plan mode".to_string(),
                ));
            }
        }
        AppMode::Article => {
            if inputs.category.trim().is_empty() {
                return Err(missing("category", "--category"));
            }
            if inputs.topic.trim().is_empty() {
                return Err(missing("topic", "--topic"));
            }
            if inputs.word_count.trim().is_empty() {
                return Err(missing("word count", "--word-count"));
            }
        }
        AppMode::TrendArticle => {
            if inputs.trend_topic.trim().is_empty() {
                return Err(missing("trend topic", "--trend-topic"));
            }
        }
    }

    Ok(())
}

/// Prompt for the optional cover image of an article about `topic`.
pub fn cover_prompt(topic: &str) -> Result<String> {
    render(COVER_PROMPT_TEMPLATE, &vars([("topic", topic.trim())]))
}

/// Trend-discovery prompt asking for `count` titles.
pub fn trend_prompt(count: usize) -> Result<String> {
    render(TREND_PROMPT_TEMPLATE, &vars([("count", count.to_string())]))
}

fn input_variables(mode: AppMode, inputs: &GeneratorInputs) -> HashMap<String, String> {
    vars([
        ("mode", mode.wire_name().to_string()),
        ("category", ArticleCategory::resolve_label(&inputs.category)),
        ("topic", inputs.topic.trim().to_string()),
        ("word_count", inputs.word_count.trim().to_string()),
        ("quantity", inputs.quantity.to_string()),
        ("trend_topic", inputs.trend_topic.trim().to_string()),
        ("brand_concept", inputs.brand_concept.trim().to_string()),
        ("hub_type", inputs.hub_type.label().to_string()),
    ])
}

fn render(template: &str, variables: &HashMap<String, String>) -> Result<String> {
    render_template(template, variables).map_err(|e: TemplateError| {
        QuillError::UserError(format!("failed to render prompt template: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::HubPageType;

    fn article_inputs() -> GeneratorInputs {
        GeneratorInputs {
            category: "seasonal-living".to_string(),
            topic: "冬天喝水變少怎麼辦".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn article_prompt_lists_fields() {
        let prompt = build_user_prompt(AppMode::Article, &article_inputs(), &[]).unwrap();
        assert_eq!(
            prompt,
            "請執行 mode = ARTICLE。\n\n\
             分類名稱：季節調整・Seasonal Living\n\
             文章主題：冬天喝水變少怎麼辦\n\
             目標字數：800-1000"
        );
    }

    #[test]
    fn article_plan_prompt_uses_quantity() {
        let inputs = GeneratorInputs {
            quantity: 6,
            ..Default::default()
        };
        let prompt = build_user_prompt(AppMode::ArticlePlan, &inputs, &[]).unwrap();
        assert!(prompt.starts_with("請執行 mode = ARTICLE_PLAN。"));
        assert!(prompt.contains("預計數量：6 篇"));
    }

    #[test]
    fn trend_prompt_uses_trend_topic() {
        let inputs = GeneratorInputs {
            trend_topic: "寒流來襲".to_string(),
            ..Default::default()
        };
        let prompt = build_user_prompt(AppMode::TrendArticle, &inputs, &[]).unwrap();
        assert!(prompt.ends_with("時事主題：寒流來襲"));
    }

    #[test]
    fn hub_page_brand_concept_is_optional() {
        let inputs = GeneratorInputs::default();
        let prompt = build_user_prompt(AppMode::HubPage, &inputs, &[]).unwrap();
        assert!(prompt.contains("主頁類型：品牌故事"));
        assert!(!prompt.contains("品牌概念"));

        let inputs = GeneratorInputs {
            brand_concept: "慢活與陪伴".to_string(),
            hub_type: HubPageType::EmotionalValue,
            ..Default::default()
        };
        let prompt = build_user_prompt(AppMode::HubPage, &inputs, &[]).unwrap();
        assert!(prompt.contains("主頁類型：情緒價值傳遞"));
        assert!(prompt.contains("品牌概念：慢活與陪伴"));
    }

    #[test]
    fn library_titles_are_appended() {
        let titles = vec!["冬季保暖指南".to_string(), "好眠小習慣".to_string()];
        let prompt = build_user_prompt(AppMode::Article, &article_inputs(), &titles).unwrap();
        assert!(prompt.contains("[已生成文章列表]\n- 冬季保暖指南\n- 好眠小習慣\n"));
    }

    #[test]
    fn braces_in_inputs_are_not_interpreted() {
        let inputs = GeneratorInputs {
            topic: "{weird} topic".to_string(),
            ..article_inputs()
        };
        let prompt = build_user_prompt(AppMode::Article, &inputs, &[]).unwrap();
        assert!(prompt.contains("文章主題：{weird} topic"));
    }

    #[test]
    fn missing_topic_is_user_error() {
        let inputs = GeneratorInputs::default();
        let err = build_user_prompt(AppMode::Article, &inputs, &[]).unwrap_err();
        assert!(matches!(err, QuillError::UserError(_)));
        assert!(err.to_string().contains("--topic"));
    }

    #[test]
    fn missing_trend_topic_is_user_error() {
        let err = build_user_prompt(AppMode::TrendArticle, &GeneratorInputs::default(), &[])
            .unwrap_err();
        assert!(err.to_string().contains("trend topic"));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let inputs = GeneratorInputs {
            quantity: 0,
            ..Default::default()
        };
        assert!(build_user_prompt(AppMode::ArticlePlan, &inputs, &[]).is_err());
    }

    #[test]
    fn cover_and_trend_prompts_render() {
        assert!(cover_prompt(" 一杯茶 ").unwrap().contains("about: \"一杯茶\""));
        assert!(trend_prompt(5).unwrap().contains("請列出 5 個"));
        assert!(trend_prompt(5).unwrap().contains("[\"寒流來襲保暖技巧\""));
    }
}
