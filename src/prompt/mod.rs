//! Prompt construction.
//!
//! This module provides:
//!
//! - **Modes**: what can be generated and the form fields each mode reads
//! - **System**: the fixed brand policy, style modifiers, and trend prompt
//! - **Template**: `{field}` substitution engine used by every prompt
//! - **Builder**: assembles the user instruction for a mode
//!
//! # Template Syntax
//!
//! ```text
//! 請執行 mode = {mode}。
//!
//! 分類名稱：{category}
//! 文章主題：{topic}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod builder;
mod modes;
mod system;
mod template;

pub use builder::{build_user_prompt, cover_prompt, trend_prompt, validate_inputs};
pub use modes::{AppMode, ArticleCategory, GeneratorInputs, HubPageType};
pub use system::{CHART_STYLE, PHOTO_STYLE, SYSTEM_INSTRUCTION};
pub use template::{TemplateError, render_template};
