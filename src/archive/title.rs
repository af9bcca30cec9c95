//! Archive folder naming.

use regex::Regex;
use std::sync::LazyLock;

/// Used when no title can be found or sanitisation leaves nothing.
pub const FALLBACK_TITLE: &str = "article";

const MAX_TITLE_CHARS: usize = 50;
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("Invalid heading regex"));

/// First level-one heading in a Markdown document, trimmed.
pub fn first_heading(markdown: &str) -> Option<String> {
    H1_REGEX
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Suggested title, else the first heading, else [`FALLBACK_TITLE`].
pub fn resolve_title(markdown: &str, suggested: Option<&str>) -> String {
    suggested
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| first_heading(markdown))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Make a title safe to use as a folder and file name.
///
/// Leading and trailing dots are stripped too, so the result is never `.`,
/// `..` or a hidden name.
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !FORBIDDEN.contains(c) && !c.is_control())
        .take(MAX_TITLE_CHARS)
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}
