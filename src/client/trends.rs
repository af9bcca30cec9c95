//! Parsing of trend-discovery answers.
//!
//! The model is asked for a bare JSON array but often wraps it in prose or a
//! code fence. The outermost `[...]` span is tried as JSON first; anything
//! else falls back to one suggestion per non-empty line.

/// Extract at most `cap` trend titles from a raw model answer.
pub fn parse_trend_response(text: &str, cap: usize) -> Vec<String> {
    if let Some(span) = array_span(text)
        && let Ok(items) = serde_json::from_str::<Vec<String>>(span)
    {
        return items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .take(cap)
            .collect();
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(cap)
        .map(str::to_string)
        .collect()
}

/// From the first `[` to the last `]`, inclusive.
fn array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_embedded_in_prose() {
        let parsed = parse_trend_response(r#"here: ["A","B","C"]"#, 5);
        assert_eq!(parsed, vec!["A", "B", "C"]);
    }

    #[test]
    fn parses_array_inside_code_fence() {
        let text = "```json\n[\n  \"寒流來襲保暖技巧\",\n  \"腸病毒預防\"\n]\n```";
        assert_eq!(
            parse_trend_response(text, 5),
            vec!["寒流來襲保暖技巧", "腸病毒預防"]
        );
    }

    #[test]
    fn caps_array_results() {
        let parsed = parse_trend_response(r#"["1","2","3","4","5","6","7"]"#, 5);
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[4], "5");
    }

    #[test]
    fn falls_back_to_lines_when_no_array() {
        let text = "寒流來襲\n\n  腸病毒預防  \n普發現金\n";
        assert_eq!(
            parse_trend_response(text, 5),
            vec!["寒流來襲", "腸病毒預防", "普發現金"]
        );
    }

    #[test]
    fn falls_back_to_lines_when_array_is_not_strings() {
        let text = "[1, 2]\nsecond line";
        assert_eq!(parse_trend_response(text, 5), vec!["[1, 2]", "second line"]);
    }

    #[test]
    fn fallback_is_capped() {
        let text = (1..=9).map(|i| format!("topic {}", i)).collect::<Vec<_>>().join("\n");
        assert_eq!(parse_trend_response(&text, 5).len(), 5);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(parse_trend_response("", 5).is_empty());
        assert!(parse_trend_response("  \n \n", 5).is_empty());
    }
}
