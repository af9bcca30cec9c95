//! Directive scanner.
//!
//! Grammar:
//!
//! ```text
//! {{GENERATE_IMAGE: <prompt> | <alt>}}
//! {{GENERATE_CHART: <prompt> | <alt>}}
//! {{GENERATE_IMAGE: <prompt>}}          legacy, photographic, generic alt
//! ```
//!
//! A directive never spans lines. With a `|`, the body ends at the first `}}`
//! after the separator, so a prompt may itself contain `}}`. Without one, the
//! body must hold exactly one `}}` before the next opener or the end of the
//! line; anything else is ambiguous and left alone.

use crate::client::ImageStyle;
use std::fmt;
use std::ops::Range;

const OPENER: &str = "{{GENERATE_";
const CLOSER: &str = "}}";

/// Alt text used for directives without one.
pub const LEGACY_ALT: &str = "AI 生成配圖";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Image,
    Chart,
}

impl DirectiveKind {
    fn keyword(self) -> &'static str {
        match self {
            DirectiveKind::Image => "IMAGE",
            DirectiveKind::Chart => "CHART",
        }
    }

    const ALL: [DirectiveKind; 2] = [DirectiveKind::Image, DirectiveKind::Chart];
}

/// One well-formed directive found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Trimmed, non-empty prompt.
    pub prompt: String,
    /// Trimmed alt text; `None` for the legacy form.
    pub alt: Option<String>,
    /// Byte range of the whole directive including braces.
    pub span: Range<usize>,
}

impl Directive {
    pub fn is_legacy(&self) -> bool {
        self.alt.is_none()
    }

    /// Legacy directives are always photographic regardless of keyword.
    pub fn style(&self) -> ImageStyle {
        match (self.kind, self.is_legacy()) {
            (DirectiveKind::Chart, false) => ImageStyle::Infographic,
            _ => ImageStyle::Photographic,
        }
    }

    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(LEGACY_ALT)
    }

    /// Italic caption placed under a successful image.
    pub fn caption(&self) -> String {
        let label = match self.style() {
            ImageStyle::Infographic => "圖表",
            ImageStyle::Photographic => "圖",
        };
        format!("*{}：{}*", label, self.alt_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// More than one `|`, or more than one `}}` in a legacy body.
    Ambiguous,
    /// Prompt is blank after trimming.
    EmptyPrompt,
    /// No `}}` before the next opener or the end of the line.
    Unterminated,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Ambiguous => write!(f, "ambiguous '|' or '}}}}'"),
            RejectReason::EmptyPrompt => write!(f, "empty prompt"),
            RejectReason::Unterminated => write!(f, "missing closing '}}}}'"),
        }
    }
}

/// A directive that was recognised but left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub reason: RejectReason,
    pub span: Range<usize>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub directives: Vec<Directive>,
    pub rejected: Vec<Rejected>,
}

/// Scan `text` for directives in document order.
pub fn scan(text: &str) -> ScanResult {
    let mut result = ScanResult::default();
    let mut pos = 0;

    while let Some(found) = text[pos..].find(OPENER) {
        let start = pos + found;
        let after_opener = start + OPENER.len();

        let Some((kind, body_start)) = match_keyword(text, after_opener) else {
            pos = after_opener;
            continue;
        };

        let limit = body_limit(text, body_start);
        let close = match closing_braces(&text[body_start..limit]) {
            Ok(close) => close,
            Err((reason, skip)) => {
                let end = body_start + skip;
                reject(&mut result, text, reason, start..end);
                pos = end;
                continue;
            }
        };

        let body_end = body_start + close;
        let end = body_end + CLOSER.len();
        match parse_body(&text[body_start..body_end]) {
            Ok((prompt, alt)) => result.directives.push(Directive {
                kind,
                prompt,
                alt,
                span: start..end,
            }),
            Err(reason) => reject(&mut result, text, reason, start..end),
        }
        pos = end;
    }

    result
}

/// Returns the kind and the offset just past the `:`.
fn match_keyword(text: &str, at: usize) -> Option<(DirectiveKind, usize)> {
    let rest = &text[at..];
    DirectiveKind::ALL.into_iter().find_map(|kind| {
        rest.strip_prefix(kind.keyword())
            .and_then(|r| r.strip_prefix(':'))
            .map(|_| (kind, at + kind.keyword().len() + 1))
    })
}

/// End of the line or the next opener, whichever is first.
fn body_limit(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let next_opener = rest.find(OPENER).unwrap_or(rest.len());
    from + line_end.min(next_opener)
}

/// Offset of the `}}` that closes the body within `region`.
///
/// On failure, returns the reason and how far the rejected span reaches.
fn closing_braces(region: &str) -> Result<usize, (RejectReason, usize)> {
    let bar = region.find('|');
    if let Some(bar) = bar
        && let Some(close) = region[bar..].find(CLOSER)
    {
        return Ok(bar + close);
    }

    let head = &region[..bar.unwrap_or(region.len())];
    let mut closers = head.match_indices(CLOSER).map(|(at, _)| at);
    match (closers.next(), closers.last()) {
        (None, _) => Err((RejectReason::Unterminated, region.len())),
        (Some(close), None) => Ok(close),
        (Some(_), Some(last)) => Err((RejectReason::Ambiguous, last + CLOSER.len())),
    }
}

fn parse_body(body: &str) -> Result<(String, Option<String>), RejectReason> {
    let (prompt, alt) = match body.matches('|').count() {
        0 => (body, None),
        1 => {
            let (prompt, alt) = body.split_once('|').unwrap_or((body, ""));
            let alt = alt.trim();
            (prompt, (!alt.is_empty()).then(|| alt.to_string()))
        }
        _ => return Err(RejectReason::Ambiguous),
    };

    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(RejectReason::EmptyPrompt);
    }
    Ok((prompt.to_string(), alt))
}

fn reject(result: &mut ScanResult, text: &str, reason: RejectReason, span: Range<usize>) {
    tracing::warn!(
        offset = span.start,
        directive = %&text[span.clone()],
        "ignoring malformed directive: {}",
        reason
    );
    result.rejected.push(Rejected { reason, span });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(text: &str) -> Directive {
        let result = scan(text);
        assert!(result.rejected.is_empty(), "unexpected rejects: {:?}", result.rejected);
        assert_eq!(result.directives.len(), 1);
        result.directives.into_iter().next().unwrap()
    }

    #[test]
    fn image_with_alt() {
        let text = "intro\n{{GENERATE_IMAGE: a cup of tea | 一杯茶}}\nrest";
        let d = only(text);
        assert_eq!(d.kind, DirectiveKind::Image);
        assert_eq!(d.prompt, "a cup of tea");
        assert_eq!(d.alt.as_deref(), Some("一杯茶"));
        assert_eq!(&text[d.span.clone()], "{{GENERATE_IMAGE: a cup of tea | 一杯茶}}");
        assert_eq!(d.style(), ImageStyle::Photographic);
        assert_eq!(d.caption(), "*圖：一杯茶*");
    }

    #[test]
    fn chart_with_alt_is_infographic() {
        let d = only("{{GENERATE_CHART: sugar intake bar chart | 每日糖攝取}}");
        assert_eq!(d.kind, DirectiveKind::Chart);
        assert_eq!(d.style(), ImageStyle::Infographic);
        assert_eq!(d.caption(), "*圖表：每日糖攝取*");
    }

    #[test]
    fn legacy_chart_is_photographic_with_generic_alt() {
        let d = only("{{GENERATE_CHART: vitamin comparison}}");
        assert!(d.is_legacy());
        assert_eq!(d.style(), ImageStyle::Photographic);
        assert_eq!(d.alt_text(), LEGACY_ALT);
        assert_eq!(d.caption(), "*圖：AI 生成配圖*");
    }

    #[test]
    fn empty_alt_falls_back_to_legacy() {
        let d = only("{{GENERATE_IMAGE: morning walk |   }}");
        assert!(d.is_legacy());
        assert_eq!(d.prompt, "morning walk");
    }

    #[test]
    fn closing_braces_inside_prompt_do_not_end_directive() {
        let text = "{{GENERATE_IMAGE: a sign reading }} on a wall | 招牌}}";
        let d = only(text);
        assert_eq!(d.prompt, "a sign reading }} on a wall");
        assert_eq!(d.alt.as_deref(), Some("招牌"));
        assert_eq!(d.span, 0..text.len());
    }

    #[test]
    fn two_directives_on_one_line() {
        let text = "{{GENERATE_IMAGE: tea | 茶}} and {{GENERATE_CHART: chart | 圖}}";
        let result = scan(text);
        assert_eq!(result.directives.len(), 2);
        assert_eq!(result.directives[0].prompt, "tea");
        assert_eq!(&text[result.directives[0].span.clone()], "{{GENERATE_IMAGE: tea | 茶}}");
        assert_eq!(result.directives[1].kind, DirectiveKind::Chart);
    }

    #[test]
    fn directives_do_not_span_lines() {
        let text = "{{GENERATE_IMAGE: tea\n| 茶}}";
        let result = scan(text);
        assert!(result.directives.is_empty());
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].reason, RejectReason::Unterminated);
        assert_eq!(result.rejected[0].span, 0..text.find('\n').unwrap());
    }

    #[test]
    fn multiple_separators_are_ambiguous() {
        let result = scan("{{GENERATE_IMAGE: a | b | c}}");
        assert!(result.directives.is_empty());
        assert_eq!(result.rejected[0].reason, RejectReason::Ambiguous);
    }

    #[test]
    fn separated_body_ends_at_first_closer_after_bar() {
        let text = "{{GENERATE_IMAGE: tea | 茶}} 品牌 {{likeyou}} 結尾";
        let d = only(text);
        assert_eq!(d.alt.as_deref(), Some("茶"));
        assert_eq!(&text[d.span.clone()], "{{GENERATE_IMAGE: tea | 茶}}");
    }

    #[test]
    fn legacy_body_with_two_closers_is_ambiguous() {
        let text = "{{GENERATE_IMAGE: tea}} 品牌 {{likeyou}} 結尾";
        let result = scan(text);
        assert!(result.directives.is_empty());
        assert_eq!(result.rejected[0].reason, RejectReason::Ambiguous);
        assert_eq!(&text[result.rejected[0].span.clone()], "{{GENERATE_IMAGE: tea}} 品牌 {{likeyou}}");
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let result = scan("{{GENERATE_IMAGE:   | 茶}}");
        assert_eq!(result.rejected[0].reason, RejectReason::EmptyPrompt);
    }

    #[test]
    fn unknown_keyword_or_missing_colon_is_plain_text() {
        let result = scan("{{GENERATE_VIDEO: x | y}} {{GENERATE_IMAGE x | y}}");
        assert!(result.directives.is_empty());
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn no_directives() {
        assert_eq!(scan("# 標題\n\n內文 {{name}}"), ScanResult::default());
    }
}
