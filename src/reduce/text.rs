//! Text-valued reducers for controlled vocabulary traits.

use super::{ParsedTrait, Value, match_span};
use crate::lexer::Token;

/// Characters trimmed by [`strip_span`].
const STRIP: &[char] = &[' ', '\t', '\n', ';', ':', ',', '=', '"', '\''];

/// Value is the source text from token `first` through token `last`.
pub fn value_span(matched: &[Token], raw: &str, first: usize, last: usize) -> Option<ParsedTrait> {
    let (start, end) = match_span(matched)?;
    let value = raw.get(matched.get(first)?.start..matched.get(last)?.end)?;
    Some(ParsedTrait::new(value, start, end))
}

/// Like [`value_span`], with whitespace and separators trimmed from the value.
pub fn strip_span(matched: &[Token], raw: &str, first: usize, last: usize) -> Option<ParsedTrait> {
    let mut parsed = value_span(matched, raw, first, last)?;
    let stripped = parsed.value.as_text()?.trim_matches(STRIP);
    if stripped.is_empty() {
        return None;
    }
    parsed.value = Value::Text(stripped.to_string());
    Some(parsed)
}
