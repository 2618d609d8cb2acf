//! Context checks and fix-ups shared by the trait definitions.
//!
//! Context windows are measured in bytes and widened to the nearest char
//! boundary, so multi-byte text never splits a character.

use std::sync::LazyLock;

use regex::Regex;

use crate::base;
use crate::pattern;
use crate::reduce::{Flag, ParsedTrait, Units};

/// How far back a "far" context check looks.
pub(crate) const LOOK_BACK_FAR: usize = 40;

/// How far back, or ahead, a "near" context check looks.
pub(crate) const LOOK_BACK_NEAR: usize = 10;

static IS_COLLECTOR: LazyLock<Regex> = LazyLock::new(|| context(r"\b collector"));

/// Compile a context pattern with the same flags as lexer patterns.
pub(crate) fn context(pattern: &str) -> Regex {
    pattern::build(pattern).expect("valid context pattern")
}

/// Does `regex` match in the `distance` bytes before `start`?
pub(crate) fn seen_before(regex: &Regex, text: &str, start: usize, distance: usize) -> bool {
    let mut from = start.saturating_sub(distance);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    text.get(from..start).is_some_and(|window| regex.is_match(window))
}

/// Does `regex` match in the `distance` bytes after `end`?
pub(crate) fn seen_after(regex: &Regex, text: &str, end: usize, distance: usize) -> bool {
    let mut to = (end + distance).min(text.len());
    while !text.is_char_boundary(to) {
        to += 1;
    }
    text.get(end..to).is_some_and(|window| regex.is_match(window))
}

/// Is the result's key glued to a preceding word, like `crown-rump length`?
///
/// Only applies when the match starts with a letter. One separator between
/// the two words is allowed.
pub(crate) fn key_follows_word(text: &str, parsed: &ParsedTrait) -> bool {
    if !parsed.text(text).starts_with(|c: char| c.is_alphabetic()) {
        return false;
    }
    let mut before = text.get(..parsed.start).unwrap_or_default().chars().rev();
    match before.next() {
        Some(c) if c.is_alphabetic() => true,
        Some(c) if c.is_whitespace() || c == '-' => before.next().is_some_and(char::is_alphabetic),
        _ => false,
    }
}

/// Veto shorthand that follows a collector's name, where it is a field
/// number rather than measurements.
pub(crate) fn fix_up_shorthand(parsed: ParsedTrait, text: &str) -> Option<ParsedTrait> {
    if parsed.has_flag(Flag::Shorthand) && seen_before(&IS_COLLECTOR, text, parsed.start, LOOK_BACK_FAR) {
        return None;
    }
    Some(parsed)
}

/// A unitless value followed by a double quote, like `3"`, is in inches.
pub(crate) fn fix_up_inches(mut parsed: ParsedTrait, text: &str) -> ParsedTrait {
    if parsed.units.is_some() || parsed.text(text).contains('"') {
        return parsed;
    }
    let ends_in_digit = text
        .get(..parsed.end)
        .and_then(|head| head.chars().next_back())
        .is_some_and(|c| c.is_ascii_digit());
    let Some(rest) = text.get(parsed.end..).and_then(|tail| tail.strip_prefix('"')) else {
        return parsed;
    };
    // A quote closing a JSON value is not an inch mark
    if !ends_in_digit || rest.trim_start().starts_with('}') {
        return parsed;
    }

    parsed.end += 1;
    parsed.value = parsed
        .value
        .map_numbers(|n| base::convert(n, "in").unwrap_or(n));
    parsed.units = Some(Units::single("in"));
    parsed.flags.remove(&Flag::UnitsInferred);
    parsed
}

/// The fix-ups every length trait runs last.
pub(crate) fn fix_up_numeric(parsed: ParsedTrait, text: &str) -> Option<ParsedTrait> {
    fix_up_shorthand(parsed, text).map(|parsed| fix_up_inches(parsed, text))
}
