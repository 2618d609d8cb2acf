//! Numeric reducers.
//!
//! All conversions go through [`crate::base::convert`], which rounds to two
//! decimals. Values without units stay in their written scale and carry
//! [`Flag::UnitsInferred`].

use std::sync::LazyLock;

use regex::Regex;

use super::{Flag, NumericArgs, ParsedTrait, Units, UnitsSource, Value, match_span};
use crate::base::{self, round2, split_range, to_float};
use crate::lexer::Token;

// The last `in` of the key, so `hindFootLengthInMM` reads `MM`
static UNITS_IN_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*in[\s_-]*([a-z]+)\s*$").expect("valid key units pattern"));

static FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s+)?(\d+)\s*/\s*(\d+)$").expect("valid fraction pattern")
});

/// A number or range, converted when units are known.
pub fn numeric_units(matched: &[Token], raw: &str, args: &NumericArgs) -> Option<ParsedTrait> {
    let (start, end) = match_span(matched)?;
    let numbers = split_range(matched.get(args.value)?.text(raw));
    let value = Value::from_numbers(numbers)?;
    Some(with_units(value, matched, raw, args, start, end))
}

/// A fraction like `10 3/8`, converted when units are known.
pub fn fraction(matched: &[Token], raw: &str, args: &NumericArgs) -> Option<ParsedTrait> {
    let (start, end) = match_span(matched)?;
    let caps = FRACTION.captures(matched.get(args.value)?.text(raw).trim())?;
    let whole = caps.get(1).and_then(|m| to_float(m.as_str())).unwrap_or(0.0);
    let numerator = to_float(caps.get(2)?.as_str())?;
    let denominator = to_float(caps.get(3)?.as_str())?;
    if denominator == 0.0 {
        return None;
    }
    let value = Value::Number(whole + numerator / denominator);
    Some(with_units(value, matched, raw, args, start, end))
}

/// A size like `8x5` or `9`, converted when units are known.
///
/// Two dimensions stay two numbers even when they are equal.
pub fn cross(matched: &[Token], raw: &str, args: &NumericArgs) -> Option<ParsedTrait> {
    let (start, end) = match_span(matched)?;
    let dimensions = matched
        .get(args.value)?
        .text(raw)
        .split(['x', 'X', '×', '*'])
        .map(to_float)
        .collect::<Option<Vec<f64>>>()?;
    let value = match dimensions.as_slice() {
        [length] => Value::Number(*length),
        [_, _] => Value::Range(dimensions),
        _ => return None,
    };
    Some(with_units(value, matched, raw, args, start, end))
}

/// A compound value like `2 ft 3.1 - 4.5 in`.
///
/// Reads tokens `start..start + 4` as major value, major units, minor
/// value, minor units. Each part is converted and rounded, then every
/// major/minor combination is summed.
pub fn english_units(matched: &[Token], raw: &str, start: usize, ambiguous: bool) -> Option<ParsedTrait> {
    let (span_start, span_end) = match_span(matched)?;
    let parts = matched.get(start..start + 4)?;
    let major_units = base::lookup(parts[1].text(raw))?;
    let minor_units = base::lookup(parts[3].text(raw))?;

    let majors = split_range(parts[0].text(raw));
    let minors = split_range(parts[2].text(raw));
    let mut sums = Vec::with_capacity(majors.len() * minors.len());
    for major in &majors {
        for minor in &minors {
            let sum = round2(
                round2(major * major_units.factor) + round2(minor * minor_units.factor),
            );
            if !sums.contains(&sum) {
                sums.push(sum);
            }
        }
    }

    let value = Value::from_numbers(sums)?;
    Some(
        ParsedTrait::new(value, span_start, span_end)
            .with_units(Units::compound(major_units.canonical, minor_units.canonical))
            .with_flag_if(Flag::AmbiguousKey, ambiguous),
    )
}

// Resolve units from the rule's source and convert.
fn with_units(
    value: Value,
    matched: &[Token],
    raw: &str,
    args: &NumericArgs,
    start: usize,
    end: usize,
) -> ParsedTrait {
    let written = match args.units {
        UnitsSource::Inferred => None,
        UnitsSource::Token(i) => matched.get(i).map(|t| t.text(raw)),
        UnitsSource::InKey(i) => matched
            .get(i)
            .and_then(|t| UNITS_IN_KEY.captures(t.text(raw)))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str()),
        UnitsSource::Fixed(units) => Some(units),
    };

    let parsed = match written.and_then(base::lookup) {
        Some(unit) => ParsedTrait::new(
            value.map_numbers(|n| round2(n * unit.factor)),
            start,
            end,
        )
        .with_units(Units::single(unit.canonical)),
        None => ParsedTrait::new(value, start, end).with_flag(Flag::UnitsInferred),
    };
    parsed.with_flag_if(Flag::AmbiguousKey, args.ambiguous)
}
