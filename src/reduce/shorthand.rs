//! Shorthand notation: `TL-TaL-HFL-EL[-ext]*[=WT[units]]`.
//!
//! Fields share one separator (`-`, `:` or `/`). Unknown fields are written
//! `?` or `x`; bracketed fields are estimates. For example
//! `11-[22]-33-44:55g`, `143-63-20-17=13`, `82-00-15-21-tr7-fa63-41g`.
//! Truncated notation drops everything after the hind foot: `143-63-20`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Flag, ParsedTrait, Units, match_span};
use crate::base::{self, to_float};
use crate::lexer::Token;
use crate::pattern::{self, vocabulary};

/// Units reported for shorthand lengths, which are millimeters by convention.
pub const SHORTHAND_UNITS: &str = "mm_shorthand";

static FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    let val = format!(r"(?: {} | [?x]{{1,2}} )", vocabulary::DECIMAL);
    let mass = vocabulary::MASS_UNITS;
    let pattern = format!(
        r"
        ^ (?P<tl_est> \[ )? (?P<tl> {val} ) \]?
          [:/-] (?P<tal_est> \[ )? (?P<tal> {val} ) \]?
          [:/-] (?P<hfl_est> \[ )? (?P<hfl> {val} ) \]?
          (?: [:/-] (?P<el_est> \[ )? (?P<el> {val} ) \]?
              (?: [:/-] [a-z]{{1,4}} {val} )*
              (?: [\s=:/-] \s* (?P<wt_est> \[ )? \s* (?P<wt> {val} ) \s* \]?
                  (?: \s* (?P<wt_units> {mass} ) )? )? )?
        "
    );
    pattern::build(&pattern).expect("valid shorthand pattern")
});

/// Which shorthand field a rule extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShorthandPart {
    TotalLength,
    TailLength,
    HindFootLength,
    EarLength,
    Mass,
}

impl ShorthandPart {
    // (value group, estimate group)
    fn groups(self) -> (&'static str, &'static str) {
        match self {
            Self::TotalLength => ("tl", "tl_est"),
            Self::TailLength => ("tal", "tal_est"),
            Self::HindFootLength => ("hfl", "hfl_est"),
            Self::EarLength => ("el", "el_est"),
            Self::Mass => ("wt", "wt_est"),
        }
    }
}

/// Extract one field from the shorthand token at `value`.
///
/// Missing, unknown or zero fields veto the match.
pub fn shorthand(matched: &[Token], raw: &str, value: usize, part: ShorthandPart) -> Option<ParsedTrait> {
    let (start, end) = match_span(matched)?;
    let caps = FIELDS.captures(matched.get(value)?.text(raw).trim())?;
    let (group, estimate) = part.groups();
    let number = caps.name(group).and_then(|m| to_float(m.as_str()))?;
    if number == 0.0 {
        return None;
    }

    let parsed = match part {
        ShorthandPart::Mass => mass(&caps, number, start, end),
        _ => ParsedTrait::new(number, start, end)
            .with_units(Units::single(SHORTHAND_UNITS))
            .with_flag(Flag::UnitsInferred),
    };
    Some(
        parsed
            .with_flag(Flag::Shorthand)
            .with_flag_if(Flag::EstimatedValue, caps.name(estimate).is_some()),
    )
}

fn mass(caps: &Captures<'_>, number: f64, start: usize, end: usize) -> ParsedTrait {
    let unit = caps.name("wt_units").and_then(|m| base::lookup(m.as_str()));
    match unit {
        Some(unit) => ParsedTrait::new(base::round2(number * unit.factor), start, end)
            .with_units(Units::single(unit.canonical)),
        None => ParsedTrait::new(number, start, end).with_flag(Flag::UnitsInferred),
    }
}
