//! Total length, including snout-vent and head-body notations.
//!
//! Keys range from explicit (`totalLengthInMM`) to bare (`length`, `L=`).
//! Bare keys are flagged ambiguous and checked against nearby context by
//! the fix-up.

use std::sync::LazyLock;

use regex::Regex;

use super::fix_up::{self, LOOK_BACK_FAR, LOOK_BACK_NEAR, context, key_follows_word, seen_after, seen_before};
use super::{LENGTH_UNITS, RuleTable};
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{ParsedTrait, Reducer, ShorthandPart, UnitsSource};

static IS_ID: LazyLock<Regex> = LazyLock::new(|| context(r"\b (?: identifier | ident | id | collector ) \b"));
static IS_TRAP: LazyLock<Regex> = LazyLock::new(|| context(r"\b trap"));
static IS_TESTES: LazyLock<Regex> =
    LazyLock::new(|| context(r"reproductive | gonad | test | scrotal | scrotum | scrot"));
// `L` is also an abbreviation for left
static IS_RIGHT: LazyLock<Regex> = LazyLock::new(|| context(r"\b r \b"));

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
        .map(|parser| parser.with_fix_up(fix_up))
}

fn lex_rules() -> Vec<Fragment> {
    let mut rules = vec![
        Fragment::new(
            "key_with_units",
            r"\b (?: total [\s_-]* length | length | snout [\s_-]* vent [\s_-]* lengths?
                   | head [\s_-]* body [\s_-]* length )
              [\s_-]* in [\s_-]* (?: millimeters? | mm ) \b",
        ),
        Fragment::new(
            "len_key",
            r"\b (?: total [\s-]* length [\s-]* in
                   | (?: total | max | standard | fork | mean | body | label ) [\s-]* lengths?
                   | snout [\s-]* vent [\s-]* lengths?
                   | head [\s-]* body [\s-]* lengths? ) \b",
        ),
        // Words that start like an abbreviated key
        Fragment::new(
            "word",
            r"\b (?: t [o.]? l [a-z] | s \.? v \.? l [a-z] | s \.? l [a-z] | s \.? v \.? [a-km-z] ) \w*",
        ),
        Fragment::new(
            "len_key",
            r"\b (?: t [o.]? l [._]? | s \.? v \.? (?: l \.? )? | s \.? l \.? )",
        ),
        vocabulary::shorthand_key_rule(),
        // Keys that need units to be trusted
        Fragment::new("key_units_req", r"\b (?: body | total ) \b"),
        Fragment::new("ambiguous", r"\b lengths? \b"),
        Fragment::new("char_key", r"\b l \s* [:=]"),
    ];
    rules.extend(vocabulary::numeric_rules());
    rules.extend(vocabulary::length_unit_rules());
    rules.push(Fragment::new("sep", "[;]"));
    rules.push(vocabulary::word_rule());
    rules
}

fn rules() -> Vec<(String, Action)> {
    use UnitsSource::{InKey, Inferred, Token};

    let mut table = RuleTable::new();
    table
        .add("key_with_units range", Reducer::numeric(1, InKey(0)))
        // E.g.: total length = 120 mm
        .add_per_unit("len_key range {units}", &LENGTH_UNITS, Reducer::numeric(1, Token(2)))
        .add_per_unit("len_key {units} range", &LENGTH_UNITS, Reducer::numeric(2, Token(1)))
        .add("len_key range", Reducer::numeric(1, Inferred))
        .add_per_unit("len_key fraction {units}", &LENGTH_UNITS, Reducer::fraction(1, Token(2)))
        .add("len_key fraction", Reducer::fraction(1, Inferred))
        // E.g.: 13 cm TL
        .add_per_unit("range {units} len_key", &LENGTH_UNITS, Reducer::numeric(0, Token(1)))
        .add("range len_key", Reducer::numeric(0, Inferred))
        .add_per_unit("key_units_req range {units}", &LENGTH_UNITS, Reducer::numeric(1, Token(2)))
        .add_per_unit("key_units_req fraction {units}", &LENGTH_UNITS, Reducer::fraction(1, Token(2)))
        .add_per_unit("shorthand_key range {units}", &LENGTH_UNITS, Reducer::numeric(1, Token(2)))
        .add_per_unit("shorthand_key {units} range", &LENGTH_UNITS, Reducer::numeric(2, Token(1)))
        // A trailing key settles a bare "length"
        .add_per_unit("ambiguous range {units} len_key", &LENGTH_UNITS, Reducer::numeric(1, Token(2)))
        .add("ambiguous range len_key", Reducer::numeric(1, Inferred))
        .add_per_unit("ambiguous range {units}", &LENGTH_UNITS, Reducer::numeric_ambiguous(1, Token(2)))
        .add_per_unit("ambiguous {units} range", &LENGTH_UNITS, Reducer::numeric_ambiguous(2, Token(1)))
        .add("ambiguous range", Reducer::numeric_ambiguous(1, Inferred))
        .add_per_unit(
            "ambiguous fraction {units}",
            &LENGTH_UNITS,
            Reducer::fraction_ambiguous(1, Token(2)),
        )
        .add_per_unit("char_key range {units}", &LENGTH_UNITS, Reducer::numeric_ambiguous(1, Token(2)))
        .add("char_key range", Reducer::numeric_ambiguous(1, Inferred))
        // E.g.: t.l.= 2 feet 3.1 - 4.5 inches
        .add("len_key range feet range inches", Reducer::english(1, false))
        .add("range feet range inches", Reducer::english(0, true))
        .add("shorthand_key shorthand", Reducer::shorthand(1, ShorthandPart::TotalLength))
        // E.g.: measurements: 143-63-20
        .add("shorthand_key triple", Reducer::shorthand(1, ShorthandPart::TotalLength))
        .add("shorthand", Reducer::shorthand(0, ShorthandPart::TotalLength));

    // E.g.: Snout vent lengths range from 16 to 23 mm
    for gap in 1..=3 {
        let words = vec!["word"; gap].join(" ");
        table
            .add_per_unit(
                &format!("len_key {words} range {{units}}"),
                &LENGTH_UNITS,
                Reducer::numeric(gap + 1, Token(gap + 2)),
            )
            .add(format!("len_key {words} range"), Reducer::numeric(gap + 1, Inferred));
    }
    table.take()
}

fn fix_up(parsed: ParsedTrait, text: &str) -> Option<ParsedTrait> {
    if seen_before(&IS_ID, text, parsed.start, LOOK_BACK_FAR)
        || seen_before(&IS_TRAP, text, parsed.start, LOOK_BACK_NEAR)
    {
        return None;
    }

    if parsed.is_ambiguous()
        && (key_follows_word(text, &parsed)
            || seen_before(&IS_TESTES, text, parsed.start, LOOK_BACK_NEAR)
            || seen_before(&IS_RIGHT, text, parsed.start, LOOK_BACK_NEAR)
            || seen_after(&IS_RIGHT, text, parsed.end, LOOK_BACK_NEAR))
    {
        return None;
    }

    fix_up::fix_up_numeric(parsed, text)
}
