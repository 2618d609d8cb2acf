//! Ear length, measured from the notch or the crown.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleTable;
use super::fix_up::{self, LOOK_BACK_FAR, LOOK_BACK_NEAR, context, seen_after, seen_before};
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{ParsedTrait, Reducer, ShorthandPart, UnitsSource};

static IS_ET: LazyLock<Regex> = LazyLock::new(|| context(r"\b e \.? t \b"));
static IS_NUMBER: LazyLock<Regex> = LazyLock::new(|| context(r"\#"));
static IS_MAG: LazyLock<Regex> = LazyLock::new(|| context(r"magnemite"));
static IS_ID: LazyLock<Regex> = LazyLock::new(|| context(r"\b (?: identifier | ident | id ) \b"));
// A compass direction, like `N 10 E 15`
static IS_EAST: LazyLock<Regex> = LazyLock::new(|| context(r"\b n \b"));

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
        .map(|parser| parser.with_fix_up(fix_up))
}

fn lex_rules() -> Vec<Fragment> {
    let mut rules = vec![
        Fragment::new(
            "key_with_units",
            r"\b ear [\s_-]* (?: length | len ) [\s_-]* in [\s_-]* (?: millimeters? | mm ) \b",
        ),
        Fragment::new("word", r"\b ear [\s-]* tags? \b"),
        Fragment::new(
            "keyword",
            r"\b (?: ear [\s-]* from [\s-]* (?: notch | crown )
                   | ear [\s-]* (?: length | len )
                   | ear
                   | ef [nc] ) \b",
        ),
        // Measured-from abbreviations, like `e/n` or `ec`
        Fragment::new("char_measured_from", r"\b e /? [nc] \b"),
        // An `E.` that starts a word, like `E. coli`
        Fragment::new("word", r"\b e \. \s? [a-z] \w*"),
        Fragment::new("char_key", r"\b e \b"),
        vocabulary::shorthand_key_rule(),
    ];
    rules.extend(vocabulary::numeric_rules());
    rules.push(vocabulary::len_units_rule());
    rules.push(Fragment::new("sep", "[;,]"));
    rules.push(vocabulary::word_rule());
    rules
}

fn rules() -> Vec<(String, Action)> {
    use UnitsSource::{InKey, Inferred, Token};

    let mut table = RuleTable::new();
    table
        .add("key_with_units range", Reducer::numeric(1, InKey(0)))
        .add("keyword fraction len_units", Reducer::fraction(1, Token(2)))
        .add("keyword fraction", Reducer::fraction(1, Inferred))
        .add("keyword range len_units", Reducer::numeric(1, Token(2)))
        .add("keyword range", Reducer::numeric(1, Inferred))
        .add("shorthand_key shorthand", Reducer::shorthand(1, ShorthandPart::EarLength))
        .add("shorthand", Reducer::shorthand(0, ShorthandPart::EarLength));
    for key in ["char_key", "char_measured_from"] {
        table
            .add(format!("{key} fraction len_units"), Reducer::fraction_ambiguous(1, Token(2)))
            .add(format!("{key} fraction"), Reducer::fraction_ambiguous(1, Inferred))
            .add(format!("{key} range len_units"), Reducer::numeric_ambiguous(1, Token(2)))
            .add(format!("{key} range"), Reducer::numeric_ambiguous(1, Inferred));
    }
    table.take()
}

fn fix_up(parsed: ParsedTrait, text: &str) -> Option<ParsedTrait> {
    if parsed.is_ambiguous()
        && (seen_before(&IS_ET, text, parsed.start, LOOK_BACK_NEAR)
            || seen_before(&IS_NUMBER, text, parsed.start, LOOK_BACK_NEAR)
            || seen_before(&IS_MAG, text, parsed.start, LOOK_BACK_FAR)
            || seen_before(&IS_ID, text, parsed.start, LOOK_BACK_FAR)
            || seen_before(&IS_EAST, text, parsed.start, LOOK_BACK_NEAR)
            || seen_after(&IS_EAST, text, parsed.end, LOOK_BACK_NEAR))
    {
        return None;
    }

    fix_up::fix_up_numeric(parsed, text)
}
