//! Tail length.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleTable;
use super::fix_up::{self, LOOK_BACK_FAR, context, seen_before};
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{ParsedTrait, Reducer, ShorthandPart, UnitsSource};

// Looks back this far for a total length key, as in `nose-tail`
const LOOK_BACK_TOTAL: usize = 20;

static IS_TOTAL: LazyLock<Regex> = LazyLock::new(|| context(r"\b (?: body | nose | snout )"));
static IS_TESTES: LazyLock<Regex> =
    LazyLock::new(|| context(r"reproductive | gonad | test | scrotal | scrotum | scrot"));
static IS_ELEVATION: LazyLock<Regex> = LazyLock::new(|| context(r"\b (?: elevation | elev )"));
static IS_ID: LazyLock<Regex> = LazyLock::new(|| context(r"\b (?: identifier | ident | id ) \b"));
static IS_TAG: LazyLock<Regex> = LazyLock::new(|| context(r"\b tag"));

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
        .map(|parser| parser.with_fix_up(fix_up))
}

fn lex_rules() -> Vec<Fragment> {
    let mut rules = vec![
        Fragment::new(
            "key_with_units",
            r"\b tail [\s_-]* (?: length | len ) [\s_-]* in [\s_-]* (?: millimeters? | mm ) \b",
        ),
        Fragment::new("key", r"\b (?: tail [\s-]* (?: length | len ) | tail | tal ) \b"),
        vocabulary::shorthand_key_rule(),
        Fragment::new("char_key", r"\b t \b"),
    ];
    rules.extend(vocabulary::numeric_rules());
    rules.push(vocabulary::len_units_rule());
    rules.push(Fragment::new("sep", "[;]"));
    rules.push(vocabulary::word_rule());
    rules
}

fn rules() -> Vec<(String, Action)> {
    use UnitsSource::{InKey, Inferred, Token};

    let mut table = RuleTable::new();
    table
        .add("key_with_units range", Reducer::numeric(1, InKey(0)))
        .add("key range len_units", Reducer::numeric(1, Token(2)))
        .add("key range", Reducer::numeric(1, Inferred))
        .add("key fraction len_units", Reducer::fraction(1, Token(2)))
        .add("key fraction", Reducer::fraction(1, Inferred))
        // A lone `T` is ambiguous
        .add("char_key range len_units", Reducer::numeric_ambiguous(1, Token(2)))
        .add("char_key range", Reducer::numeric_ambiguous(1, Inferred))
        .add("char_key fraction len_units", Reducer::fraction_ambiguous(1, Token(2)))
        .add("shorthand_key shorthand", Reducer::shorthand(1, ShorthandPart::TailLength))
        // E.g.: measurements: 143-63-20
        .add("shorthand_key triple", Reducer::shorthand(1, ShorthandPart::TailLength))
        .add("shorthand", Reducer::shorthand(0, ShorthandPart::TailLength));
    table.take()
}

fn fix_up(parsed: ParsedTrait, text: &str) -> Option<ParsedTrait> {
    // Body and tail lengths written together, like `snout to tip of tail`
    if seen_before(&IS_TOTAL, text, parsed.start, LOOK_BACK_TOTAL) {
        return None;
    }

    if parsed.is_ambiguous()
        && (seen_before(&IS_TESTES, text, parsed.start, LOOK_BACK_FAR)
            || seen_before(&IS_ELEVATION, text, parsed.start, LOOK_BACK_FAR)
            || seen_before(&IS_ID, text, parsed.start, LOOK_BACK_FAR)
            || seen_before(&IS_TAG, text, parsed.start, LOOK_BACK_TOTAL))
    {
        return None;
    }

    fix_up::fix_up_numeric(parsed, text)
}
