//! Testes state: descended, scrotal, abdominal and their negations.
//!
//! State phrases collapse into a `desc` token and keyed phrases into a
//! `record` token before any value is reduced. Size measurements, like
//! `5x3 mm`, collapse into `length` and are absorbed by the key before them.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleTable;
use super::fix_up::context;
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{Flag, ParsedTrait, Reducer};

// Gonads may be ovaries
static IS_GONADS: LazyLock<Regex> = LazyLock::new(|| context(r"\b gonads? \b"));

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
        .map(|parser| parser.with_fix_up(fix_up))
}

fn lex_rules() -> Vec<Fragment> {
    vec![
        Fragment::new("label", r"\b reproductive [\s_.-]? (?: data | state | condition )"),
        Fragment::new("testes", r"\b (?: testes | testis | testicles? | test ) \b"),
        Fragment::new("abbrev", r"\b (?: tes | ts | tnd | td | tns | ta | t ) \b"),
        Fragment::new("fully", r"\b (?: fully | (?: in )? complete (?: ly )? ) \b"),
        Fragment::new("partially", r"\b (?: partially | part | pt | slightly | slight ) \b"),
        Fragment::new("not", r"\b (?: not \b | non | no \b | semi | sub )"),
        Fragment::new("descended", r"(?: un )? (?: des?c?end (?: ed )? | desc? ) \b"),
        Fragment::new("state_abbrev", r"\b (?: ns | sc ) \b"),
        Fragment::new("abdominal", r"\b (?: abdominal | abdomin | abdom | abd ) \b"),
        Fragment::new("scrotal", r"(?: scrotum | scrotal | scrot | nscr | scr ) \b"),
        Fragment::new(
            "size",
            r"\b (?: very \s+ )?
              (?: enlarged | enlarge | large | small | shrunken | shrunk | swollen
                | extended | unobservable | sm-med | moderate | mod | medium | med
                | minute | lg | sm | tiny ) \b
              (?: \s* sized? | [+] )?",
        ),
        Fragment::new("gonads", r"\b gonads? \b"),
        Fragment::new(
            "other_words",
            r"\b (?: cryptorchism | cryptorchid | monorchism | monorchid | inguinal ) \b",
        ),
        Fragment::new("cross", "(?&cross)"),
        vocabulary::len_units_rule(),
        vocabulary::word_rule(),
    ]
}

fn rules() -> Vec<(String, Action)> {
    let mut table = RuleTable::new();

    // Keys, with any size measurement after them absorbed
    table
        .add("label testes", Action::replace("record"))
        .add("label abbrev", Action::replace("record"))
        .add("cross len_units", Action::replace("length"))
        .add("cross", Action::replace("length"))
        .add("label length", Action::replace("label"))
        .add("record length", Action::replace("record"))
        .add("testes length", Action::replace("testes"))
        .add("abbrev length", Action::replace("abbrev"));

    for state in [
        "descended",
        "not descended",
        "abdominal descended",
        "abdominal not descended",
        "fully descended",
        "not fully descended",
        "partially descended",
        "size",
        "size descended",
        "size not descended",
    ] {
        table.add(state, Action::replace("desc"));
    }

    // E.g.: reproductive data=No testicles
    table
        .add("label not testes", Reducer::value_span(1, 2))
        .add("label not scrotal", Reducer::value_span(1, 2))
        .add("label scrotal", Reducer::value_span(1, 1));

    for key in ["record", "abbrev", "testes"] {
        table
            .add(format!("{key} desc"), Reducer::value_span(1, 1))
            .add(format!("{key} abdominal"), Reducer::value_span(1, 1))
            .add(format!("{key} scrotal"), Reducer::value_span(1, 1))
            .add(format!("{key} not scrotal"), Reducer::value_span(1, 2))
            .add(format!("{key} other_words"), Reducer::value_span(1, 1));
    }
    // A bare `t` is too weak to carry `ns` or `sc`
    table
        .add("record state_abbrev", Reducer::value_span(1, 1))
        .add("testes state_abbrev", Reducer::value_span(1, 1))
        .add("record not testes", Reducer::value_span(1, 2));

    // E.g.: no gonads
    table
        .add("not testes", Reducer::value_span(0, 1))
        .add("not scrotal", Reducer::value_span(0, 1))
        .add("not gonads", Reducer::value_span(0, 1));
    table.take()
}

fn fix_up(parsed: ParsedTrait, text: &str) -> Option<ParsedTrait> {
    let ambiguous = IS_GONADS.is_match(parsed.text(text));
    Some(parsed.with_flag_if(Flag::AmbiguousKey, ambiguous))
}
