//! Sex: `male`, `female`, or whatever follows a `sex` key.

use super::RuleTable;
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::Fragment;
use crate::reduce::{ParsedTrait, Reducer};

// More mentions than this is a list of options, not a sex
const MAX_MENTIONS: usize = 2;

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &[], &lex_rules(), rules()).map(|parser| parser.with_post_process(post_process))
}

fn lex_rules() -> Vec<Fragment> {
    vec![
        Fragment::new("key", r"\b sex \b"),
        Fragment::new("sex", r"\b (?: males? | females? ) \b"),
        Fragment::new("quest", r"[?]"),
        Fragment::new("letter", r"\b [mf] \b"),
        // Keeps `sex and ...` from reading `and` as a value
        Fragment::new("conj", r"\b (?: and | or | was | is ) \b"),
        Fragment::new("word", r"\b [a-z] \w*"),
    ]
}

fn rules() -> Vec<(String, Action)> {
    let mut table = RuleTable::new();
    table
        .add("key sex quest", Reducer::value_span(1, 2))
        .add("key sex", Reducer::value_span(1, 1))
        .add("key letter", Reducer::value_span(1, 1))
        .add("key word", Reducer::value_span(1, 1))
        .add("sex quest", Reducer::value_span(0, 1))
        .add("sex", Reducer::value_span(0, 0));
    table.take()
}

fn post_process(results: Vec<ParsedTrait>, _text: &str) -> Vec<ParsedTrait> {
    if results.len() > MAX_MENTIONS {
        tracing::debug!(mentions = results.len(), "too many sex mentions");
        return Vec::new();
    }
    results
}
