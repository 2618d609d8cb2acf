//! Life stage: controlled vocabulary, keyed free text and age phrases.

use super::RuleTable;
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::Fragment;
use crate::reduce::Reducer;

const TIME_UNITS: &str = r"(?: years? | months? | weeks? | days? | hours? )";

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    let defines = [Fragment::new("time_units", TIME_UNITS)];
    TraitParser::build(name, &defines, &lex_rules(), rules())
}

fn lex_rules() -> Vec<Fragment> {
    vec![
        Fragment::new(
            "json_key",
            r"\b (?: life [\s_-]* stage (?: [\s_-]* remarks? )?
                   | age [\s_-]* class
                   | age [\s_-]* in [\s_-]* (?&time_units)
                   | age ) \b",
        ),
        Fragment::new(
            "intrinsic",
            r"\b (?: yolk \s? sac | young [\s-]? of [\s-]? the [\s-]? year
                   | adult \s* young | young \s* adult ) \b",
        ),
        Fragment::new(
            "intrinsic",
            r"\b (?: ads? | adulte?s?
                   | chicks?
                   | fledgelings? | fleglings? | fry
                   | hatched | hatchlings?
                   | imagos? | imms? | immatures?
                   | jeunes? | juvs? | juveniles? | juvéniles?
                   | larvae? | larvals? | larves? | leptocephales? | leptocephalus
                   | matures? | metamorphs?
                   | neonates? | nestlings? | nulliparous
                   | premetamorphs?
                   | sub-adults? | subads? | subadulte?s?
                   | tadpoles? | têtard
                   | yearlings? | ygs? | young ) \b",
        ),
        // What follows is not a life stage, like `age determined by`
        Fragment::new("skip", r"\b determin \w*"),
        Fragment::new(
            "ordinal",
            r"\b (?: 1st | 2nd | 3rd | 4th | 5th | first | second | third | fourth | fifth ) \b",
        ),
        Fragment::new("after", r"\b after \b"),
        Fragment::new("hatching", r"\b hatching \b"),
        Fragment::new("time_units", r"\b (?&time_units) \b"),
        // Compound stages, like `adult/juvenile`
        Fragment::new("joiner", r"[/-]"),
        Fragment::new("sep", r"[;,?]"),
        Fragment::new("word", r"\b \w [\w?.-]*"),
    ]
}

fn rules() -> Vec<(String, Action)> {
    let mut table = RuleTable::new();
    table
        // E.g.: after hatching year, 2nd month
        .add("after ordinal time_units", Action::replace("as_time"))
        .add("after hatching time_units", Action::replace("as_time"))
        .add("ordinal time_units", Action::replace("as_time"))
        .add("hatching time_units", Action::replace("as_time"))
        .add("time_units", Action::replace("word"))
        .add("word word", Action::replace("word"))
        .add("json_key intrinsic joiner intrinsic", Reducer::value_span(1, 3))
        .add("json_key word joiner intrinsic", Reducer::value_span(1, 3))
        .add("json_key intrinsic intrinsic", Reducer::value_span(1, 2))
        .add("json_key word intrinsic", Reducer::value_span(1, 2))
        .add("json_key intrinsic", Reducer::value_span(1, 1))
        .add("json_key as_time", Reducer::value_span(1, 1))
        // Free text ending at a separator, like `LifeStage Remarks: 5-6 wks;`
        .add("json_key word sep", Reducer::value_span(1, 1))
        .add("json_key word -END-", Reducer::value_span(1, 1))
        .add("intrinsic", Reducer::value_span(0, 0))
        .add("as_time", Reducer::value_span(0, 0));
    table.take()
}
