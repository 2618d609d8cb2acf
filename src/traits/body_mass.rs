//! Body mass. Values convert to grams.

use super::RuleTable;
use super::fix_up;
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{Reducer, ShorthandPart, UnitsSource};

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
        .map(|parser| parser.with_fix_up(fix_up::fix_up_shorthand))
}

fn lex_rules() -> Vec<Fragment> {
    let mut rules = vec![
        Fragment::new(
            "key_with_units",
            r"\b (?: weight | mass ) [\s_-]* in [\s_-]*
              (?: grams? | g | lbs? | pounds? | kg | kilograms? | oz | ounces? ) \b",
        ),
        Fragment::new("key_leader", r"\b (?: full | observed | total ) \b"),
        Fragment::new("weight", r"\b (?: weights? | weigh (?: s | ed | ing )? ) \b"),
        Fragment::new("key_with_dots", r"\b w \.? t s? \b \.?"),
        Fragment::new("mass", r"\b mass \b"),
        Fragment::new("body", r"\b body \b"),
        vocabulary::shorthand_key_rule(),
    ];
    rules.extend(vocabulary::numeric_rules());
    rules.push(Fragment::new("mass_units", "(?&mass_units)"));
    rules.push(Fragment::new("sep", "[;]"));
    rules.push(vocabulary::word_rule());
    rules
}

fn rules() -> Vec<(String, Action)> {
    use UnitsSource::{InKey, Inferred, Token};

    let mut table = RuleTable::new();
    table
        // Every spelling of the key becomes one kind
        .add("key_leader weight", Action::replace("wt_key"))
        .add("key_leader mass", Action::replace("wt_key"))
        .add("body weight", Action::replace("wt_key"))
        .add("body mass", Action::replace("wt_key"))
        .add("body", Action::replace("wt_key"))
        .add("weight", Action::replace("wt_key"))
        .add("mass", Action::replace("wt_key"))
        .add("key_with_dots", Action::replace("wt_key"))
        // E.g.: weightInGrams = 20
        .add("key_with_units range", Reducer::numeric(1, InKey(0)))
        .add("wt_key range mass_units", Reducer::numeric(1, Token(2)))
        .add("wt_key mass_units range", Reducer::numeric(2, Token(1)))
        .add("wt_key range", Reducer::numeric(1, Inferred))
        .add("shorthand_key range mass_units", Reducer::numeric(1, Token(2)))
        .add("shorthand_key mass_units range", Reducer::numeric(2, Token(1)))
        // E.g.: 2 lbs. 3.1 - 4.5 oz
        .add("wt_key range mass_units range mass_units", Reducer::english(1, false))
        .add("range mass_units range mass_units", Reducer::english(0, true))
        .add("shorthand_key shorthand", Reducer::shorthand(1, ShorthandPart::Mass))
        .add("shorthand", Reducer::shorthand(0, ShorthandPart::Mass));
    table.take()
}
