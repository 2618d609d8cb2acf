//! Hind foot length.

use super::RuleTable;
use super::fix_up;
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{Reducer, ShorthandPart, UnitsSource};

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
        .map(|parser| parser.with_fix_up(fix_up::fix_up_numeric))
}

fn lex_rules() -> Vec<Fragment> {
    let mut rules = vec![
        Fragment::new(
            "key_with_units",
            r"\b (?: hind [\s_-]* )? foot [\s_-]* (?: length | len ) [\s_-]* in [\s_-]*
              (?: millimeters? | mm ) \b",
        ),
        Fragment::new(
            "key",
            r"\b (?: hind [\s-]* foot [\s-]* with [\s-]* claw
                   | hind [\s-]* foot (?: [\s-]* (?: length | len ) )?
                   | hfl | hf ) \b",
        ),
        vocabulary::shorthand_key_rule(),
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
        // E.g.: hindFoot = 9/16 inches
        .add("key fraction len_units", Reducer::fraction(1, Token(2)))
        .add("key fraction", Reducer::fraction(1, Inferred))
        .add("key range len_units", Reducer::numeric(1, Token(2)))
        .add("key range", Reducer::numeric(1, Inferred))
        // A stray word between key and value, like `hind foot (total) 32 mm`
        .add("key word range len_units", Reducer::numeric(2, Token(3)))
        .add("key word range", Reducer::numeric(2, Inferred))
        .add("shorthand_key shorthand", Reducer::shorthand(1, ShorthandPart::HindFootLength))
        // E.g.: measurements: 143-63-20
        .add("shorthand_key triple", Reducer::shorthand(1, ShorthandPart::HindFootLength))
        .add("shorthand", Reducer::shorthand(0, ShorthandPart::HindFootLength));
    table.take()
}
