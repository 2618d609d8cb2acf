//! Testes size: `testes = 8x5 mm`, `reproductive data=testis 5mm`.
//!
//! Sizes are one or two dimensions. Two dimensions are reported as two
//! numbers, length first. A key may be separated from its value by up to
//! two state words, plain words or separators when another testes word
//! comes right before the value, like `testes scrotal; T = 9mm`.
//! Gonad keys and a bare `t` are flagged ambiguous.

use super::RuleTable;
use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;
use crate::pattern::{Fragment, vocabulary};
use crate::reduce::{Reducer, UnitsSource};

// Tokens that may sit between a key and the word before its value
const FILLERS: [&str; 3] = ["state", "word", "sep"];

// (key, words that may come right before the value after a gap, ambiguous)
const KEYS: &[(&str, &[&str], bool)] = &[
    ("label testes", &["abbrev", "state", "char_key"], false),
    ("label abbrev", &["state", "char_key"], false),
    ("label char_key", &["state"], false),
    ("label", &["testes", "abbrev", "state", "char_key"], false),
    ("testes", &["abbrev", "state", "char_key"], false),
    ("abbrev", &["state", "char_key"], false),
    ("key_with_units", &["testes", "abbrev", "state", "char_key"], true),
    ("ambiguous_key", &["testes", "abbrev", "state", "char_key"], true),
    ("char_key", &[], true),
];

pub(super) fn parser(name: &str) -> Result<TraitParser> {
    TraitParser::build(name, &vocabulary::DEFINES, &lex_rules(), rules())
}

fn lex_rules() -> Vec<Fragment> {
    vec![
        Fragment::new("label", r"\b reproductive [\s_.-]? (?: data | state | condition )"),
        // E.g.: gonadLengthInMM
        Fragment::new(
            "key_with_units",
            r"\b (?: gonad | testes | testis ) [\s_-]* (?: length | len | width ) [\s_-]*
              in [\s_-]* (?: millimeters? | mm ) \b",
        ),
        // Gonads may be ovaries
        Fragment::new("ambiguous_key", r"\b gonads? [\s_-]* (?: length | len | width | size ) \b"),
        Fragment::new("testes", r"\b (?: testes | testis | testicles? | test ) \b"),
        Fragment::new("abbrev", r"\b (?: tes | ts | tnd | td | tns | ta ) \b"),
        Fragment::new("char_key", r"\b t \b"),
        Fragment::new(
            "state",
            r"\b (?: un )? (?: des?c?end (?: ed )? | desc? ) \b
            | \b (?: abdominal | abdomin | abdom | abd | scrotum | scrotal | scrot | nscr | scr
                   | ns | sc | enlarged | large | small | fully | partially | not ) \b",
        ),
        Fragment::new("uuid", "(?&uuid)"),
        Fragment::new("date", "(?&date)"),
        Fragment::new("cross", "(?&cross)"),
        vocabulary::len_units_rule(),
        Fragment::new("mass_units", "(?&mass_units)"),
        Fragment::new("sep", "[;,]"),
        vocabulary::word_rule(),
    ]
}

fn rules() -> Vec<(String, Action)> {
    let mut table = RuleTable::new();
    for &(key, anchors, ambiguous) in KEYS {
        add_values(&mut table, key, ambiguous);
        for gap in gaps() {
            for &anchor in anchors {
                let mut tokens = vec![key];
                tokens.extend(&gap);
                tokens.push(anchor);
                let prefix = tokens.join(" ");
                // Already a key of its own
                if KEYS.iter().any(|(other, ..)| *other == prefix) {
                    continue;
                }
                add_values(&mut table, &prefix, ambiguous);
            }
        }
    }
    table.take()
}

// Up to two fillers, in any order
fn gaps() -> Vec<Vec<&'static str>> {
    let mut gaps = vec![Vec::new()];
    for first in FILLERS {
        gaps.push(vec![first]);
        for second in FILLERS {
            gaps.push(vec![first, second]);
        }
    }
    gaps
}

fn add_values(table: &mut RuleTable, prefix: &str, ambiguous: bool) {
    use UnitsSource::{InKey, Inferred, Token};

    let value = prefix.split_whitespace().count();
    let in_key = prefix.starts_with("key_with_units");
    let reducer = |units: UnitsSource| {
        let units = if in_key { InKey(0) } else { units };
        if ambiguous {
            Reducer::cross_ambiguous(value, units)
        } else {
            Reducer::cross(value, units)
        }
    };

    table
        .add(format!("{prefix} cross len_units"), reducer(Token(value + 1)))
        .add(format!("{prefix} cross"), reducer(Inferred))
        // E.g.: testes 8 g
        .add(format!("{prefix} cross mass_units"), Action::replace("mass"));
}
