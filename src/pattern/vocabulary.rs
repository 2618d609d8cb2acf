//! Shared vocabulary for trait lexers.
//!
//! [`DEFINES`] holds the fragments every numeric trait builds on. The
//! `*_rule` helpers return lex rules that trait lexers place at the
//! precedence level they need.
//!
//! The regex engine has no look-around, so context is handled by ordering:
//! a generic `word` rule consumes letters from the start of each word, and
//! `date` and `uuid` rules claim digit runs before `range` can split them.
//! Each date or shorthand form spells out its separator so both gaps use
//! the same one.

use std::sync::LazyLock;

use super::Fragment;

/// Positive decimal with optional thousands separators.
pub const DECIMAL: &str = r"(?: \d{1,3} (?: , \d{3} ){1,3} | \d+ ) (?: \. \d+ )?";

/// A known or unknown shorthand field.
pub const SHORTHAND_VAL: &str = r"(?: (?&decimal) | [?x]{1,2} )";

/// Mass units as spelled in the wild.
pub const MASS_UNITS: &str = r"
    (?: milligrams? | kilograms? | grams? | grammes?
      | pounds? | lbs? | ounces? | ozs?
      | m \.? g | k \.? g | g [mr]? s? | kilos?
    ) \b
";

// One alternative per separator.
fn per_separator(form: fn(&str) -> String) -> String {
    [r"-", r":", r"/"].map(form).join(" | ")
}

fn shorthand_for(sep: &str) -> String {
    format!(
        r"
        \[? (?&shorthand_val) \]?
        {sep} \[? (?&shorthand_val) \]?
        {sep} \[? (?&shorthand_val) \]?
        {sep} \[? (?&shorthand_val) \]?
        (?: {sep} [a-z]{{1,4}} (?&shorthand_val) )*
        (?: [\s=:/-] \s* \[? \s* (?&shorthand_val) \s* \]? (?: \s* (?&mass_units) )? \]? )?
        "
    )
}

// Truncated shorthand: the ear and weight fields are missing.
fn triple_for(sep: &str) -> String {
    format!(
        r"
        \[? (?&shorthand_val) \]?
        {sep} \[? (?&shorthand_val) \]?
        {sep} \[? (?&shorthand_val) \]?
        "
    )
}

// Day and month fields stay under 40, so `85-40-15` is not a date.
fn date_for(sep: &str) -> String {
    format!(
        r"\d{{4}} {sep} \d{{1,2}} {sep} \d{{1,2}} | [0-3]? \d {sep} [0-3]? \d {sep} \d{{2,4}}"
    )
}

/// Define fragments shared by every numeric trait.
pub static DEFINES: LazyLock<Vec<Fragment>> = LazyLock::new(|| {
    vec![
        Fragment::new("decimal", DECIMAL),
        Fragment::new("range_sep", r"(?: \s* (?: - | – | \b to \b ) \s* )"),
        Fragment::new("range", r"(?&decimal) (?: (?&range_sep) (?&decimal) )?"),
        Fragment::new("fraction", r"(?: \d+ \s+ )? \d+ / \d+"),
        // Two dimensions, like `11x7`
        Fragment::new("cross", r"(?&decimal) (?: \s* [x×*] \s* (?&decimal) )?"),
        Fragment::new(
            "metric_len",
            r"(?: millimet(?:er|re)s? | centimet(?:er|re)s? | met(?:er|re)s? | [cm] [\s.]? m ) \b",
        ),
        Fragment::new("feet", r"(?: feet | foots? | fts? ) \b"),
        Fragment::new("inches", r"(?: inch (?: es )? | ins? ) \b"),
        Fragment::new("mass_units", MASS_UNITS),
        Fragment::new("shorthand_val", SHORTHAND_VAL),
        Fragment::new("shorthand", per_separator(shorthand_for)),
        Fragment::new("triple", per_separator(triple_for)),
        Fragment::new(
            "shorthand_key",
            r"
            \b (?: on \s* tag | specimens? | catalog
                 | measurements? [:.,]{0,2} | mesurements? [:.,]{0,2}
                 | meas [:.,]{1,2}
                 | tag \s+ \d+ \s* =? (?: male | female )? \s* ,
            )
            ",
        ),
        Fragment::new("date", [r"-", r"/", r"\."].map(date_for).join(" | ")),
        Fragment::new(
            "uuid",
            r"[0-9a-f]{8} - [0-9a-f]{4} - [0-9a-f]{4} - [0-9a-f]{4} - [0-9a-f]{12}",
        ),
    ]
});

/// Numeric rules in the order every numeric lexer lists them: shorthand
/// before dates, dates before truncated shorthand, then fractions and
/// plain ranges.
pub fn numeric_rules() -> Vec<Fragment> {
    vec![
        Fragment::new("uuid", "(?&uuid)"),
        Fragment::new("shorthand", "(?&shorthand)"),
        Fragment::new("date", "(?&date)"),
        Fragment::new("triple", "(?&triple)"),
        Fragment::new("fraction", "(?&fraction)"),
        Fragment::new("range", "(?&range)"),
    ]
}

/// Length unit rules, each its own kind.
pub fn length_unit_rules() -> Vec<Fragment> {
    vec![
        Fragment::new("metric_len", "(?&metric_len)"),
        Fragment::new("feet", "(?&feet)"),
        Fragment::new("inches", "(?&inches)"),
    ]
}

/// Length units collapsed into one kind.
pub fn len_units_rule() -> Fragment {
    Fragment::new("len_units", "(?&metric_len) | (?&feet) | (?&inches)")
}

pub fn shorthand_key_rule() -> Fragment {
    Fragment::new("shorthand_key", "(?&shorthand_key)")
}

/// Any word, starting at a word boundary. Lexers list it last.
pub fn word_rule() -> Fragment {
    Fragment::new("word", r"\b [a-z] \w*")
}
