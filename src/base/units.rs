//! Unit table.
//!
//! Lengths convert to millimeters and masses to grams. Lookup is
//! case-insensitive and ignores dots and whitespace, so `"Lbs."`, `"c m"`
//! and `"MM"` all resolve.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::number::round2;

/// What a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Mass,
}

/// A resolved unit: its canonical spelling and factor to the base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInfo {
    pub canonical: &'static str,
    pub factor: f64,
    pub dimension: Dimension,
}

// (canonical, spellings, factor)
const LENGTHS: &[(&str, &[&str], f64)] = &[
    (
        "mm",
        &["mm", "millimeter", "millimeters", "millimetre", "millimetres"],
        1.0,
    ),
    (
        "cm",
        &["cm", "centimeter", "centimeters", "centimetre", "centimetres"],
        10.0,
    ),
    ("m", &["m", "meter", "meters", "metre", "metres"], 1000.0),
    ("ft", &["ft", "fts", "foot", "foots", "feet", "feets", "'"], 304.8),
    ("in", &["in", "ins", "inch", "inchs", "inches", "\""], 25.4),
];

const MASSES: &[(&str, &[&str], f64)] = &[
    (
        "g",
        &["g", "gs", "gm", "gms", "gr", "grs", "gram", "grams", "gramme", "grammes"],
        1.0,
    ),
    ("mg", &["mg", "mgs", "milligram", "milligrams"], 0.001),
    (
        "kg",
        &["kg", "kgs", "kilo", "kilos", "kilogram", "kilograms"],
        1000.0,
    ),
    ("lbs", &["lb", "lbs", "pound", "pounds"], 453.592_37),
    ("oz", &["oz", "ozs", "ounce", "ounces"], 28.349_523_125),
];

static UNITS: LazyLock<FxHashMap<&'static str, UnitInfo>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    for (dimension, entries) in [(Dimension::Length, LENGTHS), (Dimension::Mass, MASSES)] {
        for &(canonical, spellings, factor) in entries {
            for &spelling in spellings {
                table.insert(
                    spelling,
                    UnitInfo {
                        canonical,
                        factor,
                        dimension,
                    },
                );
            }
        }
    }
    table
});

/// Canonical spelling of every known unit, lengths first.
pub fn canonical_units() -> impl Iterator<Item = &'static str> {
    LENGTHS.iter().chain(MASSES).map(|&(canonical, _, _)| canonical)
}

/// Resolve a raw unit spelling.
pub fn lookup(raw: &str) -> Option<UnitInfo> {
    let key: String = raw
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    UNITS.get(key.as_str()).copied()
}

/// Convert `value` from `raw` units to the canonical base unit, rounded to
/// two decimals. Unknown units yield `None`.
pub fn convert(value: f64, raw: &str) -> Option<f64> {
    lookup(raw).map(|unit| round2(value * unit.factor))
}
