//! The parsed trait model.

use std::collections::BTreeSet;
use std::fmt;

/// A trait value: one number, several numbers, or literal text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Number(f64),
    /// A low/high range, or every combination of a compound range
    Range(Vec<f64>),
    Text(String),
}

impl Value {
    /// `None` for no numbers, a scalar for one, a range otherwise.
    pub fn from_numbers(numbers: Vec<f64>) -> Option<Self> {
        match numbers.as_slice() {
            [] => None,
            [single] => Some(Self::Number(*single)),
            _ => Some(Self::Range(numbers)),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> &[f64] {
        match self {
            Self::Number(n) => std::slice::from_ref(n),
            Self::Range(ns) => ns,
            Self::Text(_) => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Apply `f` to every number. Text is left alone.
    pub fn map_numbers(self, mut f: impl FnMut(f64) -> f64) -> Self {
        match self {
            Self::Number(n) => Self::Number(f(n)),
            Self::Range(ns) => Self::Range(ns.into_iter().map(f).collect()),
            text @ Self::Text(_) => text,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Range(ns) => {
                let parts: Vec<String> = ns.iter().map(f64::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Units attached to a numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Units {
    Single(String),
    /// Major and minor units of a compound value, like `["ft", "in"]`
    Compound(String, String),
}

impl Units {
    pub fn single(units: impl Into<String>) -> Self {
        Self::Single(units.into())
    }

    pub fn compound(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self::Compound(major.into(), minor.into())
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(units) => f.write_str(units),
            Self::Compound(major, minor) => write!(f, "[{major}, {minor}]"),
        }
    }
}

/// Qualifiers on a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Flag {
    /// The key could denote another trait
    AmbiguousKey,
    /// No unit token was found; the value is unconverted
    UnitsInferred,
    /// The source marked the value as an estimate
    EstimatedValue,
    /// Decoded from shorthand notation
    Shorthand,
}

/// One extracted trait value with its source span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTrait {
    pub value: Value,
    pub units: Option<Units>,
    pub flags: BTreeSet<Flag>,
    pub start: usize,
    pub end: usize,
    pub trait_name: String,
    pub field: Option<String>,
}

impl ParsedTrait {
    pub fn new(value: impl Into<Value>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            units: None,
            flags: BTreeSet::new(),
            start,
            end,
            trait_name: String::new(),
            field: None,
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Set `flag` only when `on` holds.
    pub fn with_flag_if(self, flag: Flag, on: bool) -> Self {
        if on { self.with_flag(flag) } else { self }
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_ambiguous(&self) -> bool {
        self.has_flag(Flag::AmbiguousKey)
    }

    /// The matched source text.
    pub fn text<'a>(&self, raw: &'a str) -> &'a str {
        raw.get(self.start..self.end).unwrap_or_default()
    }
}
