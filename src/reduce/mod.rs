//! Reducers: matched token slices to [`ParsedTrait`]s.
//!
//! A [`Reducer`] is static per-rule configuration. Applying it to the
//! tokens a rule matched yields one result, or `None` to veto the match.
//! The result spans the whole match; the value may come from a part of it.

mod model;
mod numeric;
mod shorthand;
mod text;

pub use model::{Flag, ParsedTrait, Units, Value};
pub use numeric::{cross, english_units, fraction, numeric_units};
pub use shorthand::{ShorthandPart, shorthand};
pub use text::{strip_span, value_span};

use crate::lexer::Token;

/// Where a numeric reducer finds its units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsSource {
    /// No units; the value is left unconverted
    Inferred,
    /// A unit token at this index
    Token(usize),
    /// Units embedded in the key token at this index, like `tailLengthInMM`
    InKey(usize),
    /// Units fixed by the rule
    Fixed(&'static str),
}

/// Arguments shared by `numeric_units`, `fraction` and `cross`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericArgs {
    pub value: usize,
    pub units: UnitsSource,
    pub ambiguous: bool,
}

impl NumericArgs {
    pub fn new(value: usize, units: UnitsSource) -> Self {
        Self {
            value,
            units,
            ambiguous: false,
        }
    }

    pub fn ambiguous(mut self) -> Self {
        self.ambiguous = true;
        self
    }
}

/// The closed set of reductions a rule can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Literal source text from token `first` through token `last`
    ValueSpan { first: usize, last: usize },
    /// Like `ValueSpan`, trimmed of surrounding punctuation
    StripSpan { first: usize, last: usize },
    /// A number or range with optional units
    NumericUnits(NumericArgs),
    /// `WHOLE NUM/DEN` with optional units
    Fraction(NumericArgs),
    /// Length and width, like `8x5`, with optional units
    Cross(NumericArgs),
    /// Major and minor units, like `4 ft 8 in`, starting at token `start`
    EnglishUnits { start: usize, ambiguous: bool },
    /// One field of shorthand notation in token `value`
    Shorthand { value: usize, part: ShorthandPart },
}

impl Reducer {
    pub fn value_span(first: usize, last: usize) -> Self {
        Self::ValueSpan { first, last }
    }

    pub fn strip_span(first: usize, last: usize) -> Self {
        Self::StripSpan { first, last }
    }

    pub fn numeric(value: usize, units: UnitsSource) -> Self {
        Self::NumericUnits(NumericArgs::new(value, units))
    }

    pub fn numeric_ambiguous(value: usize, units: UnitsSource) -> Self {
        Self::NumericUnits(NumericArgs::new(value, units).ambiguous())
    }

    pub fn fraction(value: usize, units: UnitsSource) -> Self {
        Self::Fraction(NumericArgs::new(value, units))
    }

    pub fn fraction_ambiguous(value: usize, units: UnitsSource) -> Self {
        Self::Fraction(NumericArgs::new(value, units).ambiguous())
    }

    pub fn cross(value: usize, units: UnitsSource) -> Self {
        Self::Cross(NumericArgs::new(value, units))
    }

    pub fn cross_ambiguous(value: usize, units: UnitsSource) -> Self {
        Self::Cross(NumericArgs::new(value, units).ambiguous())
    }

    pub fn english(start: usize, ambiguous: bool) -> Self {
        Self::EnglishUnits { start, ambiguous }
    }

    pub fn shorthand(value: usize, part: ShorthandPart) -> Self {
        Self::Shorthand { value, part }
    }

    /// Largest token index this reducer reads. A rule must be longer.
    pub fn max_index(&self) -> usize {
        match *self {
            Self::ValueSpan { first, last } | Self::StripSpan { first, last } => first.max(last),
            Self::NumericUnits(args) | Self::Fraction(args) | Self::Cross(args) => match args.units {
                UnitsSource::Token(i) | UnitsSource::InKey(i) => args.value.max(i),
                UnitsSource::Inferred | UnitsSource::Fixed(_) => args.value,
            },
            Self::EnglishUnits { start, .. } => start + 3,
            Self::Shorthand { value, .. } => value,
        }
    }

    /// Reduce the matched tokens. `None` vetoes the match.
    pub fn apply(&self, matched: &[Token], raw: &str) -> Option<ParsedTrait> {
        match *self {
            Self::ValueSpan { first, last } => value_span(matched, raw, first, last),
            Self::StripSpan { first, last } => strip_span(matched, raw, first, last),
            Self::NumericUnits(args) => numeric_units(matched, raw, &args),
            Self::Fraction(args) => fraction(matched, raw, &args),
            Self::Cross(args) => cross(matched, raw, &args),
            Self::EnglishUnits { start, ambiguous } => english_units(matched, raw, start, ambiguous),
            Self::Shorthand { value, part } => shorthand(matched, raw, value, part),
        }
    }
}

/// Span of the whole match.
fn match_span(matched: &[Token]) -> Option<(usize, usize)> {
    Some((matched.first()?.start, matched.last()?.end))
}
