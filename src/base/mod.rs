//! Foundation primitives shared by every reducer.
//!
//! - Unit lookup and conversion to canonical millimeters and grams
//! - Number parsing tolerant of thousands separators and stray characters

mod number;
mod units;

pub use number::{round2, split_range, to_float};
pub use units::{Dimension, UnitInfo, canonical_units, convert, lookup};
