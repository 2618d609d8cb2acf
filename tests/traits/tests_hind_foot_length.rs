#![allow(clippy::unwrap_used)]

use rstest::rstest;
use traiter::{Flag, TraitKind};

use crate::helpers::{number, parse, single, units};

#[rstest]
#[case("hind foot with claw=9 mm", (0, 24))]
#[case("hindFootLengthInMM=9", (0, 20))]
#[case("HFL 9 mm", (0, 8))]
fn test_with_units(#[case] text: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::HindFootLength, text);
    assert_eq!(parsed.value, number(9.0));
    assert_eq!(parsed.units, units("mm"));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_units_inferred() {
    let parsed = single(TraitKind::HindFootLength, "HF=22");
    assert_eq!(parsed.value, number(22.0));
    assert!(parsed.has_flag(Flag::UnitsInferred));
    assert_eq!((parsed.start, parsed.end), (0, 5));
}

#[test]
fn test_shorthand_third_slot() {
    let parsed = single(TraitKind::HindFootLength, "213-91-32-23");
    assert_eq!(parsed.value, number(32.0));
    assert_eq!((parsed.start, parsed.end), (0, 12));
}

#[test]
fn test_word_between_key_and_value() {
    let parsed = single(TraitKind::HindFootLength, "hind foot total 32 mm");
    assert_eq!(parsed.value, number(32.0));
    assert_eq!((parsed.start, parsed.end), (0, 21));
}

#[test]
fn test_shorthand_after_collector() {
    let results = parse(TraitKind::HindFootLength, "collector 213-91-32-23");
    assert!(results.is_empty(), "{results:?}");
}

#[rstest]
#[case("measurements: 143-63-20", (0, 23))]
#[case("meas: 85:40:[20]", (0, 16))]
fn test_truncated_shorthand(#[case] text: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::HindFootLength, text);
    assert_eq!(parsed.value, number(20.0));
    assert!(parsed.has_flag(Flag::Shorthand));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_ear_needs_the_full_notation() {
    let results = parse(TraitKind::EarLength, "measurements: 143-63-20");
    assert!(results.is_empty(), "{results:?}");
}
