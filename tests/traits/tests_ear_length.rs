#![allow(clippy::unwrap_used)]

use rstest::rstest;
use traiter::{Flag, TraitKind};

use crate::helpers::{number, parse, single, units};

#[rstest]
#[case("earLengthInmm: 12", 12.0, (0, 17))]
#[case("ear from notch=17 mm", 17.0, (0, 20))]
#[case("ear 9 mm", 9.0, (0, 8))]
fn test_keyed(#[case] text: &str, #[case] expected: f64, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::EarLength, text);
    assert_eq!(parsed.value, number(expected));
    assert_eq!(parsed.units, units("mm"));
    assert!(!parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_shorthand_fourth_slot() {
    let parsed = single(TraitKind::EarLength, "308-190-45-20");
    assert_eq!(parsed.value, number(20.0));
    assert!(parsed.has_flag(Flag::Shorthand));
}

#[rstest]
#[case("E=15 mm", (0, 7))]
#[case("e/n 15 mm", (0, 9))]
fn test_single_letter_keys_are_ambiguous(#[case] text: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::EarLength, text);
    assert_eq!(parsed.value, number(15.0));
    assert_eq!(parsed.units, units("mm"));
    assert!(parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_fraction_in_inches() {
    let parsed = single(TraitKind::EarLength, "ear 1/2\" ");
    assert_eq!(parsed.value, number(12.7));
    assert_eq!(parsed.units, units("in"));
    assert_eq!((parsed.start, parsed.end), (0, 8));
}

#[rstest]
#[case::ear_tag("ear tag 1234")]
#[case::compass("Lat N 10 E 15")]
#[case::number_sign("specimen # E 12")]
#[case::east_of("E 12 N 3")]
fn test_vetoed(#[case] text: &str) {
    let results = parse(TraitKind::EarLength, text);
    assert!(results.is_empty(), "{results:?}");
}
