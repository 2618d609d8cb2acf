#![allow(clippy::unwrap_used)]

use rstest::rstest;
use traiter::{Flag, TraitKind, Units};

use crate::helpers::{number, parse, range, single, units};

#[rstest]
#[case("body mass=20 g", 20.0, (0, 14))]
#[case("Body: 15 g", 15.0, (0, 10))]
#[case("weighed 36 g", 36.0, (0, 12))]
#[case("wt. 36 g", 36.0, (0, 8))]
fn test_keyed_in_grams(#[case] text: &str, #[case] expected: f64, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::BodyMass, text);
    assert_eq!(parsed.value, number(expected));
    assert_eq!(parsed.units, units("g"));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_units_in_key() {
    let parsed = single(TraitKind::BodyMass, "{ \"massingrams\"=\"20.1\" }");
    assert_eq!(parsed.value, number(20.1));
    assert_eq!(parsed.units, units("g"));
    assert_eq!((parsed.start, parsed.end), (3, 21));
}

#[test]
fn test_pounds_in_key_convert_to_grams() {
    let parsed = single(
        TraitKind::BodyMass,
        "{\"earLengthInmm\":\"X\", \"weightInlbs\":\"22\"}",
    );
    assert_eq!(parsed.value, number(9979.03));
    assert_eq!(parsed.units, units("lbs"));
    assert_eq!((parsed.start, parsed.end), (23, 39));
}

#[test]
fn test_english_units() {
    let parsed = single(TraitKind::BodyMass, "2 lbs. 3.1 - 4.5 oz ");
    assert_eq!(parsed.value, range(995.06, 1034.75));
    assert_eq!(parsed.units, Some(Units::compound("lbs", "oz")));
    assert!(parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), (0, 19));
}

#[test]
fn test_range_without_units() {
    let parsed = single(TraitKind::BodyMass, "\"weight: 20.5-31.8");
    assert_eq!(parsed.value, range(20.5, 31.8));
    assert!(parsed.has_flag(Flag::UnitsInferred));
    assert_eq!((parsed.start, parsed.end), (1, 18));
}

#[test]
fn test_units_in_parentheses() {
    let parsed = single(TraitKind::BodyMass, "TL (mm) 44,SL (mm) 38,Weight (g) 0.77 xx");
    assert_eq!(parsed.value, number(0.77));
    assert_eq!(parsed.units, units("g"));
    assert_eq!((parsed.start, parsed.end), (22, 37));
}

#[rstest]
#[case("762-292-121-76 2435.0g", 2435.0, (0, 22))]
#[case("82-00-15-21-tr7-fa63-41g", 41.0, (0, 24))]
#[case("{\"measurements\":\"143-63-20-17=13 g\" }", 13.0, (2, 34))]
fn test_shorthand_with_units(#[case] text: &str, #[case] expected: f64, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::BodyMass, text);
    assert_eq!(parsed.value, number(expected));
    assert_eq!(parsed.units, units("g"));
    assert!(parsed.has_flag(Flag::Shorthand));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_shorthand_without_units() {
    let parsed = single(TraitKind::BodyMass, "143-63-20-17=13");
    assert_eq!(parsed.value, number(13.0));
    assert!(parsed.has_flag(Flag::UnitsInferred));
}

#[rstest]
#[case::uuid("c701563b-dbd9-4500-184f-1ad61eb8da11")]
#[case::catalog_numbers("Specimen #'s - 5491,5492,5498,5499,5505,5526,5527,5528,5500,5507,5508,5590,")]
#[case::collector("collector 143-63-20-17=13 g")]
fn test_no_mass(#[case] text: &str) {
    let results = parse(TraitKind::BodyMass, text);
    assert!(results.is_empty(), "{results:?}");
}
