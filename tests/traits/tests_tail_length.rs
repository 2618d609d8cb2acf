#![allow(clippy::unwrap_used)]

use rstest::rstest;
use traiter::{Flag, TraitKind};

use crate::helpers::{number, parse, single, units};

#[rstest]
#[case("tailLengthInmm: 102", 102.0, (0, 19))]
#[case("\"tailLengthInMillimeters\"=\"104\",", 104.0, (1, 30))]
fn test_key_with_units(#[case] text: &str, #[case] expected: f64, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TailLength, text);
    assert_eq!(parsed.value, number(expected));
    assert_eq!(parsed.units, units("mm"));
    assert!(!parsed.has_flag(Flag::UnitsInferred));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_key_with_separate_units() {
    let parsed = single(TraitKind::TailLength, "tail length=95 mm;");
    assert_eq!(parsed.value, number(95.0));
    assert_eq!(parsed.units, units("mm"));
    assert_eq!((parsed.start, parsed.end), (0, 17));
}

#[rstest]
#[case("tail length=95;", (0, 14))]
#[case("taillength=95;", (0, 13))]
#[case(", \"tail\":\"95\", ", (3, 12))]
fn test_units_inferred(#[case] text: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TailLength, text);
    assert_eq!(parsed.value, number(95.0));
    assert_eq!(parsed.units, None);
    assert!(parsed.has_flag(Flag::UnitsInferred));
    assert_eq!((parsed.start, parsed.end), span);
}

#[rstest]
#[case("measurements:213-91-32-23", (0, 25))]
#[case("213-91-32-23", (0, 12))]
fn test_shorthand_second_slot(#[case] text: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TailLength, text);
    assert_eq!(parsed.value, number(91.0));
    assert!(parsed.has_flag(Flag::Shorthand));
    assert_eq!((parsed.start, parsed.end), span);
}

#[rstest]
#[case::testes("reproductive data=testes abdominal; T = 3 x 1.8 ;")]
#[case::uuid("{\"created\": \"2014-10-29\", \"relatedresourceid\": \"eeba8b10-040e-4477-a0a6-870102b56234\"}")]
#[case::elevation("ELEV G.T. 3900 FT")]
#[case::body_and_tail("Body and tail: 1690 mm; Body: 114000 g")]
#[case::nose_tail("Other Measurements: nose-tail=60in., girth=39in.")]
#[case::snout_to_tail("Imm. weight 50 kg, L. snout to tip of tail 1510,")]
fn test_vetoed(#[case] text: &str) {
    let results = parse(TraitKind::TailLength, text);
    assert!(results.is_empty(), "{results:?}");
}

#[test]
fn test_char_key_is_ambiguous() {
    let parsed = single(TraitKind::TailLength, "HB 120; T 95 mm");
    assert_eq!(parsed.value, number(95.0));
    assert!(parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), (8, 15));
}

#[test]
fn test_decimal_range() {
    let parsed = single(TraitKind::TailLength, "tail length=10.5-12.5 mm;");
    assert_eq!(parsed.value, traiter::Value::Range(vec![10.5, 12.5]));
    assert_eq!(parsed.units, units("mm"));
    assert_eq!((parsed.start, parsed.end), (0, 24));
}

#[test]
fn test_truncated_shorthand() {
    let parsed = single(TraitKind::TailLength, "measurements: 143-63-20");
    assert_eq!(parsed.value, number(63.0));
    assert!(parsed.has_flag(Flag::Shorthand));
    assert_eq!((parsed.start, parsed.end), (0, 23));
}
