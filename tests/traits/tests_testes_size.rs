use rstest::rstest;
use traiter::{Flag, TraitKind};

use crate::helpers::{number, parse, range, single, spans, units};

#[rstest]
#[case("testes = 8x5 mm", range(8.0, 5.0), (0, 15))]
#[case("testes: 20mm. Sent to Berkeley 10/1/71", number(20.0), (0, 12))]
#[case("ear from notch=19 mm; reproductive data=testis 5mm ; ", number(5.0), (22, 50))]
#[case("2.3 g; reproductive data=testes: 18x8 mm; scrotal ;", range(18.0, 8.0), (7, 40))]
#[case("; reproductive data=testes scrotal; T = 9mm in length", number(9.0), (2, 43))]
#[case("testes scrotal, L testis 13x5mm", range(13.0, 5.0), (18, 31))]
fn test_size_with_units(#[case] text: &str, #[case] expected: traiter::Value, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TestesSize, text);
    assert_eq!(parsed.value, expected);
    assert_eq!(parsed.units, units("mm"));
    assert!(parsed.flags.is_empty(), "{:?}", parsed.flags);
    assert_eq!((parsed.start, parsed.end), span);
}

#[rstest]
#[case("adult ; reproductive data=NS; T=9x4 ; endoparasite ", range(9.0, 4.0), (8, 35))]
#[case("Plus Tissue; plus Baculum: Test 21x11", range(21.0, 11.0), (27, 37))]
#[case("reproductive data=testes abdominal; T = 3 x 1.8 ;", range(3.0, 1.8), (0, 47))]
#[case("testes scrotal 8x5", range(8.0, 5.0), (0, 18))]
fn test_size_units_inferred(#[case] text: &str, #[case] expected: traiter::Value, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TestesSize, text);
    assert_eq!(parsed.value, expected);
    assert_eq!(parsed.units, None);
    assert!(parsed.has_flag(Flag::UnitsInferred));
    assert!(!parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_equal_dimensions_are_kept() {
    let parsed = single(TraitKind::TestesSize, "testes 5x5 mm");
    assert_eq!(parsed.value, range(5.0, 5.0));
}

#[test]
fn test_centimeters_convert() {
    let parsed = single(TraitKind::TestesSize, "testes 1.2x0.8 cm");
    assert_eq!(parsed.value, range(12.0, 8.0));
    assert_eq!(parsed.units, units("cm"));
}

#[test]
fn test_one_result_per_key() {
    let results = parse(
        TraitKind::TestesSize,
        "testis-20mm ; reproductive data=testis-21mm ; ",
    );
    assert_eq!(spans(&results), [(0, 11), (14, 43)]);
    assert_eq!(results[0].value, number(20.0));
    assert_eq!(results[1].value, number(21.0));
}

#[test]
fn test_units_in_gonad_key() {
    let results = parse(
        TraitKind::TestesSize,
        "\"gonadLengthInMM\":\"12\", \"gonadWidthInMM\":\"5\",",
    );
    assert_eq!(spans(&results), [(1, 21), (25, 43)]);
    assert_eq!(results[0].value, number(12.0));
    assert_eq!(results[1].value, number(5.0));
    for parsed in &results {
        assert_eq!(parsed.units, units("mm"));
        assert!(parsed.is_ambiguous());
    }
}

#[test]
fn test_gonad_keys_are_ambiguous() {
    let results = parse(
        TraitKind::TestesSize,
        "left gonad width=9.1 mm; right gonad width=9.2 mm; \
         right gonad length=16.1 mm; left gonad length=16.2 mm",
    );
    let values: Vec<_> = results.iter().filter_map(|r| r.value.as_number()).collect();
    assert_eq!(values, [9.1, 9.2, 16.1, 16.2]);
    assert_eq!((results[0].start, results[0].end), (5, 23));
    assert!(results.iter().all(|r| r.is_ambiguous() && r.units == units("mm")));
}

#[test]
fn test_bare_t_is_ambiguous() {
    let parsed = single(TraitKind::TestesSize, "T 5x4 mm");
    assert_eq!(parsed.value, range(5.0, 4.0));
    assert!(parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), (0, 8));
}

#[rstest]
#[case::mass("testes 8 g")]
#[case::state_only("reproductive data=testes scrotal")]
#[case::no_key("5x4 mm")]
fn test_no_size(#[case] text: &str) {
    let results = parse(TraitKind::TestesSize, text);
    assert!(results.is_empty(), "{results:?}");
}
