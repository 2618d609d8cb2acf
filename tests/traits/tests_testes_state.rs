use rstest::rstest;
use traiter::TraitKind;

use crate::helpers::{parse, single};

#[rstest]
#[case("testes descended", "descended", (0, 16))]
#[case("testes undescended", "undescended", (0, 18))]
#[case("testes undesc.", "undesc", (0, 13))]
#[case("testes not fully descended", "not fully descended", (0, 26))]
#[case("testes not-scrotal", "not-scrotal", (0, 18))]
#[case("testes no scrotum", "no scrotum", (0, 17))]
#[case("testis nscr", "nscr", (0, 11))]
#[case("testes ns", "ns", (0, 9))]
#[case("tes undescend.", "undescend", (0, 13))]
#[case("t abdominal", "abdominal", (0, 11))]
#[case("t nscr", "nscr", (0, 6))]
fn test_state_after_key(#[case] text: &str, #[case] expected: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TestesState, text);
    assert_eq!(parsed.value.as_text(), Some(expected));
    assert_eq!((parsed.start, parsed.end), span);
    assert!(!parsed.is_ambiguous());
}

#[rstest]
#[case(
    "some words reproductive data=No testicles; more words",
    "No testicles",
    (11, 41)
)]
#[case(
    "hind foot with claw=35 mm; reproductive data=Testes partially descended. Sperm present.",
    "partially descended",
    (27, 71)
)]
#[case(
    "sex=male ; reproductive data=testis 5mm, abdominal ; ear from notch=20 mm; ",
    "abdominal",
    (11, 50)
)]
#[case(
    "weight=36 g; reproductive data=testes: 11x7 mm (scrotal)",
    "scrotal",
    (13, 55)
)]
fn test_labelled(#[case] text: &str, #[case] expected: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::TestesState, text);
    assert_eq!(parsed.value.as_text(), Some(expected));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_gonads_are_ambiguous() {
    let parsed = single(TraitKind::TestesState, "tag# 1089; bag# 156; no gonads");
    assert_eq!(parsed.value.as_text(), Some("no gonads"));
    assert!(parsed.is_ambiguous());
    assert_eq!((parsed.start, parsed.end), (21, 30));
}

#[test]
fn test_bare_t_with_abbreviated_state() {
    let results = parse(TraitKind::TestesState, "t ns");
    assert!(results.is_empty(), "{results:?}");
}
