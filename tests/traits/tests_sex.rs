use rstest::rstest;
use traiter::TraitKind;

use crate::helpers::{parse, single, spans, texts};

#[rstest]
#[case("sex=female ?", "female ?", (0, 12))]
#[case("sex=unknown ; crown-rump length=8 mm", "unknown", (0, 11))]
#[case("sex=F crown rump length=8 mm", "F", (0, 5))]
#[case("Sex: male", "male", (0, 9))]
fn test_keyed(#[case] text: &str, #[case] expected: &str, #[case] span: (usize, usize)) {
    let parsed = single(TraitKind::Sex, text);
    assert_eq!(parsed.value.as_text(), Some(expected));
    assert_eq!((parsed.start, parsed.end), span);
}

#[test]
fn test_unkeyed_mentions() {
    let results = parse(TraitKind::Sex, "words male female unknown more words");
    assert_eq!(texts(&results), ["male", "female"]);
    assert_eq!(spans(&results), [(6, 10), (11, 17)]);
}

#[test]
fn test_conjunction() {
    let results = parse(TraitKind::Sex, "male or female");
    assert_eq!(spans(&results), [(0, 4), (8, 14)]);
}

#[rstest]
#[case::too_many("words male female male more words")]
#[case::key_without_value("Respective sex and msmt. in mm")]
fn test_no_sex(#[case] text: &str) {
    let results = parse(TraitKind::Sex, text);
    assert!(results.is_empty(), "{results:?}");
}
