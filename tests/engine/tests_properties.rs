//! Property tests for the lexer, grammar and parser.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use traiter::{SENTINEL, TraitKind, Window, base};

use crate::helpers::{parse, parser};

/// Annotation-like text built from words the lexers care about.
fn annotation_strategy() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "total length", "TL", "tail", "T", "HF", "ear", "E", "weight", "wt.", "sex", "male",
        "female", "age", "adult", "juv", "testes", "scrotal", "not", "descended", "=", ":", ";",
        ",", "12", "3.5", "20-30", "1/2", "mm", "cm", "g", "lbs", "oz", "ft", "in", "\"",
        "308-190-45-20", "collector", "trap", "élev", "{", "}",
    ]);
    prop::collection::vec(pieces, 0..16).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn test_tokens_are_ordered_and_end_with_sentinel(text in annotation_strategy()) {
        for kind in TraitKind::ALL {
            let tokens = parser(kind).lexer().tokenize(&text);
            let (last, rest) = tokens.split_last().unwrap();
            prop_assert_eq!(last.kind.as_str(), SENTINEL);
            prop_assert_eq!((last.start, last.end), (text.len(), text.len()));

            let mut position = 0;
            for token in rest {
                prop_assert!(!token.is_sentinel());
                prop_assert!(token.start >= position, "{kind}: {token:?} overlaps");
                prop_assert!(token.start <= token.end);
                prop_assert!(text.is_char_boundary(token.start) && text.is_char_boundary(token.end));
                position = token.end;
            }
        }
    }

    #[test]
    fn test_arbitrary_text_never_panics(text in "\\PC{0,80}") {
        for kind in TraitKind::ALL {
            for parsed in parse(kind, &text) {
                prop_assert!(parsed.start <= parsed.end && parsed.end <= text.len());
                prop_assert_eq!(parsed.trait_name.as_str(), kind.name());
            }
        }
    }

    #[test]
    fn test_results_cover_source_text(text in annotation_strategy()) {
        for kind in TraitKind::ALL {
            for parsed in parse(kind, &text) {
                prop_assert!(parsed.start < parsed.end, "{kind}: empty span {parsed:?}");
                prop_assert!(text.get(parsed.start..parsed.end).is_some());
            }
        }
    }

    #[test]
    fn test_millimeters_convert_to_themselves(value in 0.0f64..100_000.0) {
        prop_assert_eq!(base::convert(value, "mm"), Some(base::round2(value)));
        prop_assert_eq!(base::convert(value, "g"), Some(base::round2(value)));
    }

    #[test]
    fn test_conversion_round_trips_within_rounding(
        value in 0.0f64..100_000.0,
        unit in prop::sample::select(base::canonical_units().collect::<Vec<_>>()),
    ) {
        let info = base::lookup(unit).unwrap();
        prop_assert_eq!(info.canonical, unit);
        let converted = base::convert(value, unit).unwrap();
        let back = converted / info.factor;
        // Rounding to hundredths of the base unit, scaled back
        let tolerance = 0.005 / info.factor + 1e-9 * value.max(1.0) / info.factor.min(1.0);
        prop_assert!(
            (back - value).abs() <= tolerance,
            "{value} {unit} -> {converted} -> {back}"
        );
    }
}

#[test]
fn test_every_rule_position_has_a_window() {
    for kind in TraitKind::ALL {
        let grammar = parser(kind).grammar();
        for rule in grammar.rules() {
            for (position, token_kind) in rule.kinds().enumerate() {
                let window = Window::new(position + 1, rule.len - position - 1);
                assert!(
                    grammar.windows(token_kind).contains(&window),
                    "{kind}: rule {:?} has no window {window:?} for {token_kind}",
                    rule.key
                );
            }
        }
    }
}

#[test]
fn test_windows_are_longest_first() {
    for kind in TraitKind::ALL {
        let grammar = parser(kind).grammar();
        for rule in grammar.rules() {
            for token_kind in rule.kinds() {
                let windows = grammar.windows(token_kind);
                for pair in windows.windows(2) {
                    let first = (pair[0].span(), pair[0].behind);
                    let second = (pair[1].span(), pair[1].behind);
                    assert!(first >= second, "{kind}: {token_kind} windows out of order");
                }
            }
        }
    }
}
