//! Serialized results, for consumers that write JSON.

#![allow(clippy::unwrap_used)]

use traiter::{ExtractOptions, Extractor, ParsedTrait, Record, TraitKind};

#[test]
fn test_parsed_trait_round_trips_through_json() {
    let extractor = Extractor::new(ExtractOptions::with_traits([TraitKind::TotalLength])).unwrap();
    let record = Record::new().with_field("remarks", "total length=2 ft");
    let results = extractor.extract_record(&record);
    assert_eq!(results.len(), 1);

    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(json["trait_name"], "total_length");
    assert_eq!(json["field"], "remarks");
    assert_eq!(json["start"], 0);

    let back: ParsedTrait = serde_json::from_value(json).unwrap();
    assert_eq!(back, results[0]);
}

#[test]
fn test_trait_kind_uses_snake_case() {
    let json = serde_json::to_string(&TraitKind::HindFootLength).unwrap();
    assert_eq!(json, "\"hind_foot_length\"");
    let kind: TraitKind = serde_json::from_str("\"body_mass\"").unwrap();
    assert_eq!(kind, TraitKind::BodyMass);
}

#[test]
fn test_record_keeps_field_order() {
    let record: Record = serde_json::from_str(r#"{"fields":{"b":"male","a":"12 g"}}"#).unwrap();
    let names: Vec<&str> = record.fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["b", "a"]);
}
