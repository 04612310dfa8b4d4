use super::common::engine;
use crate::screening::engine::Confidence;

#[test]
fn table_holds_twenty_five_rules_in_catalogue_order() {
    let rules = engine().rules();

    assert_eq!(rules.len(), 25);
    assert_eq!(rules[0].name, "Jaundice (Liver Issue)");
    assert_eq!(rules[2].name, "Cyanosis");
    assert_eq!(rules[12].name, "Lupus (Butterfly Rash Indicator)");
    assert_eq!(rules[16].name, "Advanced Liver Disease");
    assert_eq!(rules[24].name, "Sun Damage / Photoaging");
}

#[test]
fn every_rule_deducts_points() {
    assert!(engine().rules().iter().all(|rule| rule.score_delta > 0));
}

#[test]
fn rule_names_are_unique() {
    let rules = engine().rules();
    let mut names: Vec<&str> = rules.iter().map(|rule| rule.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), rules.len());
}

#[test]
fn rule_views_serialize_for_the_catalogue_endpoint() {
    let views = engine().rule_views();
    let value = serde_json::to_value(&views).expect("catalogue serializes");

    assert_eq!(value.as_array().map(Vec::len), Some(25));
    assert_eq!(value[0]["name"], "Jaundice (Liver Issue)");
    assert_eq!(value[0]["confidence"], "High");
    assert_eq!(value[0]["score_delta"], 30);
    assert_eq!(value[12]["confidence"], "Very Low");
}

#[test]
fn confidence_labels_match_their_serialized_form() {
    for confidence in [
        Confidence::VeryLow,
        Confidence::Low,
        Confidence::Medium,
        Confidence::High,
    ] {
        let serialized = serde_json::to_value(confidence).expect("confidence serializes");
        assert_eq!(serialized, confidence.label());
    }
}
