use super::common::*;
use crate::screening::classifier::AttributeLabel;
use crate::screening::features::FaceRegion;

#[test]
fn jaundice_fires_alone_on_yellow_tone() {
    let engine = engine();
    let report = engine.screen(&jaundice_record());

    assert_eq!(report.diseases.len(), 1);
    assert_eq!(report.diseases[0].name, "Jaundice (Liver Issue)");
    assert_eq!(report.health_score, 70);
    assert_eq!(
        report.recommendations,
        vec!["Consult a hepatologist immediately".to_string()]
    );
}

#[test]
fn neutral_record_produces_healthy_fallback() {
    let engine = engine();
    let report = engine.screen(&neutral_record());

    assert_eq!(report.diseases.len(), 1);
    assert_eq!(report.diseases[0].name, "Healthy");
    assert_eq!(report.health_score, 100);
}

#[test]
fn malnutrition_always_arrives_with_dehydration() {
    // Malnutrition's thresholds (sat<25, val<90, sharpness<50) strictly imply
    // dehydration's (val<100, sharpness<60), so the two fire together.
    let mut record = neutral_record();
    record.saturation = 10.0;
    record.value = 80.0;
    record.sharpness = 30.0;

    let report = engine().screen(&record);

    let names: Vec<&str> = report
        .diseases
        .iter()
        .map(|disease| disease.name.as_str())
        .collect();
    assert_eq!(names, vec!["Dehydration", "Malnutrition"]);
    assert_eq!(report.health_score, 60);
}

#[test]
fn dark_circles_with_dull_complexion_isolates_sleep_deprivation() {
    let mut record = neutral_record();
    record.eye.dark_circles = true;
    record.value = 90.0;

    let report = engine().screen(&record);

    assert_eq!(report.diseases.len(), 1);
    assert_eq!(report.diseases[0].name, "Sleep Deprivation / Chronic Fatigue");
    assert_eq!(report.health_score, 85);
}

#[test]
fn absent_forehead_and_chin_regions_never_raise() {
    let mut record = neutral_record();
    record
        .regions
        .insert(FaceRegion::Cheeks, region_stats(50.0, 40.0, 120.0));

    let report = engine().screen(&record);

    // Melasma, perioral dermatitis, and lupus all reference missing regions
    // and must simply not fire.
    assert_eq!(report.diseases[0].name, "Healthy");
}

#[test]
fn region_absence_is_not_treated_as_zero() {
    // A forehead darker than the face mean fires melasma; no forehead at all
    // must not (mean_v 0 would).
    let mut dark_forehead = neutral_record();
    dark_forehead
        .regions
        .insert(FaceRegion::Forehead, region_stats(20.0, 40.0, 100.0));

    let fired = engine().screen(&dark_forehead);
    assert_eq!(fired.diseases[0].name, "Melasma / Hyperpigmentation");

    let absent = engine().screen(&neutral_record());
    assert_eq!(absent.diseases[0].name, "Healthy");
}

#[test]
fn overlapping_matches_keep_table_order() {
    let report = engine().screen(&overload_record());

    let names: Vec<&str> = report
        .diseases
        .iter()
        .map(|disease| disease.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Jaundice (Liver Issue)",
            "Acne / Skin Lesions",
            "Dehydration",
            "Sleep Deprivation / Chronic Fatigue",
            "Seborrheic Dermatitis",
            "Advanced Liver Disease",
            "Hormonal Acne",
            "Chronic Stress / Anxiety",
        ]
    );
}

#[test]
fn score_clamps_to_zero_when_deductions_exceed_baseline() {
    let report = engine().screen(&overload_record());

    // Deltas sum to 152; the single final clamp floors the score at zero.
    assert_eq!(report.health_score, 0);
    assert_eq!(report.diseases.len(), report.recommendations.len());
}

#[test]
fn adversarial_record_stays_within_score_bounds() {
    let mut record = neutral_record();
    record.hue = -1000.0;
    record.saturation = 120.0;
    record.asymmetry = 40.0;
    record.eye.redness = true;

    let report = engine().screen(&record);

    assert!(report.health_score <= 100);
    assert_eq!(report.diseases.len(), report.recommendations.len());
    assert!(!report.diseases.is_empty());
}

#[test]
fn unknown_emotion_never_matches_chronic_stress() {
    let mut record = neutral_record();
    record.value = 100.0;
    assert_eq!(record.classifier.emotion, AttributeLabel::Unknown);

    let report = engine().screen(&record);

    assert!(report
        .diseases
        .iter()
        .all(|disease| disease.name != "Chronic Stress / Anxiety"));
}

#[test]
fn evaluation_is_deterministic_for_identical_records() {
    let engine = engine();
    let record = overload_record();

    let first = engine.screen(&record);
    let second = engine.screen(&record);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("report serializes"),
        serde_json::to_string(&second).expect("report serializes"),
    );
}

#[test]
fn matches_mirror_report_diseases() {
    let engine = engine();
    let record = overload_record();

    let matches = engine.matches(&record);
    let report = engine.screen(&record);

    assert_eq!(matches, report.diseases);
}
