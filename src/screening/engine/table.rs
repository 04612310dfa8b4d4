//! The static condition-rule table.
//!
//! Table order is a contract: it fixes the display order of matched
//! conditions in the report, so entries must not be reordered. Thresholds
//! are expressed over HSV means in the 0-255/0-179 OpenCV ranges the feature
//! provider emits.

use super::super::classifier::AttributeLabel;
use super::super::features::{FaceRegion, FeatureRecord};
use super::{Confidence, ConditionMatch};

/// A named, ordered predicate-to-outcome mapping.
///
/// Rules are static configuration: loaded once, shared process-wide, never
/// mutated at runtime. The predicate is a pure function of the feature
/// record and must resolve absent optional features to `false`.
pub struct ConditionRule {
    pub name: &'static str,
    pub confidence: Confidence,
    pub description: &'static str,
    /// Points deducted from the baseline health score when the rule fires.
    pub score_delta: u32,
    pub recommendation: &'static str,
    pub predicate: fn(&FeatureRecord) -> bool,
}

impl ConditionRule {
    pub fn to_match(&self) -> ConditionMatch {
        ConditionMatch {
            name: self.name.to_string(),
            confidence: self.confidence,
            description: self.description.to_string(),
        }
    }
}

fn distressed_emotion(label: &AttributeLabel) -> bool {
    match label {
        AttributeLabel::Tagged(emotion) => {
            matches!(emotion.as_str(), "angry" | "fear" | "sad")
        }
        AttributeLabel::Unknown => false,
    }
}

pub(crate) static RULE_TABLE: [ConditionRule; 25] = [
    ConditionRule {
        name: "Jaundice (Liver Issue)",
        confidence: Confidence::High,
        description: "Yellowish skin tone detected",
        score_delta: 30,
        recommendation: "Consult a hepatologist immediately",
        predicate: |r| r.hue > 20.0 && r.hue < 40.0 && r.saturation > 80.0,
    },
    ConditionRule {
        name: "Anemia",
        confidence: Confidence::Medium,
        description: "Pale complexion indicates possible iron deficiency",
        score_delta: 20,
        recommendation: "Check hemoglobin levels; increase iron intake",
        predicate: |r| r.saturation < 40.0 && r.value > 150.0,
    },
    ConditionRule {
        name: "Cyanosis",
        confidence: Confidence::High,
        description: "Bluish tint suggests low blood oxygen",
        score_delta: 35,
        recommendation: "Seek immediate medical attention - possible respiratory/cardiac issue",
        predicate: |r| r.hue > 90.0 && r.hue < 130.0 && r.saturation > 60.0,
    },
    ConditionRule {
        name: "Rosacea / Skin Inflammation",
        confidence: Confidence::Medium,
        description: "Persistent facial redness detected",
        score_delta: 15,
        recommendation: "Avoid triggers like alcohol, spicy foods; consult dermatologist",
        predicate: |r| r.hue < 15.0 && r.saturation > 100.0,
    },
    ConditionRule {
        name: "Vitiligo",
        confidence: Confidence::Medium,
        description: "White/depigmented patches detected on skin",
        score_delta: 10,
        recommendation: "Consult dermatologist for vitiligo treatment options",
        predicate: |r| {
            r.bright_pixel_ratio > 0.15 && r.texture.brightness_std > 35.0 && r.saturation < 60.0
        },
    },
    ConditionRule {
        name: "Acne / Skin Lesions",
        confidence: Confidence::Medium,
        description: "Multiple blemishes or spots detected",
        score_delta: 12,
        recommendation: "Maintain skincare routine; consider topical treatments",
        predicate: |r| r.texture.edge_density > 0.12 && r.texture.variance > 600.0,
    },
    ConditionRule {
        name: "Eczema / Dermatitis",
        confidence: Confidence::Low,
        description: "Dry, rough skin texture",
        score_delta: 15,
        recommendation: "Use moisturizers; avoid irritants; see dermatologist",
        predicate: |r| r.texture.variance > 800.0 && r.saturation < 60.0,
    },
    ConditionRule {
        name: "Melasma / Hyperpigmentation",
        confidence: Confidence::Low,
        description: "Dark patches on forehead region",
        score_delta: 8,
        recommendation: "Use sunscreen; consider skin-lightening treatments",
        predicate: |r| {
            r.region(FaceRegion::Forehead)
                .map(|forehead| forehead.mean_v < r.value - 20.0)
                .unwrap_or(false)
        },
    },
    ConditionRule {
        name: "Dehydration",
        confidence: Confidence::Medium,
        description: "Dull, tired-looking skin",
        score_delta: 10,
        recommendation: "Increase water intake to 8+ glasses daily",
        predicate: |r| r.value < 100.0 && r.sharpness < 60.0,
    },
    ConditionRule {
        name: "Sleep Deprivation / Chronic Fatigue",
        confidence: Confidence::Medium,
        description: "Dark circles and dull complexion",
        score_delta: 15,
        recommendation: "Improve sleep quality; aim for 7-9 hours nightly",
        predicate: |r| r.eye.dark_circles && r.value < 110.0,
    },
    ConditionRule {
        name: "Allergic Reaction",
        confidence: Confidence::Medium,
        description: "Redness and possible swelling detected",
        score_delta: 18,
        recommendation: "Identify and avoid allergens; antihistamines may help",
        predicate: |r| r.eye.redness && r.hue < 20.0,
    },
    ConditionRule {
        name: "Hypothyroidism (Possible)",
        confidence: Confidence::Low,
        description: "Pale, puffy face may indicate thyroid issues",
        score_delta: 20,
        recommendation: "Get thyroid function tests (TSH, T3, T4)",
        predicate: |r| r.saturation < 35.0 && r.value > 160.0 && r.eye.puffiness,
    },
    ConditionRule {
        name: "Lupus (Butterfly Rash Indicator)",
        confidence: Confidence::VeryLow,
        description: "Symmetrical redness across cheeks",
        score_delta: 25,
        recommendation: "Consult rheumatologist for autoimmune screening",
        predicate: |r| {
            r.region(FaceRegion::Cheeks)
                .map(|cheeks| cheeks.mean_h < 15.0)
                .unwrap_or(false)
                && r.asymmetry < 10.0
        },
    },
    ConditionRule {
        name: "Cushing's Syndrome (Moon Face)",
        confidence: Confidence::VeryLow,
        description: "Round, full facial appearance",
        score_delta: 22,
        recommendation: "Consult endocrinologist for cortisol level testing",
        predicate: |r| {
            r.value > 170.0
                && r.region(FaceRegion::Cheeks)
                    .map(|cheeks| cheeks.mean_v > 180.0)
                    .unwrap_or(false)
        },
    },
    ConditionRule {
        name: "Seborrheic Dermatitis",
        confidence: Confidence::Low,
        description: "Flaky, oily patches on skin",
        score_delta: 12,
        recommendation: "Use antifungal shampoos; maintain scalp hygiene",
        predicate: |r| r.texture.edge_density > 0.12 && r.hue > 20.0 && r.hue < 35.0,
    },
    ConditionRule {
        name: "Psoriasis",
        confidence: Confidence::Low,
        description: "Rough, scaly skin patches",
        score_delta: 18,
        recommendation: "Consult dermatologist for biologics or topical treatments",
        predicate: |r| r.texture.variance > 1200.0 && r.hue > 15.0 && r.hue < 25.0,
    },
    ConditionRule {
        name: "Advanced Liver Disease",
        confidence: Confidence::Medium,
        description: "Dark yellowish tone with dullness",
        score_delta: 40,
        recommendation: "URGENT: See hepatologist for liver function tests",
        predicate: |r| r.hue > 25.0 && r.hue < 35.0 && r.saturation > 90.0 && r.value < 120.0,
    },
    ConditionRule {
        name: "Kidney Disease (Possible)",
        confidence: Confidence::Low,
        description: "Pale, puffy face with fluid retention",
        score_delta: 25,
        recommendation: "Get kidney function tests (creatinine, BUN)",
        predicate: |r| r.value > 180.0 && r.saturation < 30.0 && r.eye.puffiness,
    },
    ConditionRule {
        name: "Malnutrition",
        confidence: Confidence::Medium,
        description: "Very pale and dull complexion",
        score_delta: 30,
        recommendation: "Improve diet; consider nutritional supplements",
        predicate: |r| r.saturation < 25.0 && r.value < 90.0 && r.sharpness < 50.0,
    },
    ConditionRule {
        name: "Hormonal Acne",
        confidence: Confidence::Medium,
        description: "Breakouts concentrated in lower face",
        score_delta: 15,
        recommendation: "Consult endocrinologist; may need hormonal treatment",
        predicate: |r| r.texture.edge_density > 0.18 && r.region(FaceRegion::Chin).is_some(),
    },
    ConditionRule {
        name: "Chronic Stress / Anxiety",
        confidence: Confidence::Medium,
        description: "Emotional distress visible in facial features",
        score_delta: 18,
        recommendation: "Practice stress management; consider counseling",
        predicate: |r| distressed_emotion(&r.classifier.emotion) && r.value < 105.0,
    },
    ConditionRule {
        name: "Vitamin D Deficiency",
        confidence: Confidence::Low,
        description: "Very pale skin lacking healthy glow",
        score_delta: 12,
        recommendation: "Get sun exposure; vitamin D supplements",
        predicate: |r| r.value > 165.0 && r.saturation < 35.0,
    },
    ConditionRule {
        name: "Perioral Dermatitis",
        confidence: Confidence::Low,
        description: "Rash around mouth area",
        score_delta: 10,
        recommendation: "Avoid steroid creams; see dermatologist",
        predicate: |r| {
            r.region(FaceRegion::Chin)
                .map(|chin| chin.mean_h < 20.0)
                .unwrap_or(false)
                && r.texture.edge_density > 0.14
        },
    },
    ConditionRule {
        name: "Contact Dermatitis",
        confidence: Confidence::Low,
        description: "Localized redness from irritant/allergen",
        score_delta: 10,
        recommendation: "Identify irritant; use hypoallergenic products",
        predicate: |r| r.asymmetry > 25.0 && r.hue < 15.0,
    },
    ConditionRule {
        name: "Sun Damage / Photoaging",
        confidence: Confidence::Medium,
        description: "Uneven texture and pigmentation from UV exposure",
        score_delta: 15,
        recommendation: "Daily SPF 50+; consider retinoids",
        predicate: |r| r.texture.variance > 900.0 && r.hue > 15.0 && r.hue < 25.0,
    },
];
