use serde::{Deserialize, Serialize};

use super::super::classifier::{AgeEstimate, AttributeLabel, ClassifierOutputs};
use super::table::ConditionRule;
use super::{Confidence, ConditionMatch};

/// Score every record starts from before deductions.
pub(crate) const BASELINE_SCORE: u32 = 100;

const HEALTHY_NAME: &str = "Healthy";
const HEALTHY_DESCRIPTION: &str = "No significant health issues detected";
const HEALTHY_RECOMMENDATION: &str = "Maintain current healthy lifestyle";

/// Final screening output for one frame.
///
/// `diseases` and `recommendations` are index-aligned: each match
/// contributes exactly one recommendation at the same position, duplicates
/// preserved. `health_score` is always within [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessReport {
    pub emotion: AttributeLabel,
    pub ethnicity: AttributeLabel,
    pub age: AgeEstimate,
    pub diseases: Vec<ConditionMatch>,
    pub health_score: u8,
    pub recommendations: Vec<String>,
}

impl WellnessReport {
    pub fn summary(&self) -> String {
        let healthy = self.diseases.len() == 1 && self.diseases[0].name == HEALTHY_NAME;
        if healthy {
            format!("health score {}: no findings", self.health_score)
        } else {
            format!(
                "health score {} with {} finding(s)",
                self.health_score,
                self.diseases.len()
            )
        }
    }
}

/// Fold the matched rules into a report. Deductions accumulate unclamped and
/// the score is clamped exactly once at the end; an empty match set yields
/// the synthetic "Healthy" entry with the baseline score intact.
pub(crate) fn aggregate(
    matched: &[&'static ConditionRule],
    classifier: &ClassifierOutputs,
) -> WellnessReport {
    let (diseases, recommendations, deduction) = if matched.is_empty() {
        (
            vec![ConditionMatch {
                name: HEALTHY_NAME.to_string(),
                confidence: Confidence::High,
                description: HEALTHY_DESCRIPTION.to_string(),
            }],
            vec![HEALTHY_RECOMMENDATION.to_string()],
            0,
        )
    } else {
        let diseases = matched.iter().map(|rule| rule.to_match()).collect();
        let recommendations = matched
            .iter()
            .map(|rule| rule.recommendation.to_string())
            .collect();
        let deduction = matched.iter().map(|rule| rule.score_delta).sum();
        (diseases, recommendations, deduction)
    };

    WellnessReport {
        emotion: classifier.emotion.clone(),
        ethnicity: classifier.ethnicity.clone(),
        age: classifier.age,
        diseases,
        health_score: BASELINE_SCORE.saturating_sub(deduction) as u8,
        recommendations,
    }
}
