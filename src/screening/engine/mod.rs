mod report;
mod table;

pub use report::WellnessReport;
pub use table::ConditionRule;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::features::FeatureRecord;

/// Ordinal strength of a condition match. Not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One rule firing against one feature record. Match order always equals
/// rule-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    pub confidence: Confidence,
    pub description: String,
}

/// Read-only catalogue entry exposed over the rules endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleView {
    pub name: &'static str,
    pub confidence: Confidence,
    pub score_delta: u32,
    pub description: &'static str,
}

impl From<&ConditionRule> for RuleView {
    fn from(rule: &ConditionRule) -> Self {
        Self {
            name: rule.name,
            confidence: rule.confidence,
            score_delta: rule.score_delta,
            description: rule.description,
        }
    }
}

/// Stateless evaluator over the static condition-rule table.
///
/// The table is process-wide and never mutated, so a single engine can be
/// shared across concurrent evaluations without locking.
pub struct ScreeningEngine {
    rules: &'static [ConditionRule],
}

impl ScreeningEngine {
    pub fn new() -> Self {
        Self {
            rules: &table::RULE_TABLE,
        }
    }

    pub fn rules(&self) -> &'static [ConditionRule] {
        self.rules
    }

    pub fn rule_views(&self) -> Vec<RuleView> {
        self.rules.iter().map(RuleView::from).collect()
    }

    /// Evaluate every rule against one record, in table order, and assemble
    /// the final report. Predicates never raise; rules over absent optional
    /// features simply do not fire.
    pub fn screen(&self, record: &FeatureRecord) -> WellnessReport {
        let matched = self.matching_rules(record);
        debug!(matches = matched.len(), "rule table evaluated");
        report::aggregate(&matched, &record.classifier)
    }

    /// Matches only, for callers that layer their own aggregation.
    pub fn matches(&self, record: &FeatureRecord) -> Vec<ConditionMatch> {
        self.matching_rules(record)
            .into_iter()
            .map(ConditionRule::to_match)
            .collect()
    }

    // Single pass, no short-circuiting: rules are independent and a record
    // may satisfy many overlapping conditions.
    fn matching_rules(&self, record: &FeatureRecord) -> Vec<&'static ConditionRule> {
        self.rules
            .iter()
            .filter(|rule| (rule.predicate)(record))
            .collect()
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new()
    }
}
