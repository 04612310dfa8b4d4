//! Facial wellness screening: feature ingestion, rule evaluation, and report
//! assembly.
//!
//! The feature provider (face detection, region cropping, color statistics,
//! the external attribute classifier) lives outside this crate; it hands us a
//! [`FeatureRecord`] per frame and we hand back a [`WellnessReport`]. The
//! engine is a single-pass, stateless transformation over a static rule
//! table, so one engine instance can serve concurrent evaluations without
//! locking.

pub mod classifier;
pub mod engine;
pub mod features;
pub mod router;

#[cfg(test)]
mod tests;

pub use classifier::{
    AgeEstimate, AttributeLabel, AttributeScan, ClassifierError, ClassifierOutputs,
};
pub use engine::{
    Confidence, ConditionMatch, ConditionRule, RuleView, ScreeningEngine, WellnessReport,
};
pub use features::{EyeFlags, FaceRegion, FeatureRecord, RegionStats, TextureStats};
pub use router::screening_router;
