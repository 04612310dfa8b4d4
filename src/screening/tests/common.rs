use std::collections::BTreeMap;

use axum::response::Response;
use serde_json::Value;

use crate::screening::classifier::{AgeEstimate, AttributeLabel, ClassifierOutputs};
use crate::screening::engine::ScreeningEngine;
use crate::screening::features::{EyeFlags, FaceRegion, FeatureRecord, RegionStats, TextureStats};

pub(super) fn engine() -> ScreeningEngine {
    ScreeningEngine::new()
}

/// Record whose values satisfy no rule predicate.
pub(super) fn neutral_record() -> FeatureRecord {
    FeatureRecord {
        hue: 50.0,
        saturation: 50.0,
        value: 130.0,
        bright_pixel_ratio: 0.0,
        regions: BTreeMap::new(),
        eye: EyeFlags::default(),
        texture: TextureStats::default(),
        asymmetry: 0.0,
        sharpness: 100.0,
        classifier: ClassifierOutputs::unknown(),
    }
}

pub(super) fn region_stats(mean_h: f32, mean_s: f32, mean_v: f32) -> RegionStats {
    RegionStats {
        mean_h,
        mean_s,
        mean_v,
        std_v: 0.0,
    }
}

/// Satisfies exactly the jaundice rule (spec scenario: hue 30, sat 90, val 100).
pub(super) fn jaundice_record() -> FeatureRecord {
    let mut record = neutral_record();
    record.hue = 30.0;
    record.saturation = 90.0;
    record.value = 100.0;
    record
}

/// Fires eight overlapping rules whose deltas sum past the baseline.
pub(super) fn overload_record() -> FeatureRecord {
    let mut record = neutral_record();
    record.hue = 30.0;
    record.saturation = 95.0;
    record.value = 95.0;
    record.sharpness = 30.0;
    record.texture = TextureStats {
        variance: 1000.0,
        edge_density: 0.2,
        brightness_std: 0.0,
    };
    record.eye.dark_circles = true;
    record
        .regions
        .insert(FaceRegion::Chin, region_stats(30.0, 40.0, 100.0));
    record.classifier.emotion = AttributeLabel::Tagged("sad".to_string());
    record
}

pub(super) fn known_classifier() -> ClassifierOutputs {
    ClassifierOutputs {
        emotion: AttributeLabel::Tagged("happy".to_string()),
        ethnicity: AttributeLabel::Tagged("latino hispanic".to_string()),
        age: AgeEstimate::Years(34),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
