use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::classifier::ClassifierOutputs;

/// Named facial sub-areas carrying their own color statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceRegion {
    Forehead,
    Cheeks,
    Chin,
    UnderEyes,
}

impl FaceRegion {
    pub const fn ordered() -> [Self; 4] {
        [Self::Forehead, Self::Cheeks, Self::Chin, Self::UnderEyes]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Forehead => "forehead",
            Self::Cheeks => "cheeks",
            Self::Chin => "chin",
            Self::UnderEyes => "under_eyes",
        }
    }
}

/// HSV statistics for one region crop. A region with an empty crop produces
/// no entry at all rather than zeroed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub mean_h: f32,
    pub mean_s: f32,
    pub mean_v: f32,
    pub std_v: f32,
}

/// Boolean findings from the eye-region detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EyeFlags {
    #[serde(default)]
    pub dark_circles: bool,
    #[serde(default)]
    pub puffiness: bool,
    #[serde(default)]
    pub redness: bool,
}

/// Texture statistics over the full face crop. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextureStats {
    pub variance: f32,
    pub edge_density: f32,
    pub brightness_std: f32,
}

/// The immutable feature bundle extracted from one frame.
///
/// Constructed once per evaluation by the external feature provider and
/// consumed exactly once by [`super::ScreeningEngine::screen`]. Absent
/// region keys mean "unknown", never zero; classifier fields carry an
/// explicit `Unknown` sentinel when the backend could not produce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Mean hue over the full face crop.
    pub hue: f32,
    /// Mean saturation over the full face crop.
    pub saturation: f32,
    /// Mean brightness (HSV value) over the full face crop.
    pub value: f32,
    /// Fraction of pixels above the fixed luminance threshold, computed once
    /// from the bright-pixel mask so rule predicates stay pure.
    #[serde(default)]
    pub bright_pixel_ratio: f32,
    #[serde(default)]
    pub regions: BTreeMap<FaceRegion, RegionStats>,
    #[serde(default)]
    pub eye: EyeFlags,
    #[serde(default)]
    pub texture: TextureStats,
    /// Left/right difference score; larger means more asymmetric.
    #[serde(default)]
    pub asymmetry: f32,
    /// Laplacian sharpness; low values indicate a blurry or dull frame.
    pub sharpness: f32,
    #[serde(default)]
    pub classifier: ClassifierOutputs,
}

impl FeatureRecord {
    pub fn region(&self, region: FaceRegion) -> Option<&RegionStats> {
        self.regions.get(&region)
    }
}
