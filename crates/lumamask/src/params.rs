use serde::{Deserialize, Serialize};

fn default_luma_threshold() -> f32 {
    50.0
}

fn default_alpha_gain() -> f32 {
    1.5
}

/// Tuning knobs for the luminance-to-alpha mapping.
///
/// The defaults reproduce the original numeric contract: pixels darker than
/// luminance 50 become fully transparent, everything brighter gets
/// `min(255, round(luma * 1.5))`. Both values were tuned against one sample
/// image; treat them as a starting point, not a segmentation rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskParams {
    /// Luminance below which a pixel is treated as background noise
    /// and cleared to alpha 0.
    #[serde(default = "default_luma_threshold")]
    pub luma_threshold: f32,
    /// Multiplier applied to luminance when deriving alpha, so that
    /// mid-bright pixels saturate to full opacity faster than linear.
    #[serde(default = "default_alpha_gain")]
    pub alpha_gain: f32,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            luma_threshold: default_luma_threshold(),
            alpha_gain: default_alpha_gain(),
        }
    }
}
