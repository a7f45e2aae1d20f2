use crate::direction::ReferenceArc;
use crate::spectral::ConvolverParams;
use serde::{Deserialize, Serialize};

/// Which classifier produces [`DirectionReport::direction`](super::DirectionReport).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassifierMode {
    /// Largest-zone vote; only meaningful with three zones.
    #[default]
    Discrete,
    /// Compass sector of the weighted heading; works for any zone count.
    Angle,
}

/// Estimator configuration. Every field has a default so partial JSON works.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimatorParams {
    /// Number of column zones (>= 1).
    pub zones: usize,
    pub mode: ClassifierMode,
    pub arc: ReferenceArc,
    /// Half-width of the north sector when folding a heading into a direction.
    pub dead_zone_deg: f64,
    /// Optional frequency-domain blur applied to the mask before counting.
    pub smoothing: Option<ConvolverParams>,
    /// Smoothed samples above this value become foreground again.
    pub smoothing_threshold: u8,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            zones: 3,
            mode: ClassifierMode::Discrete,
            arc: ReferenceArc::default(),
            dead_zone_deg: 15.0,
            smoothing: None,
            smoothing_threshold: 127,
        }
    }
}
