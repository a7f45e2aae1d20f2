use crate::diagnostics::TimingBreakdown;
use crate::direction::{Direction, Heading, ZoneVote};
use crate::image::GrayImageU8;
use crate::zones::{Zone, ZoneRect, ZoneStatistics};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub zones: usize,
    pub smoothed: bool,
}

/// Everything the estimator derived from one mask.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionReport {
    pub input: InputDescriptor,
    pub zone_rects: Vec<ZoneRect>,
    pub statistics: ZoneStatistics,
    pub vote: ZoneVote,
    pub direction: Direction,
    pub heading: Heading,
    pub timing: TimingBreakdown,
}

impl DirectionReport {
    pub fn heading_degrees(&self) -> Option<f64> {
        self.heading.degrees()
    }
}

/// Report plus the intermediate images, for tools that dump artifacts.
#[derive(Clone, Debug)]
pub struct DetailedEstimate {
    pub report: DirectionReport,
    pub zones: Vec<Zone>,
    /// Re-binarized mask when smoothing is enabled.
    pub smoothed_mask: Option<GrayImageU8>,
}
