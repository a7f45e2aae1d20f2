//! Mask → zones → statistics → direction, in one call.

pub mod params;
pub mod report;

pub use params::{ClassifierMode, EstimatorParams};
pub use report::{DetailedEstimate, DirectionReport, InputDescriptor};

use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::direction::{classify_discrete, largest_zone, pointing_angle};
use crate::error::CoreError;
use crate::image::{GrayImageU8, ImageU8};
use crate::spectral::SpectralConvolver;
use crate::zones::{compute_statistics, partition_zones};
use log::debug;
use std::time::Instant;

/// Stateless driver: every call recomputes zones from the mask at hand.
#[derive(Clone, Debug, Default)]
pub struct DirectionEstimator {
    params: EstimatorParams,
}

impl DirectionEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    pub fn estimate(&self, mask: ImageU8<'_>) -> Result<DirectionReport, CoreError> {
        self.estimate_detailed(mask).map(|d| d.report)
    }

    pub fn estimate_detailed(&self, mask: ImageU8<'_>) -> Result<DetailedEstimate, CoreError> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        mask.validate()?;
        if self.params.zones == 0 {
            return Err(CoreError::ZeroParts);
        }

        let mut t = Instant::now();
        let smoothed_mask = match &self.params.smoothing {
            Some(smoothing) => {
                let blurred = SpectralConvolver::new(smoothing.clone()).convolve_gray(mask.clone())?;
                t = timing.lap("smoothing", t);
                Some(binarize(blurred, self.params.smoothing_threshold))
            }
            None => None,
        };
        let working = smoothed_mask
            .as_ref()
            .map(GrayImageU8::as_view)
            .unwrap_or(mask);

        let (width, height) = (working.w, working.h);
        let zones = partition_zones(width, height, self.params.zones)?;
        t = timing.lap("partition", t);

        let statistics = compute_statistics(working, &zones)?;
        t = timing.lap("statistics", t);

        let vote = largest_zone(&statistics.stats);
        let heading = pointing_angle(&statistics.stats, &self.params.arc);
        let direction = match self.params.mode {
            ClassifierMode::Discrete => classify_discrete(&statistics.stats),
            ClassifierMode::Angle => heading.to_direction(self.params.dead_zone_deg),
        };
        timing.lap("classify", t);
        timing.total_ms = elapsed_ms(total_start);

        if !statistics.has_signal() {
            debug!("DirectionEstimator::estimate mask has no foreground");
        }
        debug!(
            "DirectionEstimator::estimate zones={} vote={:?} direction={:?} heading={:?}",
            zones.len(),
            vote,
            direction,
            heading
        );

        let report = DirectionReport {
            input: InputDescriptor {
                width,
                height,
                zones: zones.len(),
                smoothed: smoothed_mask.is_some(),
            },
            zone_rects: zones.iter().map(|z| z.rect).collect(),
            statistics,
            vote,
            direction,
            heading,
            timing,
        };
        Ok(DetailedEstimate {
            report,
            zones,
            smoothed_mask,
        })
    }
}

/// Map samples above `threshold` to 255 and the rest to 0.
pub fn binarize(mut image: GrayImageU8, threshold: u8) -> GrayImageU8 {
    let (w, h) = (image.width(), image.height());
    for y in 0..h {
        for x in 0..w {
            let v = if image.get(x, y) > threshold { 255 } else { 0 };
            image.set(x, y, v);
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{Direction, Heading, ZoneVote};
    use crate::spectral::ConvolverParams;

    fn blob(w: usize, h: usize, x0: usize, x1: usize) -> GrayImageU8 {
        let mut img = GrayImageU8::new(w, h);
        img.fill_rect(x0, h / 4, x1, 3 * h / 4, 255);
        img
    }

    #[test]
    fn blob_on_the_right_points_east() {
        let mask = blob(90, 40, 62, 88);
        let report = DirectionEstimator::default()
            .estimate(mask.as_view())
            .unwrap();
        assert_eq!(report.vote, ZoneVote::Winner(2));
        assert_eq!(report.direction, Direction::East);
        assert_eq!(report.heading, Heading::Degrees(90.0));
        assert_eq!(report.zone_rects.len(), 3);
    }

    #[test]
    fn empty_mask_is_neutral_and_undefined() {
        let mask = GrayImageU8::new(30, 30);
        let report = DirectionEstimator::default()
            .estimate(mask.as_view())
            .unwrap();
        assert_eq!(report.vote, ZoneVote::NoSignal);
        assert_eq!(report.direction, Direction::Neutral);
        assert_eq!(report.heading, Heading::Undefined);
        assert_eq!(report.statistics.ratio_sum(), 0.0);
    }

    #[test]
    fn angle_mode_uses_heading_sectors() {
        let mask = blob(100, 20, 0, 20);
        let params = EstimatorParams {
            zones: 5,
            mode: ClassifierMode::Angle,
            ..Default::default()
        };
        let report = DirectionEstimator::new(params).estimate(mask.as_view()).unwrap();
        assert_eq!(report.heading, Heading::Degrees(-90.0));
        assert_eq!(report.direction, Direction::West);
    }

    #[test]
    fn smoothing_keeps_a_solid_blob_in_place() {
        let mask = blob(60, 30, 2, 18);
        let params = EstimatorParams {
            smoothing: Some(ConvolverParams {
                kernel_size: 5,
                ..Default::default()
            }),
            ..Default::default()
        };
        let detailed = DirectionEstimator::new(params)
            .estimate_detailed(mask.as_view())
            .unwrap();
        assert!(detailed.report.input.smoothed);
        assert!(detailed.smoothed_mask.is_some());
        assert_eq!(detailed.report.direction, Direction::West);
        assert!(detailed.report.timing.stage_ms("smoothing").is_some());
    }

    #[test]
    fn smoothed_report_keeps_input_dimensions() {
        let mask = blob(73, 41, 30, 45);
        let params = EstimatorParams {
            smoothing: Some(ConvolverParams::default()),
            ..Default::default()
        };
        let detailed = DirectionEstimator::new(params)
            .estimate_detailed(mask.as_view())
            .unwrap();
        assert_eq!(detailed.report.input.width, 73);
        assert_eq!(detailed.report.input.height, 41);
        let smoothed = detailed.smoothed_mask.unwrap();
        assert_eq!((smoothed.width(), smoothed.height()), (73, 41));
        assert_eq!(detailed.report.direction, Direction::North);
    }

    #[test]
    fn zero_zones_fail_fast() {
        let mask = GrayImageU8::new(4, 4);
        let params = EstimatorParams {
            zones: 0,
            ..Default::default()
        };
        assert_eq!(
            DirectionEstimator::new(params)
                .estimate(mask.as_view())
                .unwrap_err(),
            CoreError::ZeroParts
        );
    }

    #[test]
    fn binarize_thresholds_strictly_above() {
        let img = GrayImageU8::from_raw(3, 1, vec![127, 128, 0]).unwrap();
        assert_eq!(binarize(img, 127).data(), &[0, 255, 0]);
    }
}
