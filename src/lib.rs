#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod direction;
pub mod error;
pub mod estimator;
pub mod image;
pub mod spectral;
pub mod zones;

// Supporting modules used by the tools and reports.
pub mod angle;
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::direction::{Direction, Heading, ReferenceArc, ZoneVote};
pub use crate::error::{CoreError, ErrorKind};
pub use crate::estimator::{ClassifierMode, DirectionEstimator, DirectionReport, EstimatorParams};
pub use crate::spectral::{ConvolverParams, Normalization, SpectralConvolver};
pub use crate::zones::{Interval, Zone, ZoneStat};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hand_direction::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let mask = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &mask };
///
/// let estimator = DirectionEstimator::new(EstimatorParams {
///     zones: 3,
///     ..Default::default()
/// });
///
/// let report = estimator.estimate(img).expect("valid mask");
/// println!("direction={:?} latency_ms={:.3}", report.direction, report.timing.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ColorImageU8, GrayImageU8, ImageU8};
    pub use crate::{
        ConvolverParams, Direction, DirectionEstimator, DirectionReport, EstimatorParams, Heading,
        SpectralConvolver,
    };
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::direction::{classify_discrete, largest_zone, pointing_angle};
    pub use crate::spectral::{optimal_dft_size, ConvolutionLayout, Kernel2D};
    pub use crate::zones::{compute_ratios, compute_statistics, partition_zones, split_interval};
}
