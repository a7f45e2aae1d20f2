//! Timing traces attached to estimator reports and convolution results.

pub mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
