//! Column zones over a mask and the share of foreground each one holds.
//!
//! Pipeline: `split_interval` over the x-axis → `partition_zones` (one
//! full-height band + mask per interval) → `compute_statistics`.

pub mod interval;
pub mod partition;
pub mod stats;

pub use interval::{split_interval, Interval};
pub use partition::{partition_zones, zone_rects, Zone, ZoneRect, ZONE_MASK_VALUE};
pub use stats::{compute_ratios, compute_statistics, ZoneStat, ZoneStatistics};
