//! Direction inference from zone statistics.
//!
//! Two modes share the same input:
//! - discrete: the three-zone majority vote in [`discrete`];
//! - continuous: the ratio-weighted heading over N zones in [`heading`].

pub mod discrete;
pub mod heading;

pub use discrete::{classify_discrete, largest_zone, Direction, ZoneVote};
pub use heading::{pointing_angle, Heading, ReferenceArc};
