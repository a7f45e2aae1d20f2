use crate::zones::ZoneStat;
use log::debug;
use serde::{Deserialize, Serialize};

/// Coarse pointing direction. `Neutral` is a first-class outcome for ties,
/// empty masks and layouts the discrete mode does not understand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Neutral,
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Three-zone mapping: left band → west, centre → north, right → east.
    pub fn from_zone_index(index: usize, zone_count: usize) -> Self {
        if zone_count != 3 {
            return Direction::Neutral;
        }
        match index {
            0 => Direction::West,
            1 => Direction::North,
            2 => Direction::East,
            _ => Direction::Neutral,
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Direction::Neutral)
    }
}

/// Outcome of the largest-zone vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ZoneVote {
    /// Zone index holding strictly more foreground than any other.
    Winner(usize),
    /// Several zones share the maximum ratio.
    Tie,
    /// Every ratio is zero (or there are no zones).
    NoSignal,
}

impl ZoneVote {
    pub fn winner(&self) -> Option<usize> {
        match self {
            ZoneVote::Winner(index) => Some(*index),
            _ => None,
        }
    }
}

/// Find the zone with the largest ratio.
///
/// The winner is the position in `stats`, the same placement
/// [`pointing_angle`](super::pointing_angle) uses; `ZoneStat::index` is not
/// consulted.
///
/// Ratios are compared exactly; they are quotients of integer pixel counts
/// over a shared total, so equal counts produce bit-identical ratios. A tie
/// never resolves towards either side.
pub fn largest_zone(stats: &[ZoneStat]) -> ZoneVote {
    let max = stats.iter().map(|s| s.ratio).fold(0.0f64, f64::max);
    if max <= 0.0 {
        return ZoneVote::NoSignal;
    }
    let mut leaders = stats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.ratio == max)
        .map(|(position, _)| position);
    match (leaders.next(), leaders.next()) {
        (Some(position), None) => ZoneVote::Winner(position),
        (Some(_), Some(_)) => {
            debug!("largest_zone: tie at ratio {max:.4}");
            ZoneVote::Tie
        }
        (None, _) => ZoneVote::NoSignal,
    }
}

/// Discrete three-zone classification. Any other zone count is `Neutral`.
pub fn classify_discrete(stats: &[ZoneStat]) -> Direction {
    match largest_zone(stats) {
        ZoneVote::Winner(index) => Direction::from_zone_index(index, stats.len()),
        ZoneVote::Tie | ZoneVote::NoSignal => Direction::Neutral,
    }
}
