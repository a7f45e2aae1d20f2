use crate::angle::{arc_position, heading_to_vector, wrap_degrees};
use crate::direction::Direction;
use crate::zones::ZoneStat;
use serde::{Deserialize, Serialize};

/// Arc over which zone nominal angles are spread, left zone first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceArc {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Default for ReferenceArc {
    fn default() -> Self {
        Self {
            start_deg: -90.0,
            end_deg: 90.0,
        }
    }
}

impl ReferenceArc {
    /// Nominal angle of zone `index` out of `count`.
    pub fn nominal_angle(&self, index: usize, count: usize) -> f64 {
        arc_position(self.start_deg, self.end_deg, index, count)
    }
}

/// Continuous pointing direction. `Undefined` means there was no foreground
/// to weigh, which is different from pointing straight up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Heading {
    Degrees(f64),
    Undefined,
}

impl Heading {
    pub fn degrees(&self) -> Option<f64> {
        match self {
            Heading::Degrees(d) => Some(*d),
            Heading::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Heading::Degrees(_))
    }

    /// Image-space unit vector for drawing an arrow; `None` when undefined.
    pub fn unit_vector(&self) -> Option<[f64; 2]> {
        self.degrees().map(heading_to_vector)
    }

    /// Fold the heading into a compass direction. Angles within
    /// `dead_zone_deg` of north count as north, east/west extend to ±135°,
    /// and the remainder is south.
    pub fn to_direction(&self, dead_zone_deg: f64) -> Direction {
        let Some(angle) = self.degrees() else {
            return Direction::Neutral;
        };
        let angle = wrap_degrees(angle);
        let dead_zone = dead_zone_deg.abs().min(135.0);
        if angle.abs() <= dead_zone {
            Direction::North
        } else if angle.abs() > 135.0 {
            Direction::South
        } else if angle > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    }
}

/// Ratio-weighted mean of the zones' nominal angles on `arc`.
///
/// Zones are placed by position in `stats`. With no foreground the heading is
/// `Undefined`.
pub fn pointing_angle(stats: &[ZoneStat], arc: &ReferenceArc) -> Heading {
    let weight: f64 = stats.iter().map(|s| s.ratio).sum();
    if weight.is_nan() || weight <= 0.0 {
        return Heading::Undefined;
    }
    let n = stats.len();
    let weighted: f64 = stats
        .iter()
        .enumerate()
        .map(|(i, s)| s.ratio * arc.nominal_angle(i, n))
        .sum();
    Heading::Degrees(weighted / weight)
}
