//! Per-zone share of the foreground pixel mass.

use super::partition::Zone;
use crate::error::CoreError;
use crate::image::{ImageU8, ImageView};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStat {
    pub index: usize,
    /// Foreground pixels inside the zone.
    pub pixels: usize,
    /// `pixels / total foreground`, or `0.0` for an empty mask.
    pub ratio: f64,
}

/// Ratios for one mask plus the total they were normalized by.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStatistics {
    pub stats: Vec<ZoneStat>,
    pub foreground_pixels: usize,
}

impl ZoneStatistics {
    pub fn has_signal(&self) -> bool {
        self.foreground_pixels > 0
    }

    pub fn ratio_sum(&self) -> f64 {
        self.stats.iter().map(|s| s.ratio).sum()
    }

    pub fn ratios(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.ratio).collect()
    }
}

/// Foreground ratio per zone, in zone order. See [`compute_statistics`].
pub fn compute_ratios(mask: ImageU8<'_>, zones: &[Zone]) -> Result<Vec<ZoneStat>, CoreError> {
    compute_statistics(mask, zones).map(|s| s.stats)
}

/// Count foreground pixels of `mask` inside each zone mask and divide by the
/// mask's total foreground count.
///
/// A mask without foreground is not an error: every ratio is reported as zero
/// and consumers treat that as "no signal".
pub fn compute_statistics(
    mask: ImageU8<'_>,
    zones: &[Zone],
) -> Result<ZoneStatistics, CoreError> {
    mask.validate()?;
    for zone in zones {
        let found = (zone.mask.width(), zone.mask.height());
        if found != (mask.w, mask.h) {
            return Err(CoreError::ShapeMismatch {
                what: "zone mask",
                expected: (mask.w, mask.h),
                found,
            });
        }
    }

    let total = mask.count_foreground();
    let counts = count_per_zone(&mask, zones);
    if total == 0 {
        debug!("compute_statistics: mask has no foreground, reporting zero ratios");
    }

    let stats = zones
        .iter()
        .zip(counts)
        .map(|(zone, pixels)| ZoneStat {
            index: zone.index,
            pixels,
            ratio: if total == 0 {
                0.0
            } else {
                pixels as f64 / total as f64
            },
        })
        .collect();
    Ok(ZoneStatistics {
        stats,
        foreground_pixels: total,
    })
}

fn count_per_zone(mask: &ImageU8<'_>, zones: &[Zone]) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    {
        zones
            .par_iter()
            .map(|zone| intersection_count(mask, zone))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        zones
            .iter()
            .map(|zone| intersection_count(mask, zone))
            .collect()
    }
}

fn intersection_count(mask: &ImageU8<'_>, zone: &Zone) -> usize {
    mask.rows()
        .zip(zone.mask.rows())
        .map(|(src, sel)| {
            src.iter()
                .zip(sel)
                .filter(|&(&s, &z)| s > 0 && z > 0)
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;
    use crate::zones::partition_zones;

    fn mask_with_columns(w: usize, h: usize, cols: &[usize]) -> GrayImageU8 {
        let mut img = GrayImageU8::new(w, h);
        for &x in cols {
            img.fill_rect(x, 0, x + 1, h, 255);
        }
        img
    }

    #[test]
    fn ratios_sum_to_one_when_foreground_present() {
        let mask = mask_with_columns(9, 4, &[0, 1, 4, 8]);
        let zones = partition_zones(9, 4, 3).unwrap();
        let stats = compute_statistics(mask.as_view(), &zones).unwrap();
        assert_eq!(stats.foreground_pixels, 16);
        let pixels: Vec<usize> = stats.stats.iter().map(|s| s.pixels).collect();
        assert_eq!(pixels, vec![8, 4, 4]);
        assert!((stats.ratio_sum() - 1.0).abs() < 1e-12);
        assert_eq!(stats.stats[0].ratio, 0.5);
    }

    #[test]
    fn empty_mask_reports_zero_ratios() {
        let mask = GrayImageU8::new(6, 6);
        let zones = partition_zones(6, 6, 3).unwrap();
        let ratios = compute_ratios(mask.as_view(), &zones).unwrap();
        assert_eq!(ratios.len(), 3);
        assert!(ratios.iter().all(|s| s.ratio == 0.0 && s.pixels == 0));
    }

    #[test]
    fn any_positive_sample_counts_as_foreground() {
        let mut mask = GrayImageU8::new(4, 1);
        mask.set(0, 0, 1);
        mask.set(3, 0, 200);
        let zones = partition_zones(4, 1, 2).unwrap();
        let ratios = compute_ratios(mask.as_view(), &zones).unwrap();
        assert_eq!(ratios[0].ratio, 0.5);
        assert_eq!(ratios[1].ratio, 0.5);
    }

    #[test]
    fn zones_from_a_different_image_are_rejected() {
        let mask = GrayImageU8::new(8, 8);
        let zones = partition_zones(8, 7, 3).unwrap();
        assert!(matches!(
            compute_ratios(mask.as_view(), &zones),
            Err(CoreError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_zones_contribute_nothing() {
        let mask = GrayImageU8::filled(2, 2, 255);
        let zones = partition_zones(2, 2, 4).unwrap();
        let ratios = compute_ratios(mask.as_view(), &zones).unwrap();
        let r: Vec<f64> = ratios.iter().map(|s| s.ratio).collect();
        assert_eq!(r, vec![0.5, 0.5, 0.0, 0.0]);
    }
}
