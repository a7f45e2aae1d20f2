mod common;

use common::synthetic_image::hand_mask_u8;
use hand_direction::image::{GrayImageU8, ImageU8};
use hand_direction::stages::{compute_statistics, partition_zones};
use hand_direction::{
    ClassifierMode, ConvolverParams, Direction, DirectionEstimator, EstimatorParams, Heading,
    ZoneVote,
};

fn view(data: &[u8], w: usize, h: usize) -> ImageU8<'_> {
    ImageU8 {
        w,
        h,
        stride: w,
        data,
    }
}

#[test]
fn hand_on_each_side_maps_to_compass_direction() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (w, h) = (300usize, 200usize);
    let estimator = DirectionEstimator::new(EstimatorParams::default());

    let cases = [
        ((10, 90), 40, Direction::West),
        ((110, 190), 150, Direction::North),
        ((210, 290), 260, Direction::East),
    ];
    for (palm, finger, expected) in cases {
        let mask = hand_mask_u8(w, h, palm, finger);
        let report = estimator.estimate(view(&mask, w, h)).unwrap();
        assert_eq!(report.direction, expected, "palm={palm:?}");
        assert!((report.statistics.ratio_sum() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn hand_straddling_two_zones_equally_is_neutral() {
    // 120 px wide mask, zones [0,40) [40,80) [80,120); blob covers 20 px of
    // the first and 20 px of the last zone only.
    let (w, h) = (120usize, 30usize);
    let mut mask = GrayImageU8::new(w, h);
    mask.fill_rect(20, 5, 40, 25, 255);
    mask.fill_rect(80, 5, 100, 25, 255);
    let report = DirectionEstimator::default()
        .estimate(mask.as_view())
        .unwrap();
    assert_eq!(report.vote, ZoneVote::Tie);
    assert_eq!(report.direction, Direction::Neutral);
    assert_eq!(report.heading, Heading::Degrees(0.0));
}

#[test]
fn empty_frame_has_no_direction() {
    let (w, h) = (64usize, 48usize);
    let mask = vec![0u8; w * h];
    for mode in [ClassifierMode::Discrete, ClassifierMode::Angle] {
        let params = EstimatorParams {
            mode,
            ..Default::default()
        };
        let report = DirectionEstimator::new(params)
            .estimate(view(&mask, w, h))
            .unwrap();
        assert_eq!(report.direction, Direction::Neutral);
        assert_eq!(report.heading, Heading::Undefined);
        assert_eq!(report.statistics.foreground_pixels, 0);
    }
}

#[test]
fn angle_mode_tracks_the_hand_across_many_zones() {
    let (w, h) = (400usize, 120usize);
    let params = EstimatorParams {
        zones: 8,
        mode: ClassifierMode::Angle,
        ..Default::default()
    };
    let estimator = DirectionEstimator::new(params);
    let mut previous = f64::NEG_INFINITY;
    for start in [0usize, 80, 160, 240, 320] {
        let mask = hand_mask_u8(w, h, (start, start + 80), start + 40);
        let report = estimator.estimate(view(&mask, w, h)).unwrap();
        let angle = report.heading.degrees().unwrap();
        assert!(angle > previous, "heading must increase left to right");
        assert!((-90.0..=90.0).contains(&angle));
        previous = angle;
    }
}

#[test]
fn smoothing_removes_isolated_speckles() {
    let (w, h) = (90usize, 60usize);
    let mut mask = GrayImageU8::new(w, h);
    mask.fill_rect(65, 10, 85, 50, 255);
    // Single-pixel speckles in the left zone.
    for (x, y) in [(3, 3), (10, 40), (20, 22), (25, 55), (5, 15)] {
        mask.set(x, y, 255);
    }
    let params = EstimatorParams {
        smoothing: Some(ConvolverParams {
            kernel_size: 5,
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = DirectionEstimator::new(params)
        .estimate(mask.as_view())
        .unwrap();
    assert_eq!(report.direction, Direction::East);
    assert_eq!(report.statistics.stats[0].pixels, 0);
}

#[test]
fn stage_functions_compose_like_the_estimator() {
    let (w, h) = (99usize, 33usize);
    let mask = hand_mask_u8(w, h, (5, 60), 30);
    let zones = partition_zones(w, h, 4).unwrap();
    let stats = compute_statistics(view(&mask, w, h), &zones).unwrap();
    let params = EstimatorParams {
        zones: 4,
        ..Default::default()
    };
    let report = DirectionEstimator::new(params)
        .estimate(view(&mask, w, h))
        .unwrap();
    assert_eq!(report.statistics, stats);
    // Four zones: the discrete mode has no mapping.
    assert_eq!(report.direction, Direction::Neutral);
}

#[test]
fn degenerate_input_is_rejected() {
    let data = [0u8; 4];
    let err = DirectionEstimator::default()
        .estimate(view(&data, 0, 4))
        .unwrap_err();
    assert_eq!(err.kind(), hand_direction::ErrorKind::InvalidArgument);
}
