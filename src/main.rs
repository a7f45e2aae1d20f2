use hand_direction::image::GrayImageU8;
use hand_direction::{DirectionEstimator, EstimatorParams};

fn main() {
    env_logger::init();
    // Demo stub: paints a fake hand blob on the right third of a mask and
    // runs the estimator on it
    let w = 640usize;
    let h = 480usize;
    let mut mask = GrayImageU8::new(w, h);
    mask.fill_rect(470, 120, 600, 420, 255);
    mask.fill_rect(520, 40, 560, 120, 255);

    let estimator = DirectionEstimator::new(EstimatorParams::default());
    match estimator.estimate(mask.as_view()) {
        Ok(report) => println!(
            "direction={:?} heading={:?} latency_ms={:.3}",
            report.direction, report.heading, report.timing.total_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
