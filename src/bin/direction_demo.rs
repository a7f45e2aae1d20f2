use hand_direction::config::direction::{load_config, DirectionToolConfig};
use hand_direction::estimator::{DetailedEstimate, DirectionEstimator};
use hand_direction::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mask = load_grayscale_image(&config.input)?;
    let estimator = DirectionEstimator::new(config.estimator.clone());
    let detailed = estimator
        .estimate_detailed(mask.as_view())
        .map_err(|e| format!("Estimation failed for {}: {e}", config.input.display()))?;

    print_text_summary(&detailed);

    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &detailed.report)?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&detailed.report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &config, &detailed)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: direction_demo <config.json>".to_string()
}

fn print_text_summary(detailed: &DetailedEstimate) {
    let report = &detailed.report;
    println!(
        "Mask {}x{} | zones={} | foreground={} px",
        report.input.width,
        report.input.height,
        report.input.zones,
        report.statistics.foreground_pixels
    );
    for stat in &report.statistics.stats {
        println!(
            "  zone {:>2}: {:>8} px  ratio={:.4}",
            stat.index, stat.pixels, stat.ratio
        );
    }
    let heading = report
        .heading_degrees()
        .map(|d| format!("{d:.1}°"))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "vote={:?} direction={:?} heading={} ({:.3} ms)",
        report.vote, report.direction, heading, report.timing.total_ms
    );
}

fn save_debug_artifacts(
    dir: &Path,
    config: &DirectionToolConfig,
    detailed: &DetailedEstimate,
) -> Result<(), String> {
    for zone in &detailed.zones {
        let path = dir.join(format!("zone_{:02}_mask.png", zone.index));
        save_grayscale_u8(&zone.mask, &path)?;
    }
    if let Some(smoothed) = &detailed.smoothed_mask {
        save_grayscale_u8(smoothed, &dir.join("smoothed_mask.png"))?;
    }
    write_json_file(&dir.join("estimator_params.json"), &config.estimator)
}
