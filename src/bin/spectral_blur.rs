use hand_direction::config::blur::{load_config, BlurMode};
use hand_direction::diagnostics::{elapsed_ms, TimingBreakdown};
use hand_direction::image::io::{
    load_color_image, load_grayscale_image, save_color_u8, save_grayscale_u8, write_json_file,
};
use hand_direction::spectral::{ConvolutionLayout, SpectralConvolver};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

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
    let convolver = SpectralConvolver::new(config.convolver.clone());

    match config.mode {
        BlurMode::Gray => {
            let gray = load_grayscale_image(&config.input)?;
            let result = convolver
                .run(gray.as_view())
                .map_err(|e| format!("Convolution failed: {e}"))?;
            save_grayscale_u8(&result.image, &config.output)?;
            println!(
                "Blurred {}x{} (working {}x{}) in {:.3} ms",
                gray.width(),
                gray.height(),
                result.layout.working.0,
                result.layout.working.1,
                result.timing.total_ms
            );
            if let Some(path) = &config.timing_json {
                let summary = BlurSummary {
                    layout: result.layout,
                    timing: result.timing,
                };
                write_json_file(path, &summary)?;
            }
        }
        BlurMode::Color => {
            let color = load_color_image(&config.input)?;
            let start = Instant::now();
            let blurred = convolver
                .convolve_channels(&color)
                .map_err(|e| format!("Convolution failed: {e}"))?;
            save_color_u8(&blurred, &config.output)?;
            println!(
                "Blurred {}x{}x{} in {:.3} ms",
                color.width(),
                color.height(),
                color.channels(),
                elapsed_ms(start)
            );
        }
    }
    println!("Saved {}", config.output.display());
    Ok(())
}

fn usage() -> String {
    "Usage: spectral_blur <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlurSummary {
    layout: ConvolutionLayout,
    timing: TimingBreakdown,
}
