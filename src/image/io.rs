//! I/O helpers for masks, color images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `load_color_image`: read an image as interleaved 8-bit RGB.
//! - `save_grayscale_u8` / `save_color_u8`: write owned buffers to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ColorImageU8, GrayImageU8};
use image::ColorType;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayImageU8::from_raw(width, height, img.into_raw())
        .map_err(|e| format!("Invalid image {}: {e}", path.display()))
}

/// Load an image from disk as 8-bit RGB.
pub fn load_color_image(path: &Path) -> Result<ColorImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    ColorImageU8::from_raw(width, height, 3, img.into_raw())
        .map_err(|e| format!("Invalid image {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer; the format follows the file extension.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    write_interleaved(path, buffer.data(), buffer.width(), buffer.height(), ColorType::L8)
}

/// Save a 1-, 3- or 4-channel buffer. Single-channel input is written as gray.
pub fn save_color_u8(buffer: &ColorImageU8, path: &Path) -> Result<(), String> {
    let color = match buffer.channels() {
        1 => ColorType::L8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        n => return Err(format!("Cannot save {n}-channel image {}", path.display())),
    };
    write_interleaved(path, buffer.data(), buffer.width(), buffer.height(), color)
}

fn write_interleaved(
    path: &Path,
    data: &[u8],
    width: usize,
    height: usize,
    color: ColorType,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image::save_buffer(path, data, width as u32, height as u32, color)
        .map_err(|e| format!("Cannot write {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
