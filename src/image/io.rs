//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PPM/PNG/etc. into an owned 8-bit RGB buffer.
//! - `save_rgb_image`: write an `ImageRgb8` back to disk (format by extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The decoder is the boundary that rejects zero-dimension images: the
//! wrap-around convolution takes coordinates modulo width and height, so an
//! empty axis must never reach the filter.
use super::ImageRgb8;
use image::{DynamicImage, ImageBuffer, Rgb as ImRgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgb8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(format!(
            "Image {} has zero dimension ({width}x{height})",
            path.display()
        ));
    }
    ImageRgb8::from_raw(width, height, img.into_raw())
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Save an RGB buffer to disk; the format is chosen by the file extension
/// (`.ppm` produces binary P6).
pub fn save_rgb_image(image: &ImageRgb8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = image.as_raw().to_vec();
    let buffer: ImageBuffer<ImRgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.width() as u32, image.height() as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgb8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
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
