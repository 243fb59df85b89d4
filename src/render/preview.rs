//! PNG preview output for single frames.
//!
//! Expands a frame's palette indices to RGBA with optional integer
//! scaling, for inspecting one frame of the loop without a GIF viewer.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PinwheelError, Result};
use crate::types::{Colour, RenderConfig};

use super::frame::Frame;

/// Expand a frame to an RGBA image.
///
/// With a transparent configuration, background pixels get a zero alpha
/// channel, matching how viewers composite the animation.
pub fn frame_to_rgba(frame: &Frame, config: &RenderConfig, scale: u32) -> RgbaImage {
    let scale = scale.max(1); // Minimum scale of 1

    let width = frame.width() as u32 * scale;
    let height = frame.height() as u32 * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (i, &index) in frame.pixels().iter().enumerate() {
        let x = (i % frame.width()) as u32;
        let y = (i / frame.width()) as u32;
        let rgba = Rgba(pixel_rgba(index, config));

        // Fill scaled pixels
        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(x * scale + sx, y * scale + sy, rgba);
            }
        }
    }

    img
}

/// Write a single frame to a PNG file.
pub fn write_preview(frame: &Frame, config: &RenderConfig, path: &Path, scale: u32) -> Result<()> {
    let img = frame_to_rgba(frame, config, scale);

    img.save(path).map_err(|e| PinwheelError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {e}"),
    })?;

    Ok(())
}

fn pixel_rgba(index: u8, config: &RenderConfig) -> [u8; 4] {
    let colour = config.palette.get(index).unwrap_or(Colour::BLACK);
    let alpha = if config.transparent && index == config.background_index {
        0
    } else {
        255
    };
    let [r, g, b] = colour.triple();
    [r, g, b, alpha]
}
