//! GIF89a container assembly.
//!
//! Byte layout: signature, logical screen descriptor, global colour
//! table, a NETSCAPE looping extension, then per frame a graphic control
//! extension, image descriptor and sub-blocked LZW data, closed by the
//! trailer.

use std::fs;
use std::path::Path;

use crate::error::{PinwheelError, Result};
use crate::types::{Palette, RenderConfig};

use super::frame::Frame;
use super::lzw;

/// Global colour table present.
const GCT_PRESENT: u8 = 1 << 7;
/// Colour resolution field: 8 bits per primary.
const COLOUR_RESOLUTION: u8 = 7 << 4;
/// Table size code: 2^(1+1) = 4 entries.
const GCT_SIZE_CODE: u8 = 1;

/// Assemble the complete animation into an in-memory byte stream.
pub fn encode_gif(config: &RenderConfig, frames: &[Frame]) -> Result<Vec<u8>> {
    let canvas = (usize::from(config.width), usize::from(config.height));
    for frame in frames {
        if frame.size() != canvas {
            return Err(PinwheelError::Codec {
                message: format!(
                    "Frame is {}x{} but the canvas is {}x{}",
                    frame.width(),
                    frame.height(),
                    config.width,
                    config.height
                ),
                help: None,
            });
        }
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"GIF89a");

    // Logical screen descriptor
    push_u16_le(&mut out, config.width);
    push_u16_le(&mut out, config.height);
    out.push(GCT_PRESENT | COLOUR_RESOLUTION | GCT_SIZE_CODE);
    out.push(config.background_index);
    out.push(0); // pixel aspect ratio: square

    for colour in config.palette.iter() {
        out.extend_from_slice(&colour.triple());
    }

    // NETSCAPE2.0 application extension: loop forever
    out.extend_from_slice(b"\x21\xFF\x0BNETSCAPE2.0\x03\x01\x00\x00\x00");

    for frame in frames {
        // Graphic control extension
        out.extend_from_slice(&[0x21, 0xF9, 0x04]);
        let mut flags = config.disposal.wire_code() << 2;
        if config.transparent {
            flags |= 1;
        }
        out.push(flags);
        push_u16_le(&mut out, config.delay_cs);
        out.push(config.background_index);
        out.push(0);

        // Image descriptor: full-canvas frame at the origin, no local table
        out.push(0x2C);
        push_u16_le(&mut out, 0);
        push_u16_le(&mut out, 0);
        push_u16_le(&mut out, config.width);
        push_u16_le(&mut out, config.height);
        out.push(0);

        out.push(Palette::MIN_CODE_SIZE);
        let compressed = lzw::compress(Palette::MIN_CODE_SIZE, frame.pixels());
        push_sub_blocks(&mut out, &compressed);
    }

    out.push(0x3B);
    Ok(out)
}

/// Encode the animation and write it to `path`, returning the byte count.
pub fn write_gif(config: &RenderConfig, frames: &[Frame], path: &Path) -> Result<usize> {
    let bytes = encode_gif(config, frames)?;
    fs::write(path, &bytes).map_err(|e| PinwheelError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write GIF: {e}"),
    })?;
    Ok(bytes.len())
}

fn push_u16_le(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Write `data` as length-prefixed sub-blocks with a zero terminator.
fn push_sub_blocks(out: &mut Vec<u8>, data: &[u8]) {
    for chunk in data.chunks(255) {
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
    out.push(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tiny_config() -> RenderConfig {
        RenderConfig {
            width: 4,
            height: 3,
            frames: 2,
            ..RenderConfig::pulse()
        }
    }

    fn tiny_frames(config: &RenderConfig) -> Vec<Frame> {
        (0..config.frames)
            .map(|i| {
                Frame::filled(
                    usize::from(config.width),
                    usize::from(config.height),
                    (i % 4) as u8,
                )
            })
            .collect()
    }

    #[test]
    fn test_header_layout() {
        let config = tiny_config();
        let bytes = encode_gif(&config, &tiny_frames(&config)).unwrap();

        assert_eq!(&bytes[0..6], b"GIF89a");
        assert_eq!(&bytes[6..8], &[4, 0]);
        assert_eq!(&bytes[8..10], &[3, 0]);
        assert_eq!(bytes[10], 0xF1);
        assert_eq!(bytes[11], 0); // background index
        assert_eq!(bytes[12], 0); // aspect ratio
        assert_eq!(
            &bytes[13..25],
            &[0, 0, 0, 18, 30, 58, 53, 99, 233, 255, 255, 255]
        );
        assert_eq!(&bytes[25..44], b"\x21\xFF\x0BNETSCAPE2.0\x03\x01\x00\x00\x00");
        assert_eq!(*bytes.last().unwrap(), 0x3B);
    }

    #[test]
    fn test_graphic_control_transparent_restore() {
        let config = tiny_config();
        let bytes = encode_gif(&config, &tiny_frames(&config)).unwrap();

        // First graphic control extension follows the NETSCAPE block
        assert_eq!(&bytes[44..47], &[0x21, 0xF9, 0x04]);
        // Restore-to-background disposal plus the transparency flag
        assert_eq!(bytes[47], 0b0000_1001);
        assert_eq!(&bytes[48..50], &config.delay_cs.to_le_bytes());
        assert_eq!(bytes[50], 0); // transparent colour index
        assert_eq!(bytes[51], 0); // block terminator
        assert_eq!(bytes[52], 0x2C);
    }

    #[test]
    fn test_graphic_control_opaque_keep() {
        let config = RenderConfig {
            width: 4,
            height: 3,
            frames: 1,
            ..RenderConfig::sweep()
        };
        let bytes = encode_gif(&config, &tiny_frames(&config)).unwrap();

        // Keep disposal, no transparency bit
        assert_eq!(bytes[47], 0b0000_0100);
        assert_eq!(&bytes[48..50], &config.delay_cs.to_le_bytes());
    }

    #[test]
    fn test_image_descriptor_layout() {
        let config = tiny_config();
        let bytes = encode_gif(&config, &tiny_frames(&config)).unwrap();

        assert_eq!(bytes[52], 0x2C);
        assert_eq!(&bytes[53..57], &[0, 0, 0, 0]); // left, top
        assert_eq!(&bytes[57..59], &[4, 0]);
        assert_eq!(&bytes[59..61], &[3, 0]);
        assert_eq!(bytes[61], 0); // no local colour table
        assert_eq!(bytes[62], 2); // minimum LZW code size
    }

    #[test]
    fn test_frame_data_decodes_back() {
        let config = tiny_config();
        let frames = tiny_frames(&config);
        let bytes = encode_gif(&config, &frames).unwrap();

        // Collect the first frame's sub-blocks, starting just after the
        // minimum code size byte
        let mut pos = 63;
        let mut data = Vec::new();
        loop {
            let len = usize::from(bytes[pos]);
            pos += 1;
            if len == 0 {
                break;
            }
            data.extend_from_slice(&bytes[pos..pos + len]);
            pos += len;
        }

        let decoded = lzw::decompress(2, &data).unwrap();
        assert_eq!(decoded, frames[0].pixels());
    }

    #[test]
    fn test_sub_blocks_split_at_255() {
        let mut out = Vec::new();
        let data: Vec<u8> = (0..600u32).map(|i| (i % 251) as u8).collect();
        push_sub_blocks(&mut out, &data);

        assert_eq!(out.len(), 604);
        assert_eq!(out[0], 255);
        assert_eq!(out[256], 255);
        assert_eq!(out[512], 90);
        assert_eq!(out[603], 0);
    }

    #[test]
    fn test_frame_size_mismatch_is_an_error() {
        let config = tiny_config();
        let wrong = vec![Frame::filled(5, 5, 0)];
        assert!(encode_gif(&config, &wrong).is_err());
    }
}
