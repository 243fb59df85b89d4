//! pinwheel - Looping GIF loader generator
//!
//! A library for rendering small looping animated GIFs from SVG path
//! outlines: flatten the paths to polygons, rotate and rasterize them
//! frame by frame, and write an indexed GIF89a by hand.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use error::{PinwheelError, Result};
pub use parser::{extract_path_data, parse_path_data, parse_svg};
pub use render::{
    encode_gif, fill_polygon, render_frame, render_frames, write_gif, write_preview, FitTransform,
    Frame,
};
pub use types::{
    Colour, ColourPolicy, ColourTier, Disposal, Palette, Point, Polygon, RenderConfig,
    PALETTE_SIZE,
};
