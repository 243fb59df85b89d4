//! Rendering pipeline: polygons to encoded GIF bytes.
//!
//! The stages are deliberately small and pure. Polygons are fitted and
//! centred once, each frame rotates and rasterizes its own copy, and the
//! finished index buffers feed the LZW coder and container writer.

mod animate;
mod frame;
mod gif;
mod lzw;
mod preview;
mod raster;
mod transform;

pub use animate::{colour_tier, render_frame, render_frames, rotation_angle};
pub use frame::Frame;
pub use gif::{encode_gif, write_gif};
pub use lzw::{compress, decompress};
pub use preview::{frame_to_rgba, write_preview};
pub use raster::fill_polygon;
pub use transform::{rotate_point, rotate_polygon, FitTransform};
