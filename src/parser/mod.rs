//! Parsers for the SVG input surface.
//!
//! Two layers: `svg` scans the document text for `<path>` payloads, and
//! `path` parses the payload mini-language into flattened polygons. Only
//! absolute M/L/C/Z commands draw; everything else in the document is
//! ignored.
//!
//! # Usage
//!
//! ```ignore
//! use pinwheel::parser::parse_svg;
//!
//! let source = std::fs::read_to_string("logo.svg")?;
//! let polygons = parse_svg(&source, 16)?;
//! ```

pub mod path;
pub mod svg;

// Re-export main entry points
pub use path::parse_path_data;
pub use svg::{extract_path_data, parse_svg};
