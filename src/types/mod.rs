//! Core domain types for pinwheel.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour values
//! - `Palette` - the fixed four-entry table and its brightness tiers
//! - `Point` / `Polygon` - flattened vector geometry
//! - `RenderConfig` - the full animation parameter set

mod colour;
mod config;
mod geom;
mod palette;

pub use colour::Colour;
pub use config::{ColourPolicy, Disposal, RenderConfig};
pub use geom::{Point, Polygon};
pub use palette::{ColourTier, Palette, PALETTE_SIZE};
