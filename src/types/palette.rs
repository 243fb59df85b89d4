//! Fixed four-entry palette and brightness tiers.

use serde::{Deserialize, Serialize};

use super::Colour;

/// Number of palette entries. The pipeline is hard-wired to a 2-bit image.
pub const PALETTE_SIZE: usize = 4;

/// The four-colour table backing every frame.
///
/// Index 0 is the background slot; whether it renders transparent or as an
/// opaque colour is decided by the render configuration, not the palette.
/// Indices 1..=3 are the drawing tiers from dim to bright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette([Colour; PALETTE_SIZE]);

impl Palette {
    /// Palette index of the background slot.
    pub const BACKGROUND: u8 = 0;

    /// GIF LZW minimum code size for a four-entry table.
    pub const MIN_CODE_SIZE: u8 = 2;

    pub const fn new(colours: [Colour; PALETTE_SIZE]) -> Self {
        Self(colours)
    }

    /// Look up a palette entry.
    pub fn get(&self, index: u8) -> Option<Colour> {
        self.0.get(index as usize).copied()
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.0.iter().copied()
    }
}

/// Brightness tier assigned to a polygon for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourTier {
    Dim,
    Mid,
    Bright,
}

impl ColourTier {
    /// The palette index this tier draws with.
    pub const fn palette_index(self) -> u8 {
        match self {
            ColourTier::Dim => 1,
            ColourTier::Mid => 2,
            ColourTier::Bright => 3,
        }
    }
}
