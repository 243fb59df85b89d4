//! Indexed frame buffer.

/// One animation frame: a canvas-shaped grid of palette indices.
///
/// Storage is row-major and flat, so the buffer doubles as the LZW input
/// stream with no conversion between rasterization and encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame with every pixel set to `index`.
    pub fn filled(width: usize, height: usize, index: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![index; width * height],
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the palette index at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// The row-major index stream.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite the inclusive span [x_start, x_end] of row `y`.
    pub(crate) fn fill_span(&mut self, y: usize, x_start: usize, x_end: usize, index: u8) {
        let row = y * self.width;
        self.pixels[row + x_start..=row + x_end].fill(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let frame = Frame::filled(4, 3, 2);
        assert_eq!(frame.size(), (4, 3));
        assert_eq!(frame.pixels().len(), 12);
        assert!(frame.pixels().iter().all(|&p| p == 2));
    }

    #[test]
    fn test_get_bounds() {
        let frame = Frame::filled(4, 3, 0);
        assert_eq!(frame.get(3, 2), Some(0));
        assert_eq!(frame.get(4, 0), None);
        assert_eq!(frame.get(0, 3), None);
    }

    #[test]
    fn test_fill_span() {
        let mut frame = Frame::filled(5, 2, 0);
        frame.fill_span(1, 1, 3, 9);

        assert_eq!(frame.get(0, 1), Some(0));
        assert_eq!(frame.get(1, 1), Some(9));
        assert_eq!(frame.get(3, 1), Some(9));
        assert_eq!(frame.get(4, 1), Some(0));
        // Row 0 untouched
        assert_eq!(frame.get(1, 0), Some(0));
    }
}
