//! Fit and rotation transforms from source space into canvas space.

use crate::types::{Point, Polygon, RenderConfig};

/// Scale-and-centre transform computed once per render.
///
/// The view box is scaled uniformly so it covers the configured canvas
/// fractions, then centred. The smaller per-axis candidate wins, so the
/// artwork never stretches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl FitTransform {
    /// Compute the transform for a render configuration.
    pub fn for_config(config: &RenderConfig) -> Self {
        let sx = f64::from(config.width) * config.fit_x / config.view_box_width;
        let sy = f64::from(config.height) * config.fit_y / config.view_box_height;
        let scale = sx.min(sy);

        let offset_x = (f64::from(config.width) - config.view_box_width * scale) * 0.5;
        let offset_y = (f64::from(config.height) - config.view_box_height * scale) * 0.5;

        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Get the uniform scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a source-space point into canvas space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }

    /// Map a whole polygon into canvas space.
    pub fn apply_polygon(&self, polygon: &Polygon) -> Polygon {
        polygon.map(|p| self.apply(p))
    }
}

/// Rotate a point about `pivot` by `angle` radians.
pub fn rotate_point(p: Point, pivot: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
}

/// Rotate a polygon about `pivot` by `angle` radians.
pub fn rotate_polygon(polygon: &Polygon, pivot: Point, angle: f64) -> Polygon {
    polygon.map(|p| rotate_point(p, pivot, angle))
}
