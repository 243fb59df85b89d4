//! Geometry primitives for the render pipeline.

/// A 2D point, in source units or canvas pixels depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An implicitly closed polygon: the last point connects back to the first.
///
/// Curves are flattened before a polygon is built, so consecutive points
/// always describe straight segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polygon needs at least three vertices to enclose area.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 3
    }

    /// Vertical extent as (min_y, max_y). `None` when there are no points.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let mut min = first.y;
        let mut max = first.y;
        for p in &self.points[1..] {
            min = min.min(p.y);
            max = max.max(p.y);
        }
        Some((min, max))
    }

    /// Apply a point transform, producing a new polygon.
    pub fn map<F>(&self, f: F) -> Polygon
    where
        F: Fn(Point) -> Point,
    {
        Polygon::new(self.points.iter().map(|&p| f(p)).collect())
    }
}
