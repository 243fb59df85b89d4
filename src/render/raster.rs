//! Scanline polygon fill.

use crate::types::Polygon;

use super::frame::Frame;

/// Fill `polygon` into `frame` with `index` using the even-odd rule.
///
/// Each covered row samples at its vertical centre. Edge crossings use a
/// half-open test, so a scanline passing exactly through a vertex counts
/// once rather than twice. Spans are half-open on the right: an intercept
/// landing on a column boundary leaves that column empty. Geometry outside
/// the canvas clamps silently, and self-intersecting input stays safe
/// because unpaired intercepts are dropped.
pub fn fill_polygon(frame: &mut Frame, polygon: &Polygon, index: u8) {
    let Some((min_y, max_y)) = polygon.y_bounds() else {
        return;
    };
    let points = polygon.points();
    let width = frame.width();
    let height = frame.height();
    if width == 0 || height == 0 {
        return;
    }

    let y_start = min_y.floor().max(0.0) as usize;
    let y_end = max_y.ceil().min((height - 1) as f64);
    if y_end < y_start as f64 {
        return;
    }
    let y_end = y_end as usize;

    let mut intercepts: Vec<f64> = Vec::new();
    for y in y_start..=y_end {
        let scan_y = y as f64 + 0.5;

        intercepts.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            if a.y == b.y {
                continue;
            }
            let crosses = (a.y <= scan_y && scan_y < b.y) || (b.y <= scan_y && scan_y < a.y);
            if !crosses {
                continue;
            }
            let t = (scan_y - a.y) / (b.y - a.y);
            intercepts.push(a.x + t * (b.x - a.x));
        }
        intercepts.sort_by(f64::total_cmp);

        for pair in intercepts.chunks_exact(2) {
            let x_start = pair[0].ceil().max(0.0) as usize;
            let x_end = (pair[1].ceil() - 1.0).min((width - 1) as f64);
            if x_end < x_start as f64 {
                continue;
            }
            frame.fill_span(y, x_start, x_end as usize, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    fn count(frame: &Frame, index: u8) -> usize {
        frame.pixels().iter().filter(|&&p| p == index).count()
    }

    #[test]
    fn test_axis_aligned_square_covers_exact_area() {
        let mut frame = Frame::filled(20, 20, 0);
        fill_polygon(&mut frame, &square(5.0, 5.0, 15.0, 15.0), 3);

        assert_eq!(count(&frame, 3), 100);
        for y in 0..20 {
            for x in 0..20 {
                let inside = (5..15).contains(&x) && (5..15).contains(&y);
                let expected = if inside { 3 } else { 0 };
                assert_eq!(frame.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fractional_square_rounds_inward() {
        let mut frame = Frame::filled(10, 10, 0);
        fill_polygon(&mut frame, &square(1.5, 1.5, 4.5, 4.5), 1);

        // Columns 2..=4 on rows 1..=3, whose centres lie in [1.5, 4.5)
        assert_eq!(count(&frame, 1), 9);
        assert_eq!(frame.get(2, 1), Some(1));
        assert_eq!(frame.get(4, 3), Some(1));
        assert_eq!(frame.get(1, 2), Some(0));
        assert_eq!(frame.get(5, 2), Some(0));
        assert_eq!(frame.get(3, 4), Some(0));
    }

    #[test]
    fn test_overflowing_polygon_clamps_to_canvas() {
        let mut frame = Frame::filled(20, 20, 0);
        fill_polygon(&mut frame, &square(-5.0, -5.0, 25.0, 25.0), 2);

        assert_eq!(count(&frame, 2), 400);
    }

    #[test]
    fn test_fully_outside_polygon_fills_nothing() {
        let mut frame = Frame::filled(20, 20, 0);
        fill_polygon(&mut frame, &square(30.0, 30.0, 40.0, 40.0), 2);
        fill_polygon(&mut frame, &square(-40.0, -40.0, -30.0, -30.0), 2);

        assert_eq!(count(&frame, 2), 0);
    }

    #[test]
    fn test_degenerate_flat_polygon_fills_nothing() {
        let mut frame = Frame::filled(10, 10, 0);
        // Horizontal sliver: every edge is horizontal
        let flat = Polygon::new(vec![
            Point::new(0.0, 4.0),
            Point::new(9.0, 4.0),
            Point::new(5.0, 4.0),
        ]);
        fill_polygon(&mut frame, &flat, 1);
        assert_eq!(count(&frame, 1), 0);

        // Vertical sliver: intercept pairs collapse to zero-width spans
        let tall = Polygon::new(vec![
            Point::new(4.0, 0.0),
            Point::new(4.0, 9.0),
            Point::new(4.0, 5.0),
        ]);
        fill_polygon(&mut frame, &tall, 1);
        assert_eq!(count(&frame, 1), 0);
    }

    #[test]
    fn test_self_intersecting_polygon_is_safe() {
        let mut frame = Frame::filled(20, 20, 0);
        let bowtie = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ]);
        fill_polygon(&mut frame, &bowtie, 1);

        // Even-odd leaves the crossing region hollow but fills both wings
        assert!(count(&frame, 1) > 0);
        assert_eq!(frame.get(5, 5), Some(0));
    }

    #[test]
    fn test_scanline_through_vertex_counts_once() {
        let mut frame = Frame::filled(12, 12, 0);
        let diamond = Polygon::new(vec![
            Point::new(5.0, 0.5),
            Point::new(10.0, 5.5),
            Point::new(5.0, 10.5),
            Point::new(0.0, 5.5),
        ]);
        fill_polygon(&mut frame, &diamond, 1);

        // Row 0 samples at y = 0.5, exactly the apex: both incident edges
        // report x = 5, so the pair collapses and the row stays empty.
        for x in 0..12 {
            assert_eq!(frame.get(x, 0), Some(0));
        }
        // The widest row crosses near the full diamond width
        assert!(count(&frame, 1) > 30);
    }

    #[test]
    fn test_later_fill_overwrites_earlier() {
        let mut frame = Frame::filled(20, 20, 0);
        fill_polygon(&mut frame, &square(2.0, 2.0, 12.0, 12.0), 1);
        fill_polygon(&mut frame, &square(8.0, 8.0, 18.0, 18.0), 2);

        assert_eq!(frame.get(5, 5), Some(1));
        assert_eq!(frame.get(10, 10), Some(2));
        assert_eq!(frame.get(15, 15), Some(2));
    }

    #[test]
    fn test_empty_polygon_is_no_op() {
        let mut frame = Frame::filled(8, 8, 0);
        fill_polygon(&mut frame, &Polygon::new(Vec::new()), 1);
        assert_eq!(count(&frame, 1), 0);
    }
}
