//! Frame sequencing: per-frame rotation and colour policies.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::types::{ColourPolicy, ColourTier, Point, Polygon, RenderConfig};

use super::frame::Frame;
use super::raster::fill_polygon;
use super::transform::rotate_polygon;

/// Rotation angle in radians for frame `frame_idx`.
///
/// One full loop covers `rotation_speed` turns, so the final frame leads
/// back into the first without a seam.
pub fn rotation_angle(config: &RenderConfig, frame_idx: u32) -> f64 {
    TAU * f64::from(frame_idx) / f64::from(config.frames) * config.rotation_speed
}

/// Colour tier for polygon `polygon_idx` on frame `frame_idx`.
///
/// Pure in its inputs: the same indices always yield the same tier.
pub fn colour_tier(
    policy: ColourPolicy,
    frame_idx: u32,
    frame_count: u32,
    polygon_idx: usize,
    polygon_count: usize,
) -> ColourTier {
    match policy {
        ColourPolicy::Pulse => pulse_tier(frame_idx, frame_count, polygon_idx, polygon_count),
        ColourPolicy::Sweep => sweep_tier(frame_idx, frame_count, polygon_idx, polygon_count),
    }
}

/// Per-polygon brightness wave, phase-shifted so shapes light in sequence.
///
/// The triangle wave peaks at phase 0.5; thresholds at 0.75 and 0.35 cut
/// it into the three tiers.
fn pulse_tier(
    frame_idx: u32,
    frame_count: u32,
    polygon_idx: usize,
    polygon_count: usize,
) -> ColourTier {
    let cycle = f64::from(frame_count);
    let offset = polygon_idx as f64 * (cycle / polygon_count as f64);
    let phase = (f64::from(frame_idx) - offset) / cycle;
    let phase = phase - phase.floor();
    let pulse = (1.0 - (phase - 0.5).abs() * 2.0).max(0.0);

    if pulse > 0.75 {
        ColourTier::Bright
    } else if pulse > 0.35 {
        ColourTier::Mid
    } else {
        ColourTier::Dim
    }
}

/// Travelling highlight: one polygon is bright, its predecessor holds an
/// afterglow, the rest stay dim. The highlight advances evenly over the
/// loop and visits every polygon once per cycle.
fn sweep_tier(
    frame_idx: u32,
    frame_count: u32,
    polygon_idx: usize,
    polygon_count: usize,
) -> ColourTier {
    let active = (frame_idx as usize * polygon_count / frame_count as usize) % polygon_count;
    let afterglow = (active + polygon_count - 1) % polygon_count;

    if polygon_idx == active {
        ColourTier::Bright
    } else if polygon_idx == afterglow {
        ColourTier::Mid
    } else {
        ColourTier::Dim
    }
}

/// Render one frame: clear to the background, rotate every polygon by the
/// frame angle about the canvas centre, fill in tier colours.
pub fn render_frame(polygons: &[Polygon], config: &RenderConfig, frame_idx: u32) -> Frame {
    let mut frame = Frame::filled(
        usize::from(config.width),
        usize::from(config.height),
        config.background_index,
    );
    let pivot = Point::new(f64::from(config.width) / 2.0, f64::from(config.height) / 2.0);
    let angle = rotation_angle(config, frame_idx);

    for (idx, polygon) in polygons.iter().enumerate() {
        let tier = colour_tier(config.policy, frame_idx, config.frames, idx, polygons.len());
        let rotated = rotate_polygon(polygon, pivot, angle);
        fill_polygon(&mut frame, &rotated, tier.palette_index());
    }

    frame
}

/// Render the whole loop in parallel, ordered by frame index.
pub fn render_frames(polygons: &[Polygon], config: &RenderConfig) -> Vec<Frame> {
    (0..config.frames)
        .into_par_iter()
        .map(|i| render_frame(polygons, config, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn triangle(cx: f64, cy: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(cx, cy - 20.0),
            Point::new(cx + 18.0, cy + 12.0),
            Point::new(cx - 18.0, cy + 12.0),
        ])
    }

    fn test_polygons() -> Vec<Polygon> {
        vec![
            triangle(70.0, 70.0),
            triangle(150.0, 70.0),
            triangle(110.0, 150.0),
        ]
    }

    #[test]
    fn test_rotation_angle_scales_with_speed() {
        let config = RenderConfig::pulse();
        assert_eq!(rotation_angle(&config, 0), 0.0);

        // Frame 12 of 24 at speed 0.25 is an eighth of a turn
        let mid = rotation_angle(&config, 12);
        assert!((mid - TAU / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_pulse_visits_every_tier() {
        for polygon_idx in 0..3 {
            let tiers: HashSet<ColourTier> = (0..24)
                .map(|i| colour_tier(ColourPolicy::Pulse, i, 24, polygon_idx, 3))
                .collect();
            assert!(tiers.contains(&ColourTier::Dim));
            assert!(tiers.contains(&ColourTier::Mid));
            assert!(tiers.contains(&ColourTier::Bright));
        }
    }

    #[test]
    fn test_pulse_peaks_in_sequence() {
        // With three polygons over 24 frames the peaks sit 8 frames apart
        assert_eq!(
            colour_tier(ColourPolicy::Pulse, 12, 24, 0, 3),
            ColourTier::Bright
        );
        assert_eq!(
            colour_tier(ColourPolicy::Pulse, 20, 24, 1, 3),
            ColourTier::Bright
        );
        assert_eq!(
            colour_tier(ColourPolicy::Pulse, 4, 24, 2, 3),
            ColourTier::Bright
        );
    }

    #[test]
    fn test_sweep_one_bright_one_mid_per_frame() {
        let count = 4;
        for frame_idx in 0..24 {
            let tiers: Vec<ColourTier> = (0..count)
                .map(|p| colour_tier(ColourPolicy::Sweep, frame_idx, 24, p, count))
                .collect();
            let bright = tiers.iter().filter(|&&t| t == ColourTier::Bright).count();
            let mid = tiers.iter().filter(|&&t| t == ColourTier::Mid).count();
            assert_eq!(bright, 1, "frame {frame_idx}");
            assert_eq!(mid, 1, "frame {frame_idx}");
        }
    }

    #[test]
    fn test_sweep_highlight_visits_every_polygon() {
        let count = 4;
        let mut visited = HashSet::new();
        for frame_idx in 0..24 {
            for p in 0..count {
                if colour_tier(ColourPolicy::Sweep, frame_idx, 24, p, count) == ColourTier::Bright {
                    visited.insert(p);
                }
            }
        }
        assert_eq!(visited.len(), count);
    }

    #[test]
    fn test_sweep_single_polygon_stays_bright() {
        for frame_idx in 0..12 {
            assert_eq!(
                colour_tier(ColourPolicy::Sweep, frame_idx, 12, 0, 1),
                ColourTier::Bright
            );
        }
    }

    #[test]
    fn test_render_frame_is_deterministic() {
        let polygons = test_polygons();
        let config = RenderConfig::pulse();

        let a = render_frame(&polygons, &config, 7);
        let b = render_frame(&polygons, &config, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let polygons = test_polygons();
        let config = RenderConfig {
            frames: 6,
            ..RenderConfig::pulse()
        };

        let parallel = render_frames(&polygons, &config);
        let sequential: Vec<Frame> = (0..config.frames)
            .map(|i| render_frame(&polygons, &config, i))
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_empty_scene_is_background_only() {
        let config = RenderConfig {
            width: 16,
            height: 16,
            ..RenderConfig::pulse()
        };
        let frame = render_frame(&[], &config, 0);
        assert!(frame.pixels().iter().all(|&p| p == config.background_index));
    }
}
