// Coordinate-space conversion between the pixel container and the cell grid.
// All functions here are pure; nothing validates against occupancy.

use crate::config::GridConfig;

/// A rectangle in grid cells. Components are signed so that raw,
/// pointer-derived rects produced mid-drag may sit outside the grid;
/// `is_valid` is the gate back into the well-formed world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    /// The five-clause validity invariant: non-negative origin, at least one
    /// cell in each dimension, and fully inside the grid. Overlap with other
    /// panels is deliberately not part of validity.
    pub fn is_valid(&self, config: &GridConfig) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.w >= 1
            && self.h >= 1
            && self.x + self.w <= config.cols as i32
            && self.y + self.h <= config.rows as i32
    }
}

/// A rectangle in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Project a grid rect into pixel space. Pure multiplication, no validation.
pub fn grid_to_pixels(rect: &GridRect, config: &GridConfig) -> PixelRect {
    PixelRect {
        x: rect.x as f32 * config.cell_width(),
        y: rect.y as f32 * config.cell_height(),
        w: rect.w as f32 * config.cell_width(),
        h: rect.h as f32 * config.cell_height(),
    }
}

/// Quantize a pixel rect onto the grid, rounding each component to the
/// nearest cell boundary. Width and height are floored at one cell. The
/// conversion is lossy; a round-trip may drift by up to one cell, which
/// callers must tolerate.
pub fn pixels_to_grid(x: f32, y: f32, w: f32, h: f32, config: &GridConfig) -> GridRect {
    let cell_w = config.cell_width();
    let cell_h = config.cell_height();

    GridRect {
        x: (x / cell_w).round() as i32,
        y: (y / cell_h).round() as i32,
        w: ((w / cell_w).round() as i32).max(1),
        h: ((h / cell_h).round() as i32).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig::new(12, 8, 1200.0, 800.0)
    }

    #[test]
    fn grid_to_pixels_multiplies() {
        let px = grid_to_pixels(&GridRect::new(2, 3, 4, 2), &config());
        assert_eq!(px, PixelRect { x: 200.0, y: 300.0, w: 400.0, h: 200.0 });
    }

    #[test]
    fn pixels_to_grid_rounds_to_nearest() {
        let rect = pixels_to_grid(149.0, 251.0, 390.0, 210.0, &config());
        assert_eq!(rect, GridRect::new(1, 3, 4, 2));
    }

    #[test]
    fn pixels_to_grid_floors_size_at_one() {
        let rect = pixels_to_grid(0.0, 0.0, 10.0, 0.0, &config());
        assert_eq!(rect.w, 1);
        assert_eq!(rect.h, 1);
    }

    #[test]
    fn raw_pointer_rect_may_be_negative() {
        let rect = pixels_to_grid(-160.0, -40.0, 300.0, 200.0, &config());
        assert_eq!(rect.x, -2);
        assert_eq!(rect.y, 0);
        assert!(!rect.is_valid(&config()));
    }

    #[test]
    fn validity_invariant_clauses() {
        let c = config();
        assert!(GridRect::new(0, 0, 12, 8).is_valid(&c));
        assert!(GridRect::new(11, 7, 1, 1).is_valid(&c));
        assert!(!GridRect::new(-1, 0, 3, 2).is_valid(&c));
        assert!(!GridRect::new(0, -1, 3, 2).is_valid(&c));
        assert!(!GridRect::new(0, 0, 0, 2).is_valid(&c));
        assert!(!GridRect::new(0, 0, 3, 0).is_valid(&c));
        assert!(!GridRect::new(10, 0, 3, 2).is_valid(&c));
        assert!(!GridRect::new(0, 7, 3, 2).is_valid(&c));
    }

    #[test]
    fn round_trip_drift_is_at_most_one_cell() {
        let c = config();
        let original = GridRect::new(3, 2, 5, 4);
        let px = grid_to_pixels(&original, &c);
        let back = pixels_to_grid(px.x + 40.0, px.y + 40.0, px.w, px.h, &c);
        assert!((back.x - original.x).abs() <= 1);
        assert!((back.y - original.y).abs() <= 1);
    }
}
