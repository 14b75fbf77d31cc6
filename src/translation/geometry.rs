//! Overlay geometry
//!
//! Pure derivations from grid coordinates. Nothing here fails: malformed
//! coordinate data degrades to zero-valued geometry so a bad detection can
//! never take the overlay down with it.

use serde::{Deserialize, Serialize};

/// Side length of the detection coordinate grid.
pub const GRID_SIZE: f64 = 1000.0;

/// A rectangle in the unit square, ready to be scaled onto an image view
/// of any size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedRect {
    /// The degenerate rectangle at the origin.
    pub const ZERO: NormalizedRect = NormalizedRect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Convert to pixel coordinates given concrete image dimensions.
    pub fn to_pixels(&self, image_width: u32, image_height: u32) -> PixelRect {
        PixelRect {
            x: (self.x * image_width as f64) as u32,
            y: (self.y * image_height as f64) as u32,
            width: (self.width * image_width as f64) as u32,
            height: (self.height * image_height as f64) as u32,
        }
    }
}

/// Pixel-based rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A point on the detection grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

/// Normalized bounding box for a `[yMin, xMin, yMax, xMax]` grid quad.
///
/// Anything other than a 4-element quad yields [`NormalizedRect::ZERO`].
pub fn normalized_bounding_box(box_2d: &[i64]) -> NormalizedRect {
    match *box_2d {
        [y_min, x_min, y_max, x_max] => NormalizedRect {
            x: x_min as f64 / GRID_SIZE,
            y: y_min as f64 / GRID_SIZE,
            width: (x_max - x_min) as f64 / GRID_SIZE,
            height: (y_max - y_min) as f64 / GRID_SIZE,
        },
        _ => NormalizedRect::ZERO,
    }
}

/// Center of a balloon on the grid.
///
/// Prefers an explicit `[y, x]` center point, falls back to the box
/// midpoint, and bottoms out at the origin.
pub fn center(box_2d: &[i64], center_point: Option<&[i64]>) -> GridPoint {
    if let Some(&[y, x]) = center_point {
        return GridPoint { x, y };
    }
    match *box_2d {
        [y_min, x_min, y_max, x_max] => GridPoint {
            x: (x_min + x_max) / 2,
            y: (y_min + y_max) / 2,
        },
        _ => GridPoint::default(),
    }
}
