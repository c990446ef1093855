// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/rect.rs
//
// Crop rectangle in page space.

use crate::constant::MIN_REGION_SIZE;
use crate::domain::geometry::{PagePoint, Size};

/// Crop region in PDF page space (points).
///
/// Always normalized: `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl CropRect {
    /// Build a rectangle from two opposite corners in any order.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn from_corners(a: PagePoint, b: PagePoint) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Clip the rectangle to a page of the given size.
    pub fn clamp_to(&self, page: Size) -> Self {
        let clamp_x = |v: f64| v.clamp(0.0, page.width.max(0.0));
        let clamp_y = |v: f64| v.clamp(0.0, page.height.max(0.0));
        Self::new(
            clamp_x(self.x0),
            clamp_y(self.y0),
            clamp_x(self.x1),
            clamp_y(self.y1),
        )
    }

    /// Too thin to produce any output.
    pub fn is_degenerate(&self) -> bool {
        self.width() < MIN_REGION_SIZE || self.height() < MIN_REGION_SIZE
    }
}
