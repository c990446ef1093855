// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Plain geometry value types shared by the viewport, crop and export code.

/// A point in page space (PDF points, origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height, in points for pages and pixels for canvases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle of the given size with its top-left corner at (`x`, `y`).
    pub fn from_origin(x: f64, y: f64, size: Size) -> Self {
        Self::new(x, y, x + size.width, y + size.height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Number of whole pixels covering `length` units at `scale` pixels per unit.
///
/// Never returns zero so surfaces can always be allocated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pixel_extent(length: f64, scale: f64) -> u32 {
    (length * scale).round().max(1.0) as u32
}

/// Convert centimeters to PDF points.
#[inline]
pub fn cm_to_pt(cm: f64) -> f64 {
    use crate::constant::{CM_PER_INCH, POINTS_PER_INCH};
    cm * POINTS_PER_INCH / CM_PER_INCH
}
