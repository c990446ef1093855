// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/viewport.rs
//
// Mapping between canvas pixels and page space for the fitted page view.

use crate::constant::{FIT_MARGIN, UNREALIZED_CANVAS};
use crate::domain::geometry::{PagePoint, Size, pixel_extent};

/// Display scale and centering offset of the page inside the canvas.
///
/// Recomputed whenever the page is shown, because the canvas may have been
/// resized in between. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    /// Canvas pixels per page point.
    pub zoom: f64,
    /// Horizontal offset of the page image inside the canvas (pixels).
    pub offset_x: f64,
    /// Vertical offset of the page image inside the canvas (pixels).
    pub offset_y: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ZoomState {
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            zoom,
            offset_x,
            offset_y,
        }
    }

    /// Fit `page` into `canvas` with the display margin and center it.
    ///
    /// A canvas that has not been laid out yet falls back to a base zoom of 1.
    pub fn fit(canvas: Size, page: Size) -> Self {
        let base = if canvas.width <= UNREALIZED_CANVAS
            || canvas.height <= UNREALIZED_CANVAS
            || page.width <= 0.0
            || page.height <= 0.0
        {
            1.0
        } else {
            (canvas.width / page.width).min(canvas.height / page.height)
        };
        let zoom = base * FIT_MARGIN;

        let (image_width, image_height) = Self::new(zoom, 0.0, 0.0).image_size(page);
        let offset_x = ((canvas.width - f64::from(image_width)) / 2.0).floor().max(0.0);
        let offset_y = ((canvas.height - f64::from(image_height)) / 2.0).floor().max(0.0);

        Self::new(zoom, offset_x, offset_y)
    }

    /// Pixel size of `page` rendered at this zoom.
    pub fn image_size(&self, page: Size) -> (u32, u32) {
        (
            pixel_extent(page.width, self.zoom),
            pixel_extent(page.height, self.zoom),
        )
    }

    /// Canvas pixel position to page space: `(screen - offset) / zoom`.
    pub fn to_page_space(&self, screen_x: f64, screen_y: f64) -> PagePoint {
        PagePoint::new(
            (screen_x - self.offset_x) / self.zoom,
            (screen_y - self.offset_y) / self.zoom,
        )
    }

    /// Page space to canvas pixel position: `page * zoom + offset`.
    pub fn to_screen_space(&self, point: PagePoint) -> (f64, f64) {
        (
            point.x * self.zoom + self.offset_x,
            point.y * self.zoom + self.offset_y,
        )
    }
}
