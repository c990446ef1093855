// SPDX-License-Identifier: GPL-3.0-or-later
// src/application/renderer.rs
//
// Fitted page view with region outlines, and the status readout.

use image::DynamicImage;

use crate::domain::crop::CropRegionStore;
use crate::domain::document::PageSource;
use crate::domain::error::DocResult;
use crate::domain::geometry::Size;
use crate::domain::viewport::ZoomState;

/// Rendered page ready for the canvas.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Page raster with region outlines and labels drawn in.
    pub image: DynamicImage,
    /// Zoom and offset the image was rendered for.
    pub zoom: ZoomState,
    /// Page size in points.
    pub page_size: Size,
    /// Canvas size the view was fitted to.
    pub canvas: Size,
}

/// Page position and region count shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusLine {
    /// 1-based page number, 0 without a document.
    pub page: usize,
    /// Total pages, 0 without a document.
    pub total: usize,
    /// Regions selected on the displayed page.
    pub regions: usize,
}

pub struct PageRenderer;

impl PageRenderer {
    /// Fit `page` of `source` into `canvas` and draw the stored regions.
    ///
    /// Zoom and offset are recomputed on every call.
    pub fn render<S: PageSource>(
        source: &S,
        page: usize,
        regions: &CropRegionStore,
        canvas: Size,
    ) -> DocResult<PageView> {
        let page_size = source.page_size(page)?;
        let zoom = ZoomState::fit(canvas, page_size);
        let image = source.render_view(page, zoom.zoom, regions.as_slice())?;

        log::debug!(
            "Rendered page {} at zoom {:.3} offset ({}, {}) with {} regions",
            page + 1,
            zoom.zoom,
            zoom.offset_x,
            zoom.offset_y,
            regions.len()
        );

        Ok(PageView {
            image,
            zoom,
            page_size,
            canvas,
        })
    }

    pub fn status(page_index: Option<usize>, total: usize, regions: usize) -> StatusLine {
        StatusLine {
            page: page_index.map_or(0, |i| i + 1),
            total,
            regions,
        }
    }
}
