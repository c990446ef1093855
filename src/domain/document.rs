// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document.rs
//
// Seams between the crop/export logic and the PDF backends.

use std::path::Path;

use image::DynamicImage;

use crate::domain::crop::CropRect;
use crate::domain::error::{DocResult, LoadError};
use crate::domain::export::CardLayout;
use crate::domain::geometry::Size;

/// A paginated source document that can be rasterized.
///
/// Page space has its origin at the top-left corner of the page, in points.
pub trait PageSource: Sized {
    /// Open `path`, unlocking it with `password` when it is encrypted.
    ///
    /// Returns [`LoadError::PasswordRequired`] when the document is encrypted
    /// and `password` is missing or does not unlock it.
    fn open(path: &Path, password: Option<&str>) -> Result<Self, LoadError>;

    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Page size in points.
    fn page_size(&self, page: usize) -> DocResult<Size>;

    /// Render the whole page at `zoom` pixels per point for display, with
    /// every region outlined and labelled with its 1-based position.
    fn render_view(&self, page: usize, zoom: f64, regions: &[CropRect])
    -> DocResult<DynamicImage>;

    /// Rasterize the part of the page inside `region` at `dpi`, opaque.
    fn render_region(&self, page: usize, region: &CropRect, dpi: f64) -> DocResult<DynamicImage>;
}

/// Accumulates composed cards into an output document.
pub trait CardWriter {
    /// Append one card drawn according to `layout`.
    fn add_card(
        &mut self,
        layout: &CardLayout,
        crop: &DynamicImage,
        notice: &DynamicImage,
    ) -> DocResult<()>;

    /// Number of cards added so far.
    fn card_count(&self) -> usize;

    /// Serialize the document to `path`, consuming the writer.
    fn save(self, path: &Path) -> DocResult<()>;
}
