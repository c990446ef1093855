// SPDX-License-Identifier: GPL-3.0-or-later
// src/infrastructure/portable.rs
//
// Portable documents (PDF) with poppler backend.

use std::path::Path;

use cairo::{Context, FontSlant, FontWeight, Format, ImageSurface};
use image::DynamicImage;
use poppler::{PopplerDocument, PopplerPage};

use super::surface::surface_to_image;
use crate::constant::{POINTS_PER_INCH, REGION_LABEL_SIZE, REGION_OUTLINE_WIDTH};
use crate::domain::crop::CropRect;
use crate::domain::document::PageSource;
use crate::domain::error::{DocResult, LoadError};
use crate::domain::geometry::{Size, pixel_extent};

/// Represents a portable document (PDF).
pub struct PortableDocument {
    /// The parsed PDF document.
    document: PopplerDocument,
    /// Total number of pages.
    num_pages: usize,
}

impl PortableDocument {
    fn page(&self, page_index: usize) -> DocResult<PopplerPage> {
        self.document
            .get_page(page_index)
            .ok_or_else(|| anyhow::anyhow!("Failed to get page {page_index}"))
    }
}

/// Poppler reports locked documents through its error message only.
fn is_password_error(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("encrypt") || message.contains("password")
}

/// Opaque white drawing surface of the given pixel size.
fn white_canvas(width: u32, height: u32) -> DocResult<(ImageSurface, Context)> {
    let width = i32::try_from(width)?;
    let height = i32::try_from(height)?;

    let surface = ImageSurface::create(Format::Rgb24, width, height)
        .map_err(|e| anyhow::anyhow!("Failed to create Cairo surface: {e}"))?;
    let context = Context::new(&surface)
        .map_err(|e| anyhow::anyhow!("Failed to create Cairo context: {e}"))?;

    // Fill with white background.
    context.set_source_rgb(1.0, 1.0, 1.0);
    context.paint()?;

    Ok((surface, context))
}

/// Outline `rect` (device pixels) and put `label` in its middle.
fn draw_region(context: &Context, rect: &CropRect, zoom: f64, label: usize) -> DocResult<()> {
    let (x0, y0) = (rect.x0() * zoom, rect.y0() * zoom);
    let (width, height) = (rect.width() * zoom, rect.height() * zoom);

    context.set_source_rgb(0.0, 0.0, 1.0);
    context.set_line_width(REGION_OUTLINE_WIDTH);
    context.rectangle(x0, y0, width, height);
    context.stroke()?;

    let text = label.to_string();
    context.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
    context.set_font_size(REGION_LABEL_SIZE);
    let extents = context.text_extents(&text)?;
    context.set_source_rgb(1.0, 0.0, 0.0);
    context.move_to(
        x0 + width / 2.0 - (extents.width() / 2.0 + extents.x_bearing()),
        y0 + height / 2.0 - (extents.height() / 2.0 + extents.y_bearing()),
    );
    context.show_text(&text)?;
    Ok(())
}

impl PageSource for PortableDocument {
    fn open(path: &Path, password: Option<&str>) -> Result<Self, LoadError> {
        let absolute = std::fs::canonicalize(path).map_err(|e| LoadError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let document = PopplerDocument::new_from_file(&absolute, password).map_err(|e| {
            let reason = e.to_string();
            if is_password_error(&reason) {
                LoadError::PasswordRequired
            } else {
                LoadError::Unreadable {
                    path: path.to_path_buf(),
                    reason,
                }
            }
        })?;

        let num_pages = document.get_n_pages();
        if num_pages == 0 {
            return Err(LoadError::NoPages);
        }

        Ok(Self {
            document,
            num_pages,
        })
    }

    fn page_count(&self) -> usize {
        self.num_pages
    }

    fn page_size(&self, page: usize) -> DocResult<Size> {
        let (width, height) = self.page(page)?.get_size();
        Ok(Size::new(width, height))
    }

    fn render_view(
        &self,
        page: usize,
        zoom: f64,
        regions: &[CropRect],
    ) -> DocResult<DynamicImage> {
        let poppler_page = self.page(page)?;
        let (page_width, page_height) = poppler_page.get_size();

        let (surface, context) = white_canvas(
            pixel_extent(page_width, zoom),
            pixel_extent(page_height, zoom),
        )?;

        context.save()?;
        context.scale(zoom, zoom);
        poppler_page.render(&context);
        context.restore()?;

        for (index, rect) in regions.iter().enumerate() {
            draw_region(&context, rect, zoom, index + 1)?;
        }

        drop(context);
        surface_to_image(&surface)
    }

    fn render_region(&self, page: usize, region: &CropRect, dpi: f64) -> DocResult<DynamicImage> {
        let poppler_page = self.page(page)?;
        let scale = dpi / POINTS_PER_INCH;

        let (surface, context) = white_canvas(
            pixel_extent(region.width(), scale),
            pixel_extent(region.height(), scale),
        )?;

        context.scale(scale, scale);
        context.translate(-region.x0(), -region.y0());
        poppler_page.render(&context);

        drop(context);
        surface_to_image(&surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_errors_are_recognized() {
        assert!(is_password_error("Document is encrypted"));
        assert!(is_password_error("Incorrect password"));
        assert!(!is_password_error("PDF document is damaged"));
        assert!(!is_password_error("No such file or directory"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");
        match PortableDocument::open(&path, None) {
            Err(LoadError::Unreadable { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(_) => panic!("missing file opened"),
        }
    }
}
