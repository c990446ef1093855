// SPDX-License-Identifier: GPL-3.0-or-later
// src/infrastructure/card_writer.rs
//
// Output document built on a cairo PDF surface, kept in memory until saved.

use std::path::Path;

use cairo::{Context, FontSlant, FontWeight, PdfSurface};
use image::{DynamicImage, GenericImageView};

use super::surface::image_to_surface;
use crate::domain::document::CardWriter;
use crate::domain::error::DocResult;
use crate::domain::export::{CardLayout, SerialStamp, card_size};
use crate::domain::geometry::Bounds;

/// Accumulates cards as PDF pages in a memory buffer.
pub struct PdfCardWriter {
    surface: PdfSurface,
    context: Context,
    cards: usize,
}

impl PdfCardWriter {
    pub fn new() -> DocResult<Self> {
        let size = card_size();
        let surface = PdfSurface::for_stream(size.width, size.height, Vec::<u8>::new())
            .map_err(|e| anyhow::anyhow!("Failed to create PDF surface: {e}"))?;
        let context = Context::new(&surface)
            .map_err(|e| anyhow::anyhow!("Failed to create Cairo context: {e}"))?;

        Ok(Self {
            surface,
            context,
            cards: 0,
        })
    }

    /// Paint `image` stretched into `target`.
    fn place_image(&self, image: &DynamicImage, target: &Bounds) -> DocResult<()> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Ok(());
        }
        let source = image_to_surface(image)?;

        self.context.save()?;
        self.context.translate(target.x0, target.y0);
        self.context
            .scale(target.width() / f64::from(width), target.height() / f64::from(height));
        self.context.set_source_surface(&source, 0.0, 0.0)?;
        self.context.paint()?;
        self.context.restore()?;
        Ok(())
    }

    /// Right-align the serial on the first line of its box.
    fn stamp_serial(&self, stamp: &SerialStamp) -> DocResult<()> {
        let color = stamp.color;
        self.context
            .select_font_face(stamp.font_family, FontSlant::Normal, FontWeight::Normal);
        self.context.set_font_size(stamp.font_size);
        self.context.set_source_rgb(color.r, color.g, color.b);

        let text = self.context.text_extents(&stamp.text)?;
        let font = self.context.font_extents()?;
        self.context
            .move_to(stamp.area.x1 - text.x_advance(), stamp.area.y0 + font.ascent());
        self.context.show_text(&stamp.text)?;
        Ok(())
    }
}

impl CardWriter for PdfCardWriter {
    fn add_card(
        &mut self,
        layout: &CardLayout,
        crop: &DynamicImage,
        notice: &DynamicImage,
    ) -> DocResult<()> {
        self.surface.set_size(layout.page.width, layout.page.height)?;

        self.place_image(crop, &layout.crop)?;
        self.stamp_serial(&layout.serial)?;
        self.place_image(notice, &layout.notice)?;

        self.context.show_page()?;
        self.cards += 1;
        Ok(())
    }

    fn card_count(&self) -> usize {
        self.cards
    }

    fn save(self, path: &Path) -> DocResult<()> {
        let Self {
            surface, context, ..
        } = self;
        drop(context);

        let stream = surface
            .finish_output_stream()
            .map_err(|_| anyhow::anyhow!("Failed to finish PDF output"))?;
        let bytes = stream
            .downcast::<Vec<u8>>()
            .map_err(|_| anyhow::anyhow!("Unexpected PDF output stream"))?;

        std::fs::write(path, bytes.as_slice())?;
        Ok(())
    }
}
