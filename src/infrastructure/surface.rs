// SPDX-License-Identifier: GPL-3.0-or-later
// src/infrastructure/surface.rs
//
// Conversions between cairo image surfaces and `image` rasters.

use std::io::Cursor;

use cairo::ImageSurface;
use image::{DynamicImage, ImageFormat, ImageReader};

/// Decode a finished cairo surface into an RGB raster.
pub fn surface_to_image(surface: &ImageSurface) -> anyhow::Result<DynamicImage> {
    surface.flush();

    let mut png_data: Vec<u8> = Vec::new();
    surface
        .write_to_png(&mut png_data)
        .map_err(|e| anyhow::anyhow!("Failed to write PNG: {e}"))?;

    let image = ImageReader::new(Cursor::new(png_data))
        .with_guessed_format()
        .map_err(|e| anyhow::anyhow!("Failed to read PNG format: {e}"))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode PNG: {e}"))?;

    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

/// Upload a raster into a cairo surface so it can be painted onto a page.
pub fn image_to_surface(image: &DynamicImage) -> anyhow::Result<ImageSurface> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("Failed to encode PNG: {e}"))?;
    png_data.set_position(0);

    ImageSurface::create_from_png(&mut png_data)
        .map_err(|e| anyhow::anyhow!("Failed to load PNG into Cairo surface: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Context, Format};
    use image::{GenericImageView, Rgb, RgbImage};

    #[test]
    fn surface_round_trip_keeps_pixels() {
        let mut img = RgbImage::from_pixel(8, 4, Rgb([255, 255, 255]));
        img.put_pixel(2, 1, Rgb([0, 0, 0]));
        let surface = image_to_surface(&DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!((surface.width(), surface.height()), (8, 4));

        let back = surface_to_image(&surface).unwrap();
        assert_eq!(back.dimensions(), (8, 4));
        let rgb = back.to_rgb8();
        assert_eq!(rgb.get_pixel(2, 1), &Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn painted_surface_decodes_as_rgb() {
        let surface = ImageSurface::create(Format::Rgb24, 3, 3).unwrap();
        let context = Context::new(&surface).unwrap();
        context.set_source_rgb(1.0, 0.0, 0.0);
        context.paint().unwrap();
        drop(context);

        let image = surface_to_image(&surface).unwrap();
        assert!(matches!(image, DynamicImage::ImageRgb8(_)));
        assert_eq!(image.to_rgb8().get_pixel(1, 1), &Rgb([255, 0, 0]));
    }
}
