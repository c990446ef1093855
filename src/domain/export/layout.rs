// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/layout.rs
//
// Fixed layout of an exported card: crop image, serial number, notice image.

use crate::constant::{
    CARD_HEIGHT_CM, CARD_WIDTH_CM, CROP_HEIGHT_RATIO, CROP_TOP_OFFSET, EXPORT_DPI,
    NOTICE_BOTTOM_MARGIN, NOTICE_MAX_WIDTH_RATIO, POINTS_PER_INCH, SERIAL_BOX_BOTTOM,
    SERIAL_BOX_TOP, SERIAL_FONT_FAMILY, SERIAL_FONT_SIZE, SERIAL_SIDE_MARGIN,
};
use crate::domain::geometry::{Bounds, Size, cm_to_pt};

/// Card page size (10cm x 15cm) in points.
pub fn card_size() -> Size {
    Size::new(cm_to_pt(CARD_WIDTH_CM), cm_to_pt(CARD_HEIGHT_CM))
}

/// RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
}

/// Serial number text, right-aligned inside `area`.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialStamp {
    pub text: String,
    pub area: Bounds,
    pub font_family: &'static str,
    pub font_size: f64,
    pub color: Rgb,
}

/// Where everything goes on one card. All values in points.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub page: Size,
    pub crop: Bounds,
    pub serial: SerialStamp,
    pub notice: Bounds,
}

impl CardLayout {
    /// Lay out a card for a crop raster of `crop_px` pixels (rendered at the
    /// export DPI) and a notice image of `notice_px` pixels.
    pub fn compose(crop_px: (u32, u32), notice_px: (u32, u32), serial: i64) -> Self {
        let page = card_size();
        Self {
            page,
            crop: place_crop(page, crop_px),
            serial: stamp_serial(page, serial),
            notice: place_notice(page, notice_px),
        }
    }
}

/// Scale to 75% of the card height keeping the aspect ratio, centered
/// horizontally below the serial band.
fn place_crop(page: Size, (width_px, height_px): (u32, u32)) -> Bounds {
    let pt_per_px = POINTS_PER_INCH / EXPORT_DPI;
    let natural_width = f64::from(width_px) * pt_per_px;
    let natural_height = f64::from(height_px.max(1)) * pt_per_px;

    let target_height = page.height * CROP_HEIGHT_RATIO;
    let scale = target_height / natural_height;
    let size = Size::new(natural_width * scale, natural_height * scale);

    Bounds::from_origin((page.width - size.width) / 2.0, CROP_TOP_OFFSET, size)
}

fn stamp_serial(page: Size, serial: i64) -> SerialStamp {
    SerialStamp {
        text: serial.to_string(),
        area: Bounds::new(
            SERIAL_SIDE_MARGIN,
            SERIAL_BOX_TOP,
            page.width - SERIAL_SIDE_MARGIN,
            SERIAL_BOX_BOTTOM,
        ),
        font_family: SERIAL_FONT_FAMILY,
        font_size: SERIAL_FONT_SIZE,
        color: Rgb::RED,
    }
}

/// Shrink (never enlarge) to at most 80% of the card width, centered above
/// the bottom margin. Pixels count as points.
fn place_notice(page: Size, (width_px, height_px): (u32, u32)) -> Bounds {
    let width = f64::from(width_px);
    let height = f64::from(height_px);
    let max_width = page.width * NOTICE_MAX_WIDTH_RATIO;
    let scale = if width > 0.0 {
        (max_width / width).min(1.0)
    } else {
        1.0
    };
    let size = Size::new(width * scale, height * scale);

    Bounds::new(
        (page.width - size.width) / 2.0,
        page.height - size.height - NOTICE_BOTTOM_MARGIN,
        (page.width + size.width) / 2.0,
        page.height - NOTICE_BOTTOM_MARGIN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn crop_fills_three_quarters_of_height() {
        let layout = CardLayout::compose((600, 900), (100, 50), 1);
        let expected_height = layout.page.height * 0.75;
        assert!((layout.crop.height() - expected_height).abs() < EPS);
        // 600x900 keeps its 2:3 ratio.
        assert!((layout.crop.width() - expected_height * 600.0 / 900.0).abs() < EPS);
        assert!((layout.crop.y0 - 40.0).abs() < EPS);
    }

    #[test]
    fn crop_is_centered_horizontally() {
        let layout = CardLayout::compose((300, 1200), (100, 50), 1);
        let left = layout.crop.x0;
        let right = layout.page.width - layout.crop.x1;
        assert!((left - right).abs() < EPS);
    }

    #[test]
    fn serial_box_spans_top_band() {
        let layout = CardLayout::compose((300, 300), (100, 50), 42);
        assert_eq!(layout.serial.text, "42");
        assert_eq!(layout.serial.area.x0, 15.0);
        assert_eq!(layout.serial.area.y0, 5.0);
        assert_eq!(layout.serial.area.y1, 40.0);
        assert!((layout.serial.area.x1 - (layout.page.width - 15.0)).abs() < EPS);
        assert_eq!(layout.serial.font_size, 20.0);
        assert_eq!(layout.serial.color, Rgb::RED);
    }

    #[test]
    fn small_notice_is_not_enlarged() {
        let layout = CardLayout::compose((300, 300), (100, 50), 1);
        assert!((layout.notice.width() - 100.0).abs() < EPS);
        assert!((layout.notice.height() - 50.0).abs() < EPS);
        assert!((layout.notice.y1 - (layout.page.height - 10.0)).abs() < EPS);
    }

    #[test]
    fn wide_notice_is_shrunk_to_eighty_percent() {
        let layout = CardLayout::compose((300, 300), (1000, 200), 1);
        let max_width = layout.page.width * 0.8;
        assert!((layout.notice.width() - max_width).abs() < EPS);
        assert!((layout.notice.height() - 200.0 * max_width / 1000.0).abs() < EPS);
        let left = layout.notice.x0;
        let right = layout.page.width - layout.notice.x1;
        assert!((left - right).abs() < EPS);
    }
}
