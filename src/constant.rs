// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Centimeters per inch (page size conversion).
pub const CM_PER_INCH: f64 = 2.54;

/// Output card width in centimeters.
pub const CARD_WIDTH_CM: f64 = 10.0;

/// Output card height in centimeters.
pub const CARD_HEIGHT_CM: f64 = 15.0;

/// Resolution used to rasterize crop regions for export.
pub const EXPORT_DPI: f64 = 300.0;

/// Mean sample value above which a crop counts as blank (0-255 scale).
pub const BLANK_THRESHOLD: f64 = 250.0;

/// Share of the card height taken by the cropped image.
pub const CROP_HEIGHT_RATIO: f64 = 0.75;

/// Distance from the card top to the cropped image (points).
pub const CROP_TOP_OFFSET: f64 = 40.0;

/// Left/right margin of the serial number box (points).
pub const SERIAL_SIDE_MARGIN: f64 = 15.0;

/// Top edge of the serial number box (points).
pub const SERIAL_BOX_TOP: f64 = 5.0;

/// Bottom edge of the serial number box (points).
pub const SERIAL_BOX_BOTTOM: f64 = 40.0;

/// Serial number font size (points).
pub const SERIAL_FONT_SIZE: f64 = 20.0;

/// Serial number font family.
pub const SERIAL_FONT_FAMILY: &str = "Helvetica";

/// Maximum share of the card width taken by the notice image.
pub const NOTICE_MAX_WIDTH_RATIO: f64 = 0.8;

/// Distance from the card bottom to the notice image (points).
pub const NOTICE_BOTTOM_MARGIN: f64 = 10.0;

/// Shrink factor applied to the fit-to-canvas zoom.
pub const FIT_MARGIN: f64 = 0.9;

/// Canvas edge length (pixels) at or below which the canvas counts as not laid out.
pub const UNREALIZED_CANVAS: f64 = 1.0;

/// Smallest crop edge (points) that is still recorded.
pub const MIN_REGION_SIZE: f64 = 1.0;

/// Outline width of stored regions in the page view (pixels).
pub const REGION_OUTLINE_WIDTH: f64 = 2.0;

/// Font size of region index labels in the page view (pixels).
pub const REGION_LABEL_SIZE: f64 = 40.0;

/// Password tried before asking the user.
pub const DEFAULT_PASSWORD: &str = "66608251";

/// File name infix of exported documents.
pub const EXPORT_INFIX: &str = "_cropped_";

/// Default notice image path, relative to the working directory.
pub const DEFAULT_NOTICE_IMAGE: &str = "notice.jpg";
