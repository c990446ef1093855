// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/blank.rs
//
// Blank crop detection.

use image::DynamicImage;

use crate::constant::BLANK_THRESHOLD;

/// Skips crops whose mean sample value is above a threshold.
///
/// The mean runs over every sample of the raster buffer, all channels
/// together, so strongly colored but light crops can count as blank too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlankPolicy {
    pub threshold: f64,
}

impl Default for BlankPolicy {
    fn default() -> Self {
        Self {
            threshold: BLANK_THRESHOLD,
        }
    }
}

impl BlankPolicy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Strictly above the threshold counts as blank.
    pub fn is_blank_mean(&self, mean: f64) -> bool {
        mean > self.threshold
    }

    /// An empty raster has nothing to show and counts as blank.
    pub fn is_blank(&self, image: &DynamicImage) -> bool {
        mean_sample(image).is_none_or(|mean| self.is_blank_mean(mean))
    }
}

/// Mean of all 8-bit samples in the buffer, `None` when it is empty.
///
/// Rasters with wider channels are reduced to 8-bit RGBA first.
pub fn mean_sample(image: &DynamicImage) -> Option<f64> {
    let converted;
    let samples: &[u8] = match image {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => image.as_bytes(),
        _ => {
            converted = image.to_rgba8();
            converted.as_raw()
        }
    };

    if samples.is_empty() {
        return None;
    }

    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    #[allow(clippy::cast_precision_loss)]
    Some(sum as f64 / samples.len() as f64)
}
