// SPDX-License-Identifier: GPL-3.0-or-later
// tests/common/mod.rs
//
// In-memory page source and card writer for session and export scenarios.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use image::{DynamicImage, Rgb, RgbImage};
use kartei::constant::POINTS_PER_INCH;
use kartei::domain::crop::CropRect;
use kartei::domain::document::{CardWriter, PageSource};
use kartei::domain::error::{DocResult, LoadError};
use kartei::domain::export::CardLayout;
use kartei::domain::geometry::{Size, pixel_extent};

pub const A4: Size = Size {
    width: 595.0,
    height: 842.0,
};

/// Page fixture: size and whether anything is printed on it.
#[derive(Debug, Clone, Copy)]
pub struct FakePage {
    pub size: Size,
    pub ink: bool,
}

/// Document described by a small text file:
///
/// ```text
/// password secret
/// page 595 842 ink
/// page 595 842 blank
/// ```
#[derive(Debug)]
pub struct FakeDocument {
    pub pages: Vec<FakePage>,
}

impl PageSource for FakeDocument {
    fn open(path: &Path, password: Option<&str>) -> Result<Self, LoadError> {
        let unreadable = |reason: String| LoadError::Unreadable {
            path: path.to_path_buf(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;

        let mut pages = Vec::new();
        for line in text.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                ["password", expected] => {
                    if password != Some(*expected) {
                        return Err(LoadError::PasswordRequired);
                    }
                }
                ["page", width, height, kind] => {
                    let width = width.parse().map_err(|_| unreadable(line.to_string()))?;
                    let height = height.parse().map_err(|_| unreadable(line.to_string()))?;
                    pages.push(FakePage {
                        size: Size::new(width, height),
                        ink: *kind == "ink",
                    });
                }
                [] => {}
                _ => return Err(unreadable(line.to_string())),
            }
        }

        if pages.is_empty() {
            return Err(LoadError::NoPages);
        }
        Ok(Self { pages })
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_size(&self, page: usize) -> DocResult<Size> {
        self.pages
            .get(page)
            .map(|p| p.size)
            .ok_or_else(|| anyhow::anyhow!("no page {page}"))
    }

    fn render_view(
        &self,
        page: usize,
        zoom: f64,
        _regions: &[CropRect],
    ) -> DocResult<DynamicImage> {
        let size = self.page_size(page)?;
        Ok(solid(
            pixel_extent(size.width, zoom),
            pixel_extent(size.height, zoom),
            255,
        ))
    }

    fn render_region(&self, page: usize, region: &CropRect, dpi: f64) -> DocResult<DynamicImage> {
        let fake = self
            .pages
            .get(page)
            .ok_or_else(|| anyhow::anyhow!("no page {page}"))?;
        let scale = dpi / POINTS_PER_INCH;
        let value = if fake.ink { 0 } else { 255 };
        Ok(solid(
            pixel_extent(region.width(), scale),
            pixel_extent(region.height(), scale),
            value,
        ))
    }
}

pub fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb([value, value, value]),
    ))
}

/// Cards seen by a [`RecordingWriter`], shared with the test.
#[derive(Debug, Default, Clone)]
pub struct CardLog {
    inner: Arc<Mutex<Vec<(CardLayout, (u32, u32))>>>,
}

impl CardLog {
    pub fn serials(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .map(|(layout, _)| layout.serial.text.clone())
            .collect()
    }

    pub fn crop_sizes(&self) -> Vec<(u32, u32)> {
        self.inner.lock().unwrap().iter().map(|(_, px)| *px).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

/// Writes one serial per line so the saved file can be inspected.
pub struct RecordingWriter {
    log: CardLog,
    fail_save: bool,
}

impl RecordingWriter {
    pub fn new(log: &CardLog) -> Self {
        Self {
            log: log.clone(),
            fail_save: false,
        }
    }

    pub fn failing_save(log: &CardLog) -> Self {
        Self {
            log: log.clone(),
            fail_save: true,
        }
    }
}

impl CardWriter for RecordingWriter {
    fn add_card(
        &mut self,
        layout: &CardLayout,
        crop: &DynamicImage,
        _notice: &DynamicImage,
    ) -> DocResult<()> {
        self.log
            .inner
            .lock()
            .unwrap()
            .push((layout.clone(), (crop.width(), crop.height())));
        Ok(())
    }

    fn card_count(&self) -> usize {
        self.log.len()
    }

    fn save(self, path: &Path) -> DocResult<()> {
        if self.fail_save {
            anyhow::bail!("disk full");
        }
        std::fs::write(path, self.log.serials().join("\n"))?;
        Ok(())
    }
}

/// Write a fake document description and return its path.
pub fn write_document(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

/// Write a small PNG notice image and return its path.
pub fn write_notice(dir: &Path) -> PathBuf {
    let path = dir.join("notice.png");
    solid(200, 50, 128).save(&path).unwrap();
    path
}
