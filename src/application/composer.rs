// SPDX-License-Identifier: GPL-3.0-or-later
// src/application/composer.rs
//
// Export composer: turns every page x region combination into a numbered
// 10x15cm card and writes the cards into a new PDF next to the source.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};

use crate::constant::EXPORT_DPI;
use crate::domain::crop::CropRect;
use crate::domain::document::{CardWriter, PageSource};
use crate::domain::error::ExportError;
use crate::domain::export::{BlankPolicy, CardLayout, SerialCounter, output_path};

/// Everything one export run needs, detached from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub source_path: PathBuf,
    pub password: Option<String>,
    /// Pages to process, in order.
    pub pages: Vec<usize>,
    /// Regions applied to every page, in order.
    pub regions: Vec<CropRect>,
    /// Starting serial as typed by the user.
    pub serial_input: String,
    pub notice_image: PathBuf,
    pub blank: BlankPolicy,
}

/// How an export run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Cards were written to `path`, numbered `first..=last`.
    Written {
        path: PathBuf,
        cards: usize,
        first: i64,
        last: i64,
    },
    /// Every crop was blank; no file was written.
    NothingExported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub outcome: ExportOutcome,
    /// Page x region combinations evaluated.
    pub attempted: usize,
    /// Combinations skipped as blank.
    pub skipped: usize,
}

/// Validated inputs: parsed serial and decoded notice image.
struct Prepared {
    serial: SerialCounter,
    notice: DynamicImage,
}

pub struct ExportComposer;

impl ExportComposer {
    /// Run an export against an already open `source`.
    pub fn run<S: PageSource, W: CardWriter>(
        source: &S,
        request: &ExportRequest,
        writer: W,
    ) -> Result<ExportReport, ExportError> {
        let prepared = Self::prepare(request)?;
        Self::compose(source, request, prepared, writer)
    }

    /// Run an export on a fresh handle of the source document.
    ///
    /// Used by the background worker; the source is opened only after the
    /// request passed validation.
    pub fn run_from_path<S: PageSource, W: CardWriter>(
        request: &ExportRequest,
        writer: W,
    ) -> Result<ExportReport, ExportError> {
        let prepared = Self::prepare(request)?;
        let source = S::open(&request.source_path, request.password.as_deref())
            .map_err(|e| ExportError::Source(e.to_string()))?;
        Self::compose(&source, request, prepared, writer)
    }

    /// Checks done before any page is touched, in this order: regions,
    /// starting serial, notice image.
    fn prepare(request: &ExportRequest) -> Result<Prepared, ExportError> {
        if request.regions.is_empty() {
            return Err(ExportError::NoRegions);
        }
        let serial = SerialCounter::parse(&request.serial_input)?;
        let notice = load_notice(&request.notice_image)?;
        Ok(Prepared { serial, notice })
    }

    fn compose<S: PageSource, W: CardWriter>(
        source: &S,
        request: &ExportRequest,
        prepared: Prepared,
        mut writer: W,
    ) -> Result<ExportReport, ExportError> {
        let Prepared { mut serial, notice } = prepared;
        let notice_px = notice.dimensions();
        let mut attempted = 0;
        let mut skipped = 0;

        for &page in &request.pages {
            let page_size = source.page_size(page).map_err(|e| ExportError::Render {
                page,
                reason: e.to_string(),
            })?;

            for (index, region) in request.regions.iter().enumerate() {
                attempted += 1;

                let clipped = region.clamp_to(page_size);
                if clipped.is_degenerate() {
                    log::debug!("Page {} region {}: outside page, skipped", page + 1, index + 1);
                    skipped += 1;
                    continue;
                }

                let crop = source
                    .render_region(page, &clipped, EXPORT_DPI)
                    .map_err(|e| ExportError::Render {
                        page,
                        reason: e.to_string(),
                    })?;

                if request.blank.is_blank(&crop) {
                    log::debug!("Page {} region {}: blank, skipped", page + 1, index + 1);
                    skipped += 1;
                    continue;
                }

                let crop = strip_alpha(crop);
                let layout = CardLayout::compose(crop.dimensions(), notice_px, serial.issue()?);
                writer
                    .add_card(&layout, &crop, &notice)
                    .map_err(|e| ExportError::Compose {
                        page,
                        reason: e.to_string(),
                    })?;

                log::debug!(
                    "Page {} region {}: card {}",
                    page + 1,
                    index + 1,
                    layout.serial.text
                );
            }
        }

        let report = |outcome| ExportReport {
            outcome,
            attempted,
            skipped,
        };

        let Some(last) = serial.last() else {
            log::info!("Export finished: all {attempted} crops were blank, nothing written");
            return Ok(report(ExportOutcome::NothingExported));
        };

        let first = serial.first();
        let cards = writer.card_count();
        let path = output_path(&request.source_path, first, last);
        writer.save(&path).map_err(|e| ExportError::Write {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        log::info!(
            "Exported {cards} cards ({first}-{last}) to {}",
            path.display()
        );

        Ok(report(ExportOutcome::Written {
            path,
            cards,
            first,
            last,
        }))
    }
}

fn load_notice(path: &Path) -> Result<DynamicImage, ExportError> {
    if !path.exists() {
        return Err(ExportError::MissingNotice(path.to_path_buf()));
    }
    let unreadable = |reason: String| ExportError::UnreadableNotice {
        path: path.to_path_buf(),
        reason,
    };
    ImageReader::open(path)
        .map_err(|e| unreadable(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| unreadable(e.to_string()))?
        .decode()
        .map_err(|e| unreadable(e.to_string()))
}

fn strip_alpha(image: DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image
    }
}
