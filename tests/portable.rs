// SPDX-License-Identifier: GPL-3.0-or-later
// tests/portable.rs
//
// Poppler source and cairo writer against real PDF files.

use std::path::{Path, PathBuf};

use cairo::{Context, PdfSurface};
use image::{DynamicImage, Rgb, RgbImage};
use kartei::application::{DocumentSession, ExportComposer, ExportOutcome, PageScope};
use kartei::domain::crop::CropRect;
use kartei::domain::document::PageSource;
use kartei::domain::export::{BlankPolicy, card_size, mean_sample};
use kartei::infrastructure::{PdfCardWriter, PortableDocument};
use poppler::PopplerDocument;

/// A4 document: page 1 has a black square at (100,100)-(300,300), page 2 is empty.
fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("scan.pdf");
    let surface = PdfSurface::new(595.0, 842.0, &path).unwrap();
    let context = Context::new(&surface).unwrap();

    context.set_source_rgb(0.0, 0.0, 0.0);
    context.rectangle(100.0, 100.0, 200.0, 200.0);
    context.fill().unwrap();
    context.show_page().unwrap();
    context.show_page().unwrap();

    drop(context);
    surface.finish();
    path
}

/// A4 document with the same black square on every one of `pages` pages.
fn write_inked(dir: &Path, pages: usize) -> PathBuf {
    let path = dir.join("inked.pdf");
    let surface = PdfSurface::new(595.0, 842.0, &path).unwrap();
    let context = Context::new(&surface).unwrap();

    for _ in 0..pages {
        context.set_source_rgb(0.0, 0.0, 0.0);
        context.rectangle(100.0, 100.0, 200.0, 200.0);
        context.fill().unwrap();
        context.show_page().unwrap();
    }

    drop(context);
    surface.finish();
    path
}

fn write_notice(dir: &Path) -> PathBuf {
    let path = dir.join("notice.png");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 60, Rgb([40, 40, 40])))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn opens_and_measures_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let doc = PortableDocument::open(&path, None).unwrap();
    assert_eq!(doc.page_count(), 2);
    let size = doc.page_size(0).unwrap();
    assert!((size.width - 595.0).abs() < 0.5);
    assert!((size.height - 842.0).abs() < 0.5);
}

#[test]
fn region_raster_follows_dpi_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let doc = PortableDocument::open(&path, None).unwrap();
    let region = CropRect::new(100.0, 100.0, 172.0, 172.0);

    let inked = doc.render_region(0, &region, 300.0).unwrap();
    assert_eq!((inked.width(), inked.height()), (300, 300));
    assert!(mean_sample(&inked).unwrap() < 10.0);
    assert!(!BlankPolicy::default().is_blank(&inked));

    let empty = doc.render_region(1, &region, 300.0).unwrap();
    assert!(BlankPolicy::default().is_blank(&empty));
}

#[test]
fn view_raster_matches_zoom() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let doc = PortableDocument::open(&path, None).unwrap();

    let regions = [CropRect::new(100.0, 100.0, 300.0, 300.0)];
    let view = doc.render_view(0, 0.5, &regions).unwrap();
    assert_eq!((view.width(), view.height()), (298, 421));
}

#[test]
fn view_raster_draws_outline_and_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let doc = PortableDocument::open(&path, None).unwrap();

    // Empty page, zoom 1: one pixel per point.
    let regions = [CropRect::new(100.0, 100.0, 300.0, 300.0)];
    let view = doc.render_view(1, 1.0, &regions).unwrap().to_rgb8();

    // 2px stroke centered on the left edge covers pixels 99 and 100.
    assert_eq!(view.get_pixel(99, 200), &Rgb([0, 0, 255]));
    assert_eq!(view.get_pixel(100, 200), &Rgb([0, 0, 255]));
    assert_eq!(view.get_pixel(150, 150), &Rgb([255, 255, 255]));

    let red = (180..220)
        .flat_map(|x| (180..220).map(move |y| (x, y)))
        .filter(|&(x, y)| {
            let Rgb([r, g, b]) = *view.get_pixel(x, y);
            r > 200 && g < 80 && b < 80
        })
        .count();
    assert!(red > 0, "no label pixels around the region center");
}

#[test]
fn exported_cards_carry_their_serials() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_inked(dir.path(), 2);
    let notice = write_notice(dir.path());

    let mut session: DocumentSession<PortableDocument> = DocumentSession::new(None);
    session
        .open(&path, &mut |_: &Path| -> Option<String> { None })
        .unwrap();
    assert!(session.record_region(CropRect::new(90.0, 90.0, 310.0, 310.0)));

    let request = session
        .export_request("1", PageScope::All, &notice, BlankPolicy::default())
        .unwrap();
    let report = ExportComposer::run_from_path::<PortableDocument, _>(
        &request,
        PdfCardWriter::new().unwrap(),
    )
    .unwrap();

    let output = dir.path().join("inked_cropped_1-2.pdf");
    assert!(matches!(report.outcome, ExportOutcome::Written { cards: 2, .. }));

    let cards = PopplerDocument::new_from_file(&output, None).unwrap();
    assert_eq!(cards.get_n_pages(), 2);
    for (index, serial) in ["1", "2"].into_iter().enumerate() {
        let page = cards.get_page(index).unwrap();
        let text = page.get_text().unwrap_or_default();
        assert_eq!(text.trim(), serial, "card {index}");
    }
}

#[test]
fn export_writes_card_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let notice = write_notice(dir.path());

    let mut session: DocumentSession<PortableDocument> = DocumentSession::new(None);
    session
        .open(&path, &mut |_: &Path| -> Option<String> { None })
        .unwrap();
    assert!(session.record_region(CropRect::new(90.0, 90.0, 310.0, 310.0)));

    let request = session
        .export_request("1", PageScope::All, &notice, BlankPolicy::default())
        .unwrap();
    let report = ExportComposer::run_from_path::<PortableDocument, _>(
        &request,
        PdfCardWriter::new().unwrap(),
    )
    .unwrap();

    let output = dir.path().join("scan_cropped_1-1.pdf");
    assert_eq!(
        report.outcome,
        ExportOutcome::Written {
            path: output.clone(),
            cards: 1,
            first: 1,
            last: 1,
        }
    );
    assert_eq!(report.skipped, 1);

    let cards = PortableDocument::open(&output, None).unwrap();
    assert_eq!(cards.page_count(), 1);
    let size = cards.page_size(0).unwrap();
    let expected = card_size();
    assert!((size.width - expected.width).abs() < 0.5);
    assert!((size.height - expected.height).abs() < 0.5);
}
