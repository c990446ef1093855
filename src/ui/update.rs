// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/update.rs
//
// Message handling: routes user actions into the document session.

use std::path::{Path, PathBuf};

use cosmic::{Action, Task};

use super::app::KarteiApp;
use super::message::AppMessage;
use super::model::{Notice, PasswordDialog};
use crate::application::{ExportComposer, ExportOutcome, ExportReport, ExportRequest, PageScope};
use crate::domain::error::{ExportError, LoadError};
use crate::domain::export::BlankPolicy;
use crate::domain::geometry::Size;
use crate::fl;
use crate::infrastructure::{PdfCardWriter, PortableDocument};

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

pub fn update(app: &mut KarteiApp, message: AppMessage) -> UpdateResult {
    match message {
        // ---- File ----------------------------------------------------------
        AppMessage::OpenDialog => {
            return UpdateResult::Task(pick_document(app.config.default_pdf_dir.clone()));
        }

        AppMessage::OpenPath(path) => open_path(app, &path),

        AppMessage::DialogClosed => {}

        // ---- Password dialog -----------------------------------------------
        AppMessage::PasswordInput(value) => {
            if let Some(dialog) = app.model.password.as_mut() {
                dialog.input = value;
            }
        }

        AppMessage::PasswordSubmit => {
            if let Some(dialog) = app.model.password.take() {
                let result = app
                    .model
                    .session
                    .open_with_password(&dialog.path, &dialog.input);
                finish_open(app, &dialog.path, result);
            }
        }

        AppMessage::PasswordCancel => {
            if let Some(dialog) = app.model.password.take() {
                finish_open(app, &dialog.path, Err(LoadError::Cancelled));
            }
        }

        // ---- Navigation ----------------------------------------------------
        AppMessage::NextPage => {
            if app.model.session.next_page() {
                app.model.selection.reset();
                app.model.refresh_view();
            }
        }

        AppMessage::PrevPage => {
            if app.model.session.prev_page() {
                app.model.selection.reset();
                app.model.refresh_view();
            }
        }

        // ---- Canvas --------------------------------------------------------
        AppMessage::CanvasResized { width, height } => {
            app.model.canvas = Size::new(f64::from(width), f64::from(height));
            app.model.refresh_view();
        }

        AppMessage::DragStart(point) => {
            if app.model.view.is_some() {
                app.model.selection.start(point);
            }
        }

        AppMessage::DragMove(point) => app.model.selection.update(point),

        AppMessage::DragEnd(point) => {
            let Some(page) = app.model.view.as_ref().map(|v| v.page_size) else {
                app.model.selection.reset();
                return UpdateResult::None;
            };
            if let Some(rect) = app.model.selection.finish(point, page)
                && app.model.session.record_region(rect)
            {
                app.model.refresh_view();
            }
        }

        AppMessage::DragCancel => app.model.selection.reset(),

        // ---- Regions -------------------------------------------------------
        AppMessage::UndoRegion => match app.model.session.undo_region() {
            Ok(_) => app.model.refresh_view(),
            Err(e) => {
                log::info!("{e}");
                app.model.set_notice(Notice::info(fl!("nothing-to-undo")));
            }
        },

        AppMessage::ClearRegions => {
            app.model.session.clear_regions();
            app.model.refresh_view();
        }

        // ---- Export --------------------------------------------------------
        AppMessage::SerialInput(value) => app.model.serial_input = value,

        AppMessage::ToggleBatch(batch) => {
            app.model.batch = batch;
            app.config.batch_all_pages = batch;
            app.save_config();
        }

        AppMessage::Export => {
            if app.model.exporting {
                return UpdateResult::None;
            }
            let request = app.model.session.export_request(
                &app.model.serial_input,
                PageScope::from_batch(app.model.batch),
                &app.config.notice_image,
                BlankPolicy::new(app.config.blank_threshold),
            );
            match request {
                Ok(request) => {
                    app.model.exporting = true;
                    app.model.set_notice(Notice::info(fl!("exporting")));
                    return UpdateResult::Task(run_export(request));
                }
                Err(e) => report_export_error(app, &e),
            }
        }

        AppMessage::ExportFinished(result) => {
            app.model.exporting = false;
            match result {
                Ok(report) => report_export(app, report),
                Err(e) => report_export_error(app, &e),
            }
        }

        AppMessage::RevealOutput(path) => {
            if let Err(e) = open::that_detached(&path) {
                log::error!("Failed to open {}: {e}", path.display());
                app.model.set_notice(Notice::error(e.to_string()));
            }
        }

        AppMessage::ClearNotice => app.model.clear_notice(),
    }

    UpdateResult::None
}

/// File chooser for PDF documents, starting in `directory`.
fn pick_document(directory: Option<PathBuf>) -> Task<Action<AppMessage>> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(fl!("open-title"))
                .add_filter(fl!("pdf-filter"), &["pdf", "PDF"]);
            if let Some(dir) = directory.filter(|d| d.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_file().await.map(|f| f.path().to_path_buf())
        },
        |picked| match picked {
            Some(path) => Action::App(AppMessage::OpenPath(path)),
            None => Action::App(AppMessage::DialogClosed),
        },
    )
}

fn open_path(app: &mut KarteiApp, path: &Path) {
    app.model.password = None;
    match app.model.session.open_unattended(path) {
        Err(LoadError::PasswordRequired) => {
            log::info!("{} needs a password", path.display());
            app.model.password = Some(PasswordDialog {
                path: path.to_path_buf(),
                input: String::new(),
            });
        }
        result => finish_open(app, path, result),
    }
}

fn finish_open(app: &mut KarteiApp, path: &Path, result: Result<(), LoadError>) {
    match result {
        Ok(()) => {
            app.model.selection.reset();
            app.model.refresh_view();
            let name = app.model.document_name().unwrap_or_default();
            let pages = app.model.session.page_count();
            app.model
                .set_notice(Notice::info(fl!("opened", name = name, pages = pages)));

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                app.config.default_pdf_dir = Some(parent.to_path_buf());
                app.save_config();
            }
        }
        Err(LoadError::Cancelled) => {
            log::info!("Opening {} cancelled", path.display());
            app.model.set_notice(Notice::warning(fl!("open-cancelled")));
        }
        Err(e) => {
            log::error!("Failed to open {}: {e}", path.display());
            app.model
                .set_notice(Notice::error(fl!("open-failed", reason = e.to_string())));
        }
    }
}

/// Run the export on a blocking worker with a fresh document handle.
fn run_export(request: ExportRequest) -> Task<Action<AppMessage>> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let writer = PdfCardWriter::new().map_err(|e| ExportError::Output(e.to_string()))?;
                ExportComposer::run_from_path::<PortableDocument, _>(&request, writer)
            })
            .await
            .unwrap_or_else(|e| Err(ExportError::Interrupted(e.to_string())))
        },
        |result| Action::App(AppMessage::ExportFinished(result)),
    )
}

fn report_export(app: &mut KarteiApp, report: ExportReport) {
    match report.outcome {
        ExportOutcome::Written {
            path,
            cards,
            first,
            last,
        } => {
            let mut notice = Notice::info(fl!(
                "export-done",
                cards = cards,
                first = first,
                last = last,
                skipped = report.skipped,
                path = path.display().to_string()
            ));
            notice.output = Some(path);
            app.model.set_notice(notice);
        }
        ExportOutcome::NothingExported => {
            app.model.set_notice(Notice::info(fl!(
                "nothing-exported",
                attempted = report.attempted
            )));
        }
    }
}

fn report_export_error(app: &mut KarteiApp, error: &ExportError) {
    let notice = match error {
        ExportError::NoRegions => Notice::warning(fl!("no-region")),
        ExportError::NoDocument => Notice::warning(fl!("no-document")),
        ExportError::InvalidSerial(_) => Notice::error(fl!("invalid-serial")),
        ExportError::MissingNotice(path) => Notice::error(fl!(
            "missing-notice",
            path = path.display().to_string()
        )),
        other => Notice::error(fl!("export-failed", reason = other.to_string())),
    };
    log::warn!("Export aborted: {error}");
    app.model.set_notice(notice);
}
