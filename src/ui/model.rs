// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/model.rs
//
// Application state.

use std::path::{Path, PathBuf};

use cosmic::iced::widget::image::Handle as ImageHandle;
use image::GenericImageView;

use crate::application::{DocumentSession, PageView};
use crate::config::AppConfig;
use crate::domain::crop::DragSelection;
use crate::domain::geometry::Size;
use crate::infrastructure::PortableDocument;

/// Severity of the footer notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Message shown in the footer until the next action replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Exported file the notice refers to.
    pub output: Option<PathBuf>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            output: None,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
            output: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            output: None,
        }
    }
}

/// Pending password entry for a protected document.
#[derive(Debug, Clone)]
pub struct PasswordDialog {
    pub path: PathBuf,
    pub input: String,
}

pub struct AppModel {
    // Document.
    pub session: DocumentSession<PortableDocument>,

    // View.
    pub canvas: Size,
    pub view: Option<PageView>,
    pub handle: Option<ImageHandle>,

    // Tools.
    pub selection: DragSelection,

    // Export.
    pub serial_input: String,
    pub batch: bool,
    pub exporting: bool,

    // UI state.
    pub password: Option<PasswordDialog>,
    pub notice: Option<Notice>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: DocumentSession::new(config.default_password.clone()),
            canvas: Size::new(0.0, 0.0),
            view: None,
            handle: None,
            selection: DragSelection::default(),
            serial_input: config.serial_start.to_string(),
            batch: config.batch_all_pages,
            exporting: false,
            password: None,
            notice: None,
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Rebuild the page raster for the current canvas.
    pub fn refresh_view(&mut self) {
        match self.session.render(self.canvas) {
            Ok(Some(view)) => {
                self.handle = Some(create_image_handle(&view.image));
                self.view = Some(view);
            }
            Ok(None) => {
                self.handle = None;
                self.view = None;
            }
            Err(e) => {
                log::error!("Failed to render page: {e}");
                self.set_notice(Notice::error(e.to_string()));
            }
        }
    }

    pub fn document_name(&self) -> Option<String> {
        self.session
            .path()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }
}

/// Create an iced image handle from a rendered page.
pub fn create_image_handle(img: &image::DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let rgba = img.to_rgba8();
    ImageHandle::from_rgba(w, h, rgba.into_raw())
}
