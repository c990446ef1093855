// SPDX-License-Identifier: GPL-3.0-or-later
// src/application/session.rs
//
// Document session: open document, displayed page and its crop regions.

use std::path::{Path, PathBuf};

use crate::application::composer::ExportRequest;
use crate::application::renderer::{PageRenderer, PageView, StatusLine};
use crate::domain::crop::{CropRect, CropRegionStore};
use crate::domain::document::PageSource;
use crate::domain::error::{DocResult, ExportError, LoadError, RegionError};
use crate::domain::export::BlankPolicy;
use crate::domain::geometry::Size;

/// Asks the user for a document password. Called at most once per open.
pub trait PasswordPrompt {
    fn request_password(&mut self, path: &Path) -> Option<String>;
}

impl<F> PasswordPrompt for F
where
    F: FnMut(&Path) -> Option<String>,
{
    fn request_password(&mut self, path: &Path) -> Option<String> {
        self(path)
    }
}

/// Where the export applies the regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScope {
    /// Only the displayed page.
    Current,
    /// Every page of the document.
    All,
}

impl PageScope {
    pub fn from_batch(batch: bool) -> Self {
        if batch { Self::All } else { Self::Current }
    }
}

struct OpenDocument<S> {
    source: S,
    path: PathBuf,
    password: Option<String>,
}

/// Explicit session state passed into every user operation.
///
/// Regions belong to the displayed page and are dropped on navigation. An
/// export still applies them to every page in batch mode.
pub struct DocumentSession<S: PageSource> {
    document: Option<OpenDocument<S>>,
    page_index: usize,
    regions: CropRegionStore,
    default_password: Option<String>,
}

impl<S: PageSource> DocumentSession<S> {
    pub fn new(default_password: Option<String>) -> Self {
        Self {
            document: None,
            page_index: 0,
            regions: CropRegionStore::new(),
            default_password,
        }
    }

    /// Open `path`, trying the default password first and asking `prompt`
    /// once if that does not unlock it.
    ///
    /// On failure the session keeps whatever it had before.
    pub fn open<P: PasswordPrompt>(&mut self, path: &Path, prompt: &mut P) -> Result<(), LoadError> {
        match self.open_unattended(path) {
            Err(LoadError::PasswordRequired) => {
                log::info!("{} is password protected, asking for password", path.display());
                let password = prompt.request_password(path).ok_or(LoadError::Cancelled)?;
                self.open_with_password(path, &password)
            }
            other => other,
        }
    }

    /// Open `path` without asking anyone. Fails with
    /// [`LoadError::PasswordRequired`] when the default password does not
    /// unlock it.
    pub fn open_unattended(&mut self, path: &Path) -> Result<(), LoadError> {
        let password = self.default_password.clone();
        let source = S::open(path, password.as_deref())?;
        self.install(source, path, password)
    }

    /// Single attempt with a user supplied password.
    pub fn open_with_password(&mut self, path: &Path, password: &str) -> Result<(), LoadError> {
        let source = S::open(path, Some(password)).map_err(|e| match e {
            LoadError::PasswordRequired => LoadError::WrongPassword,
            other => other,
        })?;
        self.install(source, path, Some(password.to_string()))
    }

    fn install(&mut self, source: S, path: &Path, password: Option<String>) -> Result<(), LoadError> {
        if source.page_count() == 0 {
            return Err(LoadError::NoPages);
        }

        log::info!(
            "Opened {} ({} pages)",
            path.display(),
            source.page_count()
        );

        self.document = Some(OpenDocument {
            source,
            path: path.to_path_buf(),
            password,
        });
        self.page_index = 0;
        self.regions.clear();
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.document.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.document.as_ref().map(|d| d.path.as_path())
    }

    pub fn source(&self) -> Option<&S> {
        self.document.as_ref().map(|d| &d.source)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.source().map_or(0, PageSource::page_count)
    }

    /// Size of the displayed page in points.
    pub fn page_size(&self) -> Option<Size> {
        self.source()
            .and_then(|s| s.page_size(self.page_index).ok())
    }

    /// Go to the next page. Returns `false` at the last page.
    pub fn next_page(&mut self) -> bool {
        if self.is_open() && self.page_index + 1 < self.page_count() {
            self.page_index += 1;
            self.regions.clear();
            true
        } else {
            false
        }
    }

    /// Go to the previous page. Returns `false` at the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.is_open() && self.page_index > 0 {
            self.page_index -= 1;
            self.regions.clear();
            true
        } else {
            false
        }
    }

    pub fn regions(&self) -> &CropRegionStore {
        &self.regions
    }

    /// Record a region on the displayed page, clipped to the page.
    ///
    /// Returns `false` when there is no document or the clipped region is
    /// too small to keep.
    pub fn record_region(&mut self, rect: CropRect) -> bool {
        let Some(page) = self.page_size() else {
            return false;
        };
        let rect = rect.clamp_to(page);
        if rect.is_degenerate() {
            log::debug!("Ignoring degenerate region {rect:?}");
            return false;
        }
        self.regions.append(rect);
        true
    }

    pub fn undo_region(&mut self) -> Result<CropRect, RegionError> {
        self.regions.remove_last()
    }

    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    /// Render the displayed page fitted to `canvas`. `None` without document.
    pub fn render(&self, canvas: Size) -> DocResult<Option<PageView>> {
        let Some(source) = self.source() else {
            return Ok(None);
        };
        PageRenderer::render(source, self.page_index, &self.regions, canvas).map(Some)
    }

    pub fn status(&self) -> StatusLine {
        let page = self.is_open().then_some(self.page_index);
        PageRenderer::status(page, self.page_count(), self.regions.len())
    }

    /// Pages an export with `scope` works on, in order.
    pub fn pages_for(&self, scope: PageScope) -> Vec<usize> {
        match scope {
            PageScope::All => (0..self.page_count()).collect(),
            PageScope::Current if self.is_open() => vec![self.page_index],
            PageScope::Current => Vec::new(),
        }
    }

    /// Snapshot everything an export run needs.
    ///
    /// Checks the regions first, then the document; serial and notice image
    /// are checked by the composer.
    pub fn export_request(
        &self,
        serial_input: &str,
        scope: PageScope,
        notice_image: &Path,
        blank: BlankPolicy,
    ) -> Result<ExportRequest, ExportError> {
        if self.regions.is_empty() {
            return Err(ExportError::NoRegions);
        }
        let document = self.document.as_ref().ok_or(ExportError::NoDocument)?;

        Ok(ExportRequest {
            source_path: document.path.clone(),
            password: document.password.clone(),
            pages: self.pages_for(scope),
            regions: self.regions.as_slice().to_vec(),
            serial_input: serial_input.to_string(),
            notice_image: notice_image.to_path_buf(),
            blank,
        })
    }
}
