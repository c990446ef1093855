// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error types surfaced at the boundary of user actions.

use std::path::PathBuf;

use thiserror::Error;

/// Result type of backend operations (rendering, writing).
pub type DocResult<T> = anyhow::Result<T>;

/// Opening a source document failed. The session keeps its previous state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Cannot open {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Document is password protected")]
    PasswordRequired,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Password entry cancelled")]
    Cancelled,

    #[error("Document has no pages")]
    NoPages,
}

/// Crop store notices.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// Informational: undo on an empty store.
    #[error("No region to undo")]
    NothingToUndo,
}

/// An export run was aborted. Nothing was written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("No region selected")]
    NoRegions,

    #[error("No document open")]
    NoDocument,

    #[error("Starting serial number must be a number, got {0:?}")]
    InvalidSerial(String),

    #[error("Notice image not found: {}", .0.display())]
    MissingNotice(PathBuf),

    #[error("Notice image {} cannot be read: {reason}", .path.display())]
    UnreadableNotice { path: PathBuf, reason: String },

    #[error("Serial numbers run past {0}")]
    SerialOverflow(i64),

    #[error("Cannot reopen source document: {0}")]
    Source(String),

    #[error("Rendering page {page} failed: {reason}")]
    Render { page: usize, reason: String },

    #[error("Composing card for page {page} failed: {reason}")]
    Compose { page: usize, reason: String },

    #[error("Cannot create output document: {0}")]
    Output(String),

    #[error("Cannot write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Export interrupted: {0}")]
    Interrupted(String),
}

impl ExportError {
    /// Errors raised before any page was processed.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::NoRegions
                | Self::NoDocument
                | Self::InvalidSerial(_)
                | Self::MissingNotice(_)
                | Self::UnreadableNotice { .. }
        )
    }
}
