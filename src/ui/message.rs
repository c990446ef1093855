// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/message.rs
//
// Application messages: user actions and background results.

use std::path::PathBuf;

use crate::application::ExportReport;
use crate::domain::error::ExportError;
use crate::domain::geometry::PagePoint;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File.
    OpenDialog,
    OpenPath(PathBuf),
    DialogClosed,

    // Password dialog.
    PasswordInput(String),
    PasswordSubmit,
    PasswordCancel,

    // Navigation.
    NextPage,
    PrevPage,

    // Canvas.
    CanvasResized { width: f32, height: f32 },
    DragStart(PagePoint),
    DragMove(PagePoint),
    DragEnd(PagePoint),
    DragCancel,

    // Regions.
    UndoRegion,
    ClearRegions,

    // Export.
    SerialInput(String),
    ToggleBatch(bool),
    Export,
    ExportFinished(Result<ExportReport, ExportError>),
    RevealOutput(PathBuf),

    // Footer notice.
    ClearNotice,
}
