// SPDX-License-Identifier: GPL-3.0-or-later
// src/application/mod.rs
//
// Application layer: session orchestration, page view and export composer.

pub mod composer;
pub mod renderer;
pub mod session;

pub use composer::{ExportComposer, ExportOutcome, ExportReport, ExportRequest};
pub use renderer::{PageRenderer, PageView, StatusLine};
pub use session::{DocumentSession, PageScope, PasswordPrompt};
