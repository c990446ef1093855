// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Kartei: cut regions out of PDF pages into numbered 10x15cm cards.

pub mod application;
pub mod config;
pub mod constant;
pub mod domain;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "kartei", version, about)]
pub struct Args {
    /// PDF document to open at startup.
    pub file: Option<PathBuf>,
}
