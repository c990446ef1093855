// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;

use crate::constant::{BLANK_THRESHOLD, DEFAULT_NOTICE_IMAGE, DEFAULT_PASSWORD};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Directory the open dialog starts in.
    pub default_pdf_dir: Option<PathBuf>,
    /// Image stamped at the bottom of every card.
    pub notice_image: PathBuf,
    /// Starting serial number shown when the app starts.
    pub serial_start: i64,
    /// Whether export applies the regions to every page.
    pub batch_all_pages: bool,
    /// Mean sample value above which a crop is skipped as blank.
    pub blank_threshold: f64,
    /// Password tried before prompting for protected documents.
    pub default_password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_pdf_dir: dirs::document_dir().or_else(dirs::home_dir),
            notice_image: PathBuf::from(DEFAULT_NOTICE_IMAGE),
            serial_start: 1,
            batch_all_pages: true,
            blank_threshold: BLANK_THRESHOLD,
            default_password: Some(DEFAULT_PASSWORD.to_string()),
        }
    }
}
