// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/naming.rs
//
// Output file naming.

use std::path::{Path, PathBuf};

use crate::constant::EXPORT_INFIX;

/// `{dir}/{stem}_cropped_{first}-{last}.pdf`, next to the source document.
pub fn output_path(source: &Path, first: i64, last: i64) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let name = format!("{stem}{EXPORT_INFIX}{first}-{last}.pdf");

    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
