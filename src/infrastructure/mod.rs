// SPDX-License-Identifier: GPL-3.0-or-later
// src/infrastructure/mod.rs
//
// Backends: poppler page source and cairo card writer.

pub mod card_writer;
pub mod portable;
pub mod surface;

pub use card_writer::PdfCardWriter;
pub use portable::PortableDocument;
