// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/mod.rs
//
// Pure pieces of the card export: layout, blank detection, numbering, naming.

mod blank;
mod layout;
mod naming;
mod serial;

pub use blank::{BlankPolicy, mean_sample};
pub use layout::{CardLayout, Rgb, SerialStamp, card_size};
pub use naming::output_path;
pub use serial::SerialCounter;
