// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop regions: rectangle model, ordered store and drag gesture.

mod rect;
mod selection;
mod store;

pub use rect::CropRect;
pub use selection::DragSelection;
pub use store::CropRegionStore;
