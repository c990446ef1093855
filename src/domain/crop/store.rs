// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/store.rs
//
// Ordered crop regions of the displayed page.

use super::rect::CropRect;
use crate::domain::error::RegionError;

/// Crop regions in insertion order.
///
/// Export walks the regions in this order and the page view labels them
/// 1-based in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropRegionStore {
    regions: Vec<CropRect>,
}

impl CropRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region at the end.
    pub fn append(&mut self, rect: CropRect) {
        self.regions.push(rect);
    }

    /// Remove the most recently added region.
    pub fn remove_last(&mut self) -> Result<CropRect, RegionError> {
        self.regions.pop().ok_or(RegionError::NothingToUndo)
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn as_slice(&self) -> &[CropRect] {
        &self.regions
    }
}
