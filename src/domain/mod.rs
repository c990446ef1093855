// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: geometry, crop regions, export rules and backend seams.
// No UI and no PDF library types in here.

pub mod crop;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod viewport;
