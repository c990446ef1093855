// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/mod.rs
//
// Custom widgets module.

pub mod region_overlay;

pub use region_overlay::region_overlay;
