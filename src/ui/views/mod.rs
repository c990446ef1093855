// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/mod.rs
//
// View functions for the window areas.

pub mod canvas;
pub mod footer;
pub mod header;
pub mod password;
