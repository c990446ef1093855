// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// COSMIC desktop shell.

pub mod app;
pub mod message;
pub mod model;
pub mod update;
pub mod views;
pub mod widgets;

pub use app::{Flags, KarteiApp};
pub use message::AppMessage;
pub use model::AppModel;
