// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/header.rs
//
// Header bar: open, page navigation and export.

use cosmic::Element;
use cosmic::widget::{button, icon, text};

use crate::fl;
use crate::ui::{AppMessage, AppModel};

pub fn start(model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    let session = &model.session;
    let has_prev = session.is_open() && session.page_index() > 0;
    let has_next = session.is_open() && session.page_index() + 1 < session.page_count();

    vec![
        button::icon(icon::from_name("document-open-symbolic"))
            .tooltip(fl!("open"))
            .on_press(AppMessage::OpenDialog)
            .into(),
        button::icon(icon::from_name("go-previous-symbolic"))
            .tooltip(fl!("prev-page"))
            .on_press_maybe(has_prev.then_some(AppMessage::PrevPage))
            .into(),
        button::icon(icon::from_name("go-next-symbolic"))
            .tooltip(fl!("next-page"))
            .on_press_maybe(has_next.then_some(AppMessage::NextPage))
            .into(),
    ]
}

pub fn end(model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    let mut items: Vec<Element<'_, AppMessage>> = Vec::new();

    if let Some(name) = model.document_name() {
        items.push(text::body(name).into());
    }

    let label = if model.exporting {
        fl!("exporting")
    } else {
        fl!("export")
    };
    let can_export = model.session.is_open() && !model.exporting;
    items.push(
        button::suggested(label)
            .on_press_maybe(can_export.then_some(AppMessage::Export))
            .into(),
    );

    items
}
