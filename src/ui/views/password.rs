// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/password.rs
//
// Password dialog for protected documents.

use cosmic::Element;
use cosmic::widget::{button, dialog, text_input};

use crate::fl;
use crate::ui::AppMessage;
use crate::ui::model::PasswordDialog;

pub fn view(state: &PasswordDialog) -> Element<'_, AppMessage> {
    let name = state
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let input = text_input(fl!("password"), &state.input)
        .password()
        .on_input(AppMessage::PasswordInput);

    dialog()
        .title(fl!("password-title"))
        .body(fl!("password-body", name = name))
        .control(input)
        .primary_action(button::suggested(fl!("unlock")).on_press(AppMessage::PasswordSubmit))
        .secondary_action(button::standard(fl!("cancel")).on_press(AppMessage::PasswordCancel))
        .into()
}
