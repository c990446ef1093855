// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/footer.rs
//
// Footer: status readout, region controls, export options and notices.

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, horizontal_space, row, text, text_input};

use crate::config::AppConfig;
use crate::fl;
use crate::ui::model::NoticeKind;
use crate::ui::{AppMessage, AppModel};

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let status = model.session.status();
    let has_regions = status.regions > 0;

    let controls = row()
        .push(text::body(fl!(
            "status",
            page = status.page,
            total = status.total,
            regions = status.regions
        )))
        .push(horizontal_space())
        .push(
            button::standard(fl!("undo"))
                .on_press_maybe(has_regions.then_some(AppMessage::UndoRegion)),
        )
        .push(
            button::standard(fl!("clear"))
                .on_press_maybe(has_regions.then_some(AppMessage::ClearRegions)),
        )
        .push(checkbox(fl!("all-pages"), model.batch).on_toggle(AppMessage::ToggleBatch))
        .push(text::body(fl!("serial-start")))
        .push(
            text_input("1", &model.serial_input)
                .on_input(AppMessage::SerialInput)
                .width(Length::Fixed(96.0)),
        )
        .spacing(8)
        .align_y(Alignment::Center);

    let mut content = column().push(controls).spacing(4).padding([4, 8]);

    if let Some(notice) = &model.notice {
        let label = match notice.kind {
            NoticeKind::Info => text::body(notice.text.as_str()),
            NoticeKind::Warning | NoticeKind::Error => text::heading(notice.text.as_str()),
        };
        let mut line = row().push(label).spacing(8).align_y(Alignment::Center);
        if let Some(path) = &notice.output {
            line = line.push(
                button::link(fl!("show-file")).on_press(AppMessage::RevealOutput(path.clone())),
            );
        }
        line = line
            .push(horizontal_space())
            .push(button::text(fl!("dismiss")).on_press(AppMessage::ClearNotice));
        content = content.push(line);
    } else {
        content = content.push(text::caption(fl!(
            "notice-image",
            path = config.notice_image.display().to_string()
        )));
    }

    content.into()
}
