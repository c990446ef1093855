// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/canvas.rs
//
// Render the center canvas area with the current page.

use cosmic::Element;
use cosmic::iced::{Length, Padding};
use cosmic::iced_widget::stack;
use cosmic::widget::{container, image, text};

use crate::fl;
use crate::ui::widgets::region_overlay;
use crate::ui::{AppMessage, AppModel};

/// Page raster placed at the fitted offset, with the selection overlay on top.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let page: Element<'_, AppMessage> = match (&model.view, &model.handle) {
        (Some(view), Some(handle)) => {
            let (width, height) = (view.image.width(), view.image.height());
            let picture = image(handle.clone())
                .width(Length::Fixed(width as f32))
                .height(Length::Fixed(height as f32));

            container(picture)
                .padding(Padding {
                    top: view.zoom.offset_y as f32,
                    right: 0.0,
                    bottom: 0.0,
                    left: view.zoom.offset_x as f32,
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        _ => container(text(fl!("no-document")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into(),
    };

    let overlay = region_overlay(
        model.canvas,
        model.view.as_ref().map(|v| v.zoom),
        model
            .view
            .as_ref()
            .and_then(|v| model.selection.preview(v.page_size)),
        model.selection.current,
        model.selection.is_dragging,
    );

    stack![page, overlay].into()
}
