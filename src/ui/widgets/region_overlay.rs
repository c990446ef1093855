// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/region_overlay.rs
//
// Drag-to-select overlay on top of the page raster.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

use crate::domain::crop::CropRect;
use crate::domain::geometry::{self, PagePoint};
use crate::domain::viewport::ZoomState;
use crate::ui::AppMessage;

const FILL_COLOR: Color = Color::from_rgba(0.0, 0.0, 1.0, 0.15);
const BORDER_COLOR: Color = Color::from_rgb(0.0, 0.0, 1.0);
const BORDER_WIDTH: f32 = 2.0;

pub struct RegionOverlay {
    /// Canvas size the current page view was fitted to.
    canvas: geometry::Size,
    /// Mapping of the displayed page, `None` without document.
    zoom: Option<ZoomState>,
    /// Drag rectangle in page space.
    preview: Option<CropRect>,
    /// Latest drag position in page space.
    last: Option<PagePoint>,
    dragging: bool,
}

impl RegionOverlay {
    pub fn new(
        canvas: geometry::Size,
        zoom: Option<ZoomState>,
        preview: Option<CropRect>,
        last: Option<PagePoint>,
        dragging: bool,
    ) -> Self {
        Self {
            canvas,
            zoom,
            preview,
            last,
            dragging,
        }
    }

    /// Where a drag ends. The pointer may be outside the window on release,
    /// then the last position seen during the drag is used.
    fn release_point(&self, bounds: Rectangle, position: Option<Point>) -> Option<PagePoint> {
        position
            .and_then(|pos| self.page_point(bounds, pos))
            .or(self.last)
    }

    /// Cursor position relative to `bounds`, mapped into page space.
    fn page_point(&self, bounds: Rectangle, position: Point) -> Option<PagePoint> {
        let zoom = self.zoom?;
        Some(zoom.to_page_space(
            f64::from(position.x - bounds.x),
            f64::from(position.y - bounds.y),
        ))
    }

    fn draw_preview(&self, renderer: &mut Renderer, bounds: Rectangle) {
        let (Some(zoom), Some(rect)) = (self.zoom, self.preview) else {
            return;
        };

        let (x0, y0) = zoom.to_screen_space(PagePoint::new(rect.x0(), rect.y0()));
        let (x1, y1) = zoom.to_screen_space(PagePoint::new(rect.x1(), rect.y1()));
        let abs_x = bounds.x + x0 as f32;
        let abs_y = bounds.y + y0 as f32;
        let w = (x1 - x0) as f32;
        let h = (y1 - y0) as f32;

        draw_quad(
            renderer,
            Rectangle::new(Point::new(abs_x, abs_y), Size::new(w, h)),
            FILL_COLOR,
        );

        // Top
        draw_quad(
            renderer,
            Rectangle::new(Point::new(abs_x, abs_y), Size::new(w, BORDER_WIDTH)),
            BORDER_COLOR,
        );

        // Bottom
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(abs_x, abs_y + h - BORDER_WIDTH),
                Size::new(w, BORDER_WIDTH),
            ),
            BORDER_COLOR,
        );

        // Left
        draw_quad(
            renderer,
            Rectangle::new(Point::new(abs_x, abs_y), Size::new(BORDER_WIDTH, h)),
            BORDER_COLOR,
        );

        // Right
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(abs_x + w - BORDER_WIDTH, abs_y),
                Size::new(BORDER_WIDTH, h),
            ),
            BORDER_COLOR,
        );
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for RegionOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        self.draw_preview(renderer, layout.bounds());
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        // Page view is fitted to the overlay bounds; report layout changes.
        let (width, height) = (f64::from(bounds.width), f64::from(bounds.height));
        if width != self.canvas.width || height != self.canvas.height {
            self.canvas = geometry::Size::new(width, height);
            shell.publish(AppMessage::CanvasResized {
                width: bounds.width,
                height: bounds.height,
            });
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(pos) = cursor.position_over(bounds)
                    && let Some(point) = self.page_point(bounds, pos)
                {
                    self.dragging = true;
                    shell.publish(AppMessage::DragStart(point));
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.dragging
                    && let Some(point) = self.page_point(bounds, position)
                {
                    shell.publish(AppMessage::DragMove(point));
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if self.dragging {
                    self.dragging = false;
                    let message = match self.release_point(bounds, cursor.position()) {
                        Some(point) => AppMessage::DragEnd(point),
                        None => AppMessage::DragCancel,
                    };
                    shell.publish(message);
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.zoom.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::None
        }
    }
}

impl<'a> From<RegionOverlay> for Element<'a, AppMessage> {
    fn from(widget: RegionOverlay) -> Self {
        Element::new(widget)
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn region_overlay<'a>(
    canvas: geometry::Size,
    zoom: Option<ZoomState>,
    preview: Option<CropRect>,
    last: Option<PagePoint>,
    dragging: bool,
) -> Element<'a, AppMessage> {
    RegionOverlay::new(canvas, zoom, preview, last, dragging).into()
}
