// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/selection.rs
//
// In-progress drag selection on the page view.

use super::rect::CropRect;
use crate::domain::geometry::{PagePoint, Size};

/// Mouse drag that becomes a crop region on release.
///
/// Coordinates are in page space; the overlay converts canvas positions
/// before feeding them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSelection {
    pub is_dragging: bool,
    pub anchor: Option<PagePoint>,
    pub current: Option<PagePoint>,
}

impl DragSelection {
    pub fn start(&mut self, point: PagePoint) {
        self.is_dragging = true;
        self.anchor = Some(point);
        self.current = Some(point);
    }

    pub fn update(&mut self, point: PagePoint) {
        if !self.is_dragging {
            return;
        }
        self.current = Some(point);
    }

    /// Rectangle spanned so far, clipped to the page.
    pub fn preview(&self, page: Size) -> Option<CropRect> {
        match (self.anchor, self.current) {
            (Some(a), Some(b)) if self.is_dragging => {
                Some(CropRect::from_corners(a, b).clamp_to(page))
            }
            _ => None,
        }
    }

    /// End the drag at `point`.
    ///
    /// Returns the committed region, or `None` for a click without a usable
    /// extent.
    pub fn finish(&mut self, point: PagePoint, page: Size) -> Option<CropRect> {
        if !self.is_dragging {
            return None;
        }
        self.current = Some(point);
        let rect = self.preview(page);
        self.reset();
        rect.filter(|r| !r.is_degenerate())
    }

    pub fn reset(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: Size = Size {
        width: 595.0,
        height: 842.0,
    };

    #[test]
    fn drag_up_left_is_normalized() {
        let mut sel = DragSelection::default();
        sel.start(PagePoint::new(300.0, 300.0));
        sel.update(PagePoint::new(200.0, 250.0));
        let rect = sel.finish(PagePoint::new(100.0, 100.0), PAGE);
        assert_eq!(rect, Some(CropRect::new(100.0, 100.0, 300.0, 300.0)));
        assert!(!sel.is_dragging);
    }

    #[test]
    fn drag_outside_page_is_clamped() {
        let mut sel = DragSelection::default();
        sel.start(PagePoint::new(500.0, 800.0));
        let rect = sel.finish(PagePoint::new(900.0, 1000.0), PAGE);
        assert_eq!(rect, Some(CropRect::new(500.0, 800.0, 595.0, 842.0)));
    }

    #[test]
    fn click_without_drag_commits_nothing() {
        let mut sel = DragSelection::default();
        sel.start(PagePoint::new(50.0, 50.0));
        assert_eq!(sel.finish(PagePoint::new(50.0, 50.0), PAGE), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut sel = DragSelection::default();
        sel.update(PagePoint::new(10.0, 10.0));
        assert_eq!(sel.preview(PAGE), None);
        assert_eq!(sel.finish(PagePoint::new(20.0, 20.0), PAGE), None);
    }
}
