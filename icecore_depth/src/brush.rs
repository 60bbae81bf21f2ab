// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular brush: track a press‑drag‑release gesture as a rectangle.
//!
//! ## Usage
//!
//! 1) Call [`BrushState::start`] with the press position.
//! 2) On each move, call [`BrushState::update`] to get the current rectangle.
//! 3) Call [`BrushState::end`] on release to get the final rectangle and
//!    reset the gesture.
//!
//! Every rectangle is normalized and clamped to the brush extent.
//!
//! ```
//! use icecore_depth::BrushState;
//! use kurbo::{Point, Rect};
//!
//! let mut brush = BrushState::new(Rect::new(0.0, 0.0, 100.0, 50.0));
//! brush.start(Point::new(80.0, 10.0));
//! let rect = brush.update(Point::new(120.0, 5.0)).unwrap();
//! assert_eq!(rect, Rect::new(80.0, 5.0, 100.0, 10.0));
//! ```

use kurbo::{Point, Rect};

/// Press‑drag‑release gesture state of a brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    /// Area the brush may cover.
    pub extent: Rect,
    /// Press position, clamped into the extent.
    pub start_pos: Option<Point>,
    /// Last pointer position, clamped into the extent.
    pub last_pos: Option<Point>,
}

impl BrushState {
    /// An idle brush over `extent`.
    #[must_use]
    pub fn new(extent: Rect) -> Self {
        Self {
            extent,
            start_pos: None,
            last_pos: None,
        }
    }

    /// Starts a gesture at `pos`.
    pub fn start(&mut self, pos: Point) {
        let pos = self.clamp(pos);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Moves the pointer, returning the current rectangle while brushing.
    pub fn update(&mut self, pos: Point) -> Option<Rect> {
        let start = self.start_pos?;
        let pos = self.clamp(pos);
        self.last_pos = Some(pos);
        Some(Rect::from_points(start, pos))
    }

    /// The current rectangle, if brushing.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        Some(Rect::from_points(self.start_pos?, self.last_pos?))
    }

    /// Ends the gesture at `pos`, returning the final rectangle.
    pub fn end(&mut self, pos: Point) -> Option<Rect> {
        let rect = self.update(pos);
        self.cancel();
        rect
    }

    /// Drops the gesture without a result.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_brushing(&self) -> bool {
        self.start_pos.is_some()
    }

    fn clamp(&self, pos: Point) -> Point {
        Point::new(
            pos.x.clamp(self.extent.x0, self.extent.x1),
            pos.y.clamp(self.extent.y0, self.extent.y1),
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::BrushState;

    fn brush() -> BrushState {
        BrushState::new(Rect::new(0.0, 0.0, 200.0, 100.0))
    }

    #[test]
    fn idle_brush_ignores_moves() {
        let mut b = brush();
        assert!(!b.is_brushing());
        assert_eq!(b.update(Point::new(5.0, 5.0)), None);
        assert_eq!(b.last_pos, None);
    }

    #[test]
    fn rect_is_normalized() {
        let mut b = brush();
        b.start(Point::new(50.0, 60.0));
        assert_eq!(
            b.update(Point::new(10.0, 20.0)),
            Some(Rect::new(10.0, 20.0, 50.0, 60.0))
        );
        assert_eq!(b.rect(), Some(Rect::new(10.0, 20.0, 50.0, 60.0)));
    }

    #[test]
    fn end_clamps_and_resets() {
        let mut b = brush();
        b.start(Point::new(-10.0, 50.0));
        assert_eq!(b.start_pos, Some(Point::new(0.0, 50.0)));
        let rect = b.end(Point::new(300.0, 150.0));
        assert_eq!(rect, Some(Rect::new(0.0, 50.0, 200.0, 100.0)));
        assert!(!b.is_brushing());
        assert_eq!(b.rect(), None);
    }
}
