// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{ScrollLock, StepScrollerConfig};

/// Scroll direction at the time a step was entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Scroll offset grew (or this was the first report).
    Down,
    /// Scroll offset shrank.
    Up,
}

/// A step element crossed the trigger line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepEnter {
    /// Index of the step element in document order.
    pub index: usize,
    /// Direction of travel.
    pub direction: ScrollDirection,
}

/// Detects which step element sits under a trigger line as the page scrolls.
///
/// Step bounds are document‑space vertical ranges, one per step element in
/// order. The trigger line sits `offset * viewport_height` below the top of
/// the viewport. Hosts must call [`StepScroller::resize`] whenever layout
/// changes.
#[derive(Clone, Debug)]
pub struct StepScroller {
    config: StepScrollerConfig,
    steps: Vec<Range<f64>>,
    viewport_height: f64,
    active: Option<usize>,
    last_scroll: Option<f64>,
    lock: Option<ScrollLock>,
}

impl StepScroller {
    /// Sets up a scroller over the given step layout.
    #[must_use]
    pub fn setup(config: StepScrollerConfig, steps: Vec<Range<f64>>, viewport_height: f64) -> Self {
        Self {
            config,
            steps,
            viewport_height,
            active: None,
            last_scroll: None,
            lock: None,
        }
    }

    /// Drops scroll input while `lock` is held.
    #[must_use]
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.lock = Some(lock);
        self
    }

    /// Replaces the step layout after a window resize. The active step is kept.
    pub fn resize(&mut self, steps: Vec<Range<f64>>, viewport_height: f64) {
        log::debug!("step scroller: resized to {} steps", steps.len());
        self.steps = steps;
        self.viewport_height = viewport_height;
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &StepScrollerConfig {
        &self.config
    }

    /// Number of step elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when there are no step elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Document‑space position of the trigger line for a scroll offset.
    #[must_use]
    pub fn trigger_line(&self, scroll_y: f64) -> f64 {
        scroll_y + self.config.offset * self.viewport_height
    }

    /// Index of the step currently under the trigger line.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Returns `true` if step `index` carries the `is-active` class.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Feeds a scroll offset.
    ///
    /// Returns an event when the trigger line enters a step other than the
    /// active one. Input is dropped while the scroll lock is held.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<StepEnter> {
        if self.lock.as_ref().is_some_and(ScrollLock::is_locked) {
            log::trace!("step scroller: scroll locked, ignoring {scroll_y}");
            return None;
        }
        let direction = match self.last_scroll {
            Some(last) if scroll_y < last => ScrollDirection::Up,
            _ => ScrollDirection::Down,
        };
        self.last_scroll = Some(scroll_y);

        let line = self.trigger_line(scroll_y);
        let hit = self
            .steps
            .iter()
            .position(|r| line >= r.start && line < r.end);
        if hit == self.active {
            return None;
        }
        self.active = hit;
        let index = hit?;
        log::debug!("step scroller: enter step {index} ({direction:?})");
        Some(StepEnter { index, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollDirection, StepEnter, StepScroller};
    use crate::{ScrollLock, StepScrollerConfig};

    fn scroller() -> StepScroller {
        // Four 500 px steps starting at 1000; trigger line at 0.6 * 1000.
        let steps = (0..4)
            .map(|i| {
                let top = 1000.0 + 500.0 * f64::from(i);
                top..top + 500.0
            })
            .collect();
        StepScroller::setup(StepScrollerConfig::default(), steps, 1000.0)
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut s = scroller();
        assert_eq!(s.on_scroll(0.0), None);
        assert_eq!(
            s.on_scroll(400.0),
            Some(StepEnter {
                index: 0,
                direction: ScrollDirection::Down
            })
        );
        assert_eq!(s.on_scroll(450.0), None);
        assert!(s.is_active(0));
        assert_eq!(s.on_scroll(900.0).map(|e| e.index), Some(1));
        assert_eq!(
            s.on_scroll(850.0),
            Some(StepEnter {
                index: 0,
                direction: ScrollDirection::Up
            })
        );
    }

    #[test]
    fn leaving_all_steps_clears_active() {
        let mut s = scroller();
        assert!(s.on_scroll(400.0).is_some());
        assert_eq!(s.on_scroll(0.0), None);
        assert_eq!(s.active(), None);
        // Re-entering the same step is a new crossing.
        assert_eq!(s.on_scroll(400.0).map(|e| e.index), Some(0));
    }

    #[test]
    fn resize_moves_the_trigger_line() {
        let mut s = scroller();
        assert_eq!(s.trigger_line(100.0), 700.0);
        s.resize(vec![0.0..100.0], 500.0);
        assert_eq!(s.trigger_line(100.0), 400.0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn locked_scroll_is_dropped() {
        let lock = ScrollLock::new();
        let mut s = scroller().with_scroll_lock(lock.clone());
        let guard = lock.acquire();
        assert_eq!(s.on_scroll(400.0), None);
        assert_eq!(s.active(), None);
        drop(guard);
        assert_eq!(s.on_scroll(400.0).map(|e| e.index), Some(0));
    }
}
