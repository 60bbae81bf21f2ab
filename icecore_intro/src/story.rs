// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use icecore_scrolly::{ScrollLock, ScrollLockGuard, ViewportSize};
use icecore_shape::{CircleMark, GroupMark, Mark, RectMark, Scene, TextAnchor, TextMark};
use icecore_transition::{Animated, Easing, TransitionSpec};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::{DotGrid, IntroConfig};

/// How one grid dot is drawn on the current slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    /// Ordinary gray dot.
    Plain,
    /// Part of the trapped block.
    Trapped,
    /// The single highlighted CO₂ dot.
    Co2Single,
    /// Grid faded out.
    Hidden,
}

/// Where the floating CO₂ dot is in its choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatingPhase {
    /// Not on the last slide.
    Hidden,
    /// Sitting over the grid's CO₂ dot.
    Shown,
    /// Moving to the landing point.
    Landing,
    /// First bounce.
    BounceA,
    /// Second bounce, held until the slide changes.
    BounceB,
}

impl FloatingPhase {
    /// CSS class of the bounce, if one is playing.
    #[must_use]
    pub fn bounce_class(self) -> Option<&'static str> {
        match self {
            Self::BounceA => Some("bounce-3"),
            Self::BounceB => Some("bounce-3b"),
            _ => None,
        }
    }
}

/// The intro slides over the dot grid.
///
/// The story holds the page's scroll lock from construction until the last
/// slide is shown; it never takes the lock again.
#[derive(Debug)]
pub struct IntroStory {
    config: IntroConfig,
    viewport: ViewportSize,
    grid: DotGrid,
    step: usize,
    now: Duration,
    /// When the last slide was shown.
    finale_at: Option<Duration>,
    floating: Animated<Point>,
    guard: Option<ScrollLockGuard>,
}

impl IntroStory {
    /// Lays out the grid, shows the first slide and locks scrolling.
    #[must_use]
    pub fn new(config: IntroConfig, viewport: ViewportSize, lock: &ScrollLock) -> Self {
        let grid = DotGrid::layout(&config, viewport);
        let floating = Animated::new(grid.dot_center(grid.co2_index()));
        Self {
            config,
            viewport,
            grid,
            step: 0,
            now: Duration::ZERO,
            finale_at: None,
            floating,
            guard: Some(lock.acquire()),
        }
    }

    /// Current slide.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.config.slide_count
    }

    /// The dot grid.
    #[must_use]
    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    /// Returns `true` while the story still holds the scroll lock.
    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.guard.is_some()
    }

    fn last_step(&self) -> usize {
        self.config.slide_count.saturating_sub(1)
    }

    /// The two slides before the last show the trapped block, then its CO₂ dot.
    fn trapped_step(&self) -> Option<usize> {
        self.last_step().checked_sub(2)
    }

    fn co2_step(&self) -> Option<usize> {
        self.last_step().checked_sub(1)
    }

    /// Goes to the next slide. Returns `false` on the last one.
    pub fn next(&mut self, now: Duration) -> bool {
        if self.step >= self.last_step() {
            return false;
        }
        self.show_step(self.step + 1, now);
        true
    }

    /// Goes to the previous slide. Returns `false` on the first one.
    pub fn prev(&mut self, now: Duration) -> bool {
        if self.step == 0 {
            return false;
        }
        self.show_step(self.step - 1, now);
        true
    }

    /// Shows slide `step`, clamped to the last one.
    pub fn show_step(&mut self, step: usize, now: Duration) {
        let step = step.min(self.last_step());
        log::debug!("intro: slide {} -> {step}", self.step);
        self.step = step;
        self.now = now;
        self.finale_at = None;
        self.floating.set(self.grid.dot_center(self.grid.co2_index()));
        if step == self.last_step() {
            self.begin_finale(now);
        }
    }

    fn begin_finale(&mut self, now: Duration) {
        if self.guard.take().is_some() {
            log::info!("intro finished, releasing scroll lock");
        }
        self.finale_at = Some(now);
        self.floating.start(
            self.landing_point(),
            now,
            TransitionSpec::new(self.config.move_duration(), Easing::CubicInOut)
                .with_delay(self.config.move_delay()),
        );
    }

    /// Where the floating dot comes to rest.
    #[must_use]
    pub fn landing_point(&self) -> Point {
        Point::new(
            self.viewport.width / 2.0,
            self.viewport.height - self.config.landing_offset,
        )
    }

    /// Returns `true` if the left arrow is shown.
    #[must_use]
    pub fn left_arrow_visible(&self) -> bool {
        self.step > 0
    }

    /// Returns `true` if the right arrow is shown.
    #[must_use]
    pub fn right_arrow_visible(&self) -> bool {
        self.step < self.last_step()
    }

    /// How dot `index` is drawn on the current slide.
    #[must_use]
    pub fn dot_state(&self, index: usize) -> DotState {
        let step = Some(self.step);
        if self.step == self.last_step() {
            DotState::Hidden
        } else if step == self.co2_step() && index == self.grid.co2_index() {
            DotState::Co2Single
        } else if (step == self.co2_step() || step == self.trapped_step())
            && self.grid.is_trapped(index)
        {
            DotState::Trapped
        } else {
            DotState::Plain
        }
    }

    /// Opacity of the whole grid.
    #[must_use]
    pub fn grid_opacity(&self) -> f64 {
        if self.finale_at.is_some() { 0.0 } else { 1.0 }
    }

    fn finale_elapsed(&self) -> Option<Duration> {
        self.finale_at.map(|at| self.now.saturating_sub(at))
    }

    /// Phase of the floating dot as of the last tick.
    #[must_use]
    pub fn floating_phase(&self) -> FloatingPhase {
        let Some(elapsed) = self.finale_elapsed() else {
            return FloatingPhase::Hidden;
        };
        if elapsed < self.config.move_delay() {
            FloatingPhase::Shown
        } else if elapsed < self.config.bounce_a_at() {
            FloatingPhase::Landing
        } else if elapsed < self.config.bounce_b_at() {
            FloatingPhase::BounceA
        } else {
            FloatingPhase::BounceB
        }
    }

    /// Position of the floating dot as of the last tick.
    #[must_use]
    pub fn floating_dot(&self) -> Option<Point> {
        self.finale_at.map(|_| *self.floating.value())
    }

    /// Returns `true` once the scroll hint is shown.
    #[must_use]
    pub fn scroll_hint_visible(&self) -> bool {
        self.finale_elapsed()
            .is_some_and(|elapsed| elapsed >= self.config.hint_at())
    }

    /// Advances the floating dot. Returns `true` while anything is still
    /// scheduled.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.now = now;
        self.floating.tick(now);
        self.finale_elapsed()
            .is_some_and(|elapsed| elapsed < self.config.bounce_b_at())
    }

    /// Relays the grid for a new viewport and reapplies the current slide.
    ///
    /// On the last slide the choreography keeps its clock; only the start and
    /// landing points move.
    pub fn resize(&mut self, viewport: ViewportSize, now: Duration) {
        self.viewport = viewport;
        self.grid = DotGrid::layout(&self.config, viewport);
        self.now = now;
        let Some(elapsed) = self.finale_elapsed() else {
            self.floating.set(self.grid.dot_center(self.grid.co2_index()));
            return;
        };
        let landing = self.landing_point();
        let move_delay = self.config.move_delay();
        if elapsed < move_delay {
            self.floating.set(self.grid.dot_center(self.grid.co2_index()));
            self.floating.start(
                landing,
                now,
                TransitionSpec::new(self.config.move_duration(), Easing::CubicInOut)
                    .with_delay(move_delay - elapsed),
            );
        } else if elapsed < move_delay + self.config.move_duration() {
            let remaining = move_delay + self.config.move_duration() - elapsed;
            self.floating.start(
                landing,
                now,
                TransitionSpec::new(remaining, Easing::CubicOut),
            );
        } else {
            self.floating.set(landing);
        }
    }

    /// Everything the intro paints as of the last tick.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.viewport.to_size());

        let mut grid = GroupMark::new("intro-grid");
        grid.opacity = self.grid_opacity();
        let size = self.grid.dot_size();
        let half = size / 2.0;
        for index in 0..self.grid.total() {
            let (class, fill) = match self.dot_state(index) {
                DotState::Trapped => ("co2-dot trapped", Color::from_rgb8(0x55, 0x55, 0x55)),
                DotState::Co2Single => {
                    ("co2-dot trapped co2-single", Color::from_rgb8(0xd6, 0x27, 0x28))
                }
                DotState::Plain | DotState::Hidden => {
                    ("co2-dot", Color::from_rgb8(0xbb, 0xbb, 0xbb))
                }
            };
            let c = self.grid.dot_center(index);
            grid.marks.push(Mark::Rect(RectMark {
                class: String::from(class),
                rect: Rect::new(c.x - half, c.y - half, c.x + half, c.y + half),
                fill,
                stroke: None,
            }));
        }
        scene.marks.push(Mark::Group(grid));

        if let Some(center) = self.floating_dot() {
            let class = match self.floating_phase().bounce_class() {
                Some(bounce) => format!("floating-co2-dot {bounce}"),
                None => String::from("floating-co2-dot"),
            };
            scene.marks.push(Mark::Circle(CircleMark {
                class,
                center,
                radius: self.config.floating_radius,
                fill: Color::from_rgb8(0xd6, 0x27, 0x28),
                stroke: None,
            }));
        }

        if self.scroll_hint_visible() {
            scene.marks.push(Mark::Text(TextMark {
                class: String::from("scroll-hint visible"),
                position: Point::new(self.viewport.width / 2.0, self.viewport.height - 24.0),
                text: String::from("Scroll to explore"),
                anchor: TextAnchor::Middle,
                font_size: 14.0,
                fill: Color::from_rgb8(0x33, 0x33, 0x33),
                rotate: 0.0,
            }));
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use icecore_scrolly::{ScrollLock, ViewportSize};
    use kurbo::Point;

    use super::{DotState, FloatingPhase, IntroStory};
    use crate::IntroConfig;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn story(lock: &ScrollLock) -> IntroStory {
        IntroStory::new(
            IntroConfig::default(),
            ViewportSize::new(1600.0, 900.0),
            lock,
        )
    }

    #[test]
    fn arrows_follow_the_slide() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        assert!(!s.left_arrow_visible());
        assert!(s.right_arrow_visible());
        assert!(!s.prev(ms(0)));
        for _ in 0..4 {
            assert!(s.next(ms(0)));
        }
        assert!(!s.next(ms(0)));
        assert_eq!(s.step(), 4);
        assert!(s.left_arrow_visible());
        assert!(!s.right_arrow_visible());
    }

    #[test]
    fn dot_states_per_slide() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        let co2 = s.grid().co2_index();
        assert_eq!(s.dot_state(0), DotState::Plain);
        s.show_step(2, ms(0));
        assert_eq!(s.dot_state(0), DotState::Trapped);
        assert_eq!(s.dot_state(co2), DotState::Trapped);
        assert_eq!(s.dot_state(s.grid().total() - 1), DotState::Plain);
        s.show_step(3, ms(0));
        assert_eq!(s.dot_state(co2), DotState::Co2Single);
        assert_eq!(s.dot_state(0), DotState::Trapped);
        s.show_step(4, ms(0));
        assert_eq!(s.dot_state(co2), DotState::Hidden);
        assert_eq!(s.grid_opacity(), 0.0);
    }

    #[test]
    fn dot_states_follow_the_slide_count() {
        let lock = ScrollLock::new();
        let config = IntroConfig {
            slide_count: 7,
            ..IntroConfig::default()
        };
        let mut s = IntroStory::new(config, ViewportSize::new(1600.0, 900.0), &lock);
        let co2 = s.grid().co2_index();
        s.show_step(3, ms(0));
        assert_eq!(s.dot_state(co2), DotState::Plain);
        s.show_step(4, ms(0));
        assert_eq!(s.dot_state(co2), DotState::Trapped);
        s.show_step(5, ms(0));
        assert_eq!(s.dot_state(co2), DotState::Co2Single);
        assert!(lock.is_locked());
        s.show_step(6, ms(0));
        assert_eq!(s.dot_state(co2), DotState::Hidden);
        assert!(!lock.is_locked());
    }

    #[test]
    fn lock_released_on_the_last_slide_only_once() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        assert!(lock.is_locked());
        s.show_step(3, ms(0));
        assert!(lock.is_locked());
        s.show_step(4, ms(100));
        assert!(!lock.is_locked());
        s.prev(ms(200));
        assert!(!lock.is_locked());
        assert!(!s.holds_scroll_lock());
    }

    #[test]
    fn finale_timeline() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        let start = s.grid().dot_center(s.grid().co2_index());
        assert_eq!(s.floating_phase(), FloatingPhase::Hidden);
        assert!(s.floating_dot().is_none());

        s.show_step(4, ms(1000));
        s.tick(ms(2000));
        assert_eq!(s.floating_phase(), FloatingPhase::Shown);
        assert_eq!(s.floating_dot(), Some(start));
        assert!(!s.scroll_hint_visible());

        s.tick(ms(4300));
        assert_eq!(s.floating_phase(), FloatingPhase::Landing);
        let mid = s.floating_dot().unwrap();
        assert_ne!(mid, start);

        s.tick(ms(4800));
        assert_eq!(s.floating_phase(), FloatingPhase::BounceA);
        assert!(s.scroll_hint_visible());
        assert_eq!(s.floating_dot(), Some(Point::new(800.0, 820.0)));

        assert!(s.tick(ms(7500)));
        assert_eq!(s.floating_phase(), FloatingPhase::BounceA);
        assert!(!s.tick(ms(7700)));
        assert_eq!(s.floating_phase(), FloatingPhase::BounceB);
        assert!(s.scene().find("bounce-3b").is_some());
    }

    #[test]
    fn leaving_the_finale_resets_it() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        s.show_step(4, ms(0));
        s.tick(ms(5000));
        s.prev(ms(5000));
        assert_eq!(s.floating_phase(), FloatingPhase::Hidden);
        assert!(!s.scroll_hint_visible());
        assert_eq!(s.grid_opacity(), 1.0);

        s.next(ms(6000));
        s.tick(ms(6500));
        assert_eq!(s.floating_phase(), FloatingPhase::Shown);
    }

    #[test]
    fn resize_keeps_the_slide_and_retargets_the_dot() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        s.show_step(3, ms(0));
        s.resize(ViewportSize::new(800.0, 800.0), ms(10));
        assert_eq!(s.step(), 3);
        assert_eq!(s.dot_state(s.grid().co2_index()), DotState::Co2Single);

        s.show_step(4, ms(0));
        s.resize(ViewportSize::new(1000.0, 600.0), ms(1000));
        s.tick(ms(4000));
        assert_eq!(s.floating_dot(), Some(Point::new(500.0, 520.0)));
    }

    #[test]
    fn scene_marks_the_highlighted_dot() {
        let lock = ScrollLock::new();
        let mut s = story(&lock);
        s.show_step(3, ms(0));
        let scene = s.scene();
        assert_eq!(scene.find_all("co2-single").len(), 1);
        assert_eq!(
            scene.find_all("trapped").len(),
            s.grid().trapped_count()
        );
    }
}
