// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Tunables of the intro slides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntroConfig {
    /// Number of dots in the grid.
    pub total_dots: usize,
    /// Gap between dots, in pixels.
    pub gap: f64,
    /// Share of columns and of rows covered by the trapped block.
    pub trapped_fraction: f64,
    /// Number of slides.
    pub slide_count: usize,
    /// Distance of the floating dot's landing point above the viewport bottom.
    pub landing_offset: f64,
    /// Radius of the floating dot.
    pub floating_radius: f64,
    /// Delay from the last slide appearing to the floating dot moving.
    pub move_delay_ms: u64,
    /// Length of the floating dot's move.
    pub move_ms: u64,
    /// Delay from the move to the first bounce.
    pub bounce_a_delay_ms: u64,
    /// Delay from the first bounce to the second.
    pub bounce_b_delay_ms: u64,
    /// Delay from the last slide appearing to the scroll hint.
    pub hint_delay_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            total_dots: 18_240,
            gap: 2.0,
            trapped_fraction: 0.15,
            slide_count: 5,
            landing_offset: 80.0,
            floating_radius: 6.0,
            move_delay_ms: 3000,
            move_ms: 600,
            bounce_a_delay_ms: 600,
            bounce_b_delay_ms: 3000,
            hint_delay_ms: 3800,
        }
    }
}

impl IntroConfig {
    /// Delay before the floating dot moves.
    #[must_use]
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Length of the move.
    #[must_use]
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_ms)
    }

    /// Time of the first bounce, from the last slide appearing.
    #[must_use]
    pub fn bounce_a_at(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms + self.bounce_a_delay_ms)
    }

    /// Time of the second bounce, from the last slide appearing.
    #[must_use]
    pub fn bounce_b_at(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms + self.bounce_a_delay_ms + self.bounce_b_delay_ms)
    }

    /// Time of the scroll hint, from the last slide appearing.
    #[must_use]
    pub fn hint_at(&self) -> Duration {
        Duration::from_millis(self.hint_delay_ms)
    }
}
