// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use icecore_scrolly::Margins;
use kurbo::Size;

/// Tunables of the modern record chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModernConfig {
    /// Outer chart width.
    pub width: f64,
    /// Outer chart height.
    pub height: f64,
    /// Space around the plot.
    pub margins: Margins,
    /// Highest CO₂ of the ice‑core record, drawn as the baseline.
    pub natural_peak: f64,
    /// Bottom of the CO₂ axis.
    pub y_floor: f64,
    /// Space above the highest yearly mean.
    pub y_headroom: f64,
    /// Ticks requested per axis.
    pub tick_count: usize,
    /// Length of one replay.
    pub play_ms: u64,
    /// Width of the record's stroke.
    pub line_width: f64,
    /// Radius of the highlight dot.
    pub dot_radius: f64,
}

impl Default for ModernConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 420.0,
            margins: Margins::new(20.0, 20.0, 40.0, 60.0),
            natural_peak: 280.0,
            y_floor: 260.0,
            y_headroom: 5.0,
            tick_count: 6,
            play_ms: 8000,
            line_width: 2.5,
            dot_radius: 5.0,
        }
    }
}

impl ModernConfig {
    /// Length of one replay.
    #[must_use]
    pub fn play_duration(&self) -> Duration {
        Duration::from_millis(self.play_ms)
    }

    /// Inner plot size.
    #[must_use]
    pub fn plot_size(&self) -> Size {
        let m = self.margins;
        Size::new(
            (self.width - m.left - m.right).max(0.0),
            (self.height - m.top - m.bottom).max(0.0),
        )
    }
}
