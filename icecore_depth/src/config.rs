// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use icecore_series::CoreId;

/// Tunables of the depth explorer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DepthConfig {
    /// Core shown first.
    pub default_core: i64,
    /// Left edge of the plot inside the chart.
    pub origin_x: f64,
    /// Top edge of the plot inside the chart.
    pub origin_y: f64,
    /// Chart width minus plot width.
    pub inset_x: f64,
    /// Chart height minus plot height.
    pub inset_y: f64,
    /// Ticks requested per axis.
    pub tick_count: usize,
    /// Largest slider value.
    pub slider_max: u32,
    /// Playback advances the slider by one every this many milliseconds.
    pub play_step_ms: u64,
    /// Largest pointer distance, in pixels, at which a sample gets a tooltip.
    pub tooltip_radius: f64,
    /// Radius of the slider dot.
    pub dot_radius: f64,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            default_core: 3,
            origin_x: 60.0,
            origin_y: 20.0,
            inset_x: 120.0,
            inset_y: 80.0,
            tick_count: 6,
            slider_max: 100,
            play_step_ms: 50,
            tooltip_radius: 25.0,
            dot_radius: 5.0,
        }
    }
}

impl DepthConfig {
    /// Core shown first.
    #[must_use]
    pub fn default_core(&self) -> CoreId {
        CoreId(self.default_core)
    }

    /// Interval between playback steps.
    #[must_use]
    pub fn play_step(&self) -> Duration {
        Duration::from_millis(self.play_step_ms)
    }
}
