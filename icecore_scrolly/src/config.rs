// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use core::time::Duration;

use kurbo::Size;

/// Size of the browser viewport the chart is laid out in, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ViewportSize {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl ViewportSize {
    /// Creates a viewport size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The viewport as a [`kurbo::Size`].
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Space reserved around the plot area for axes and titles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    /// Above the plot.
    pub top: f64,
    /// Right of the plot.
    pub right: f64,
    /// Below the plot, holds the x axis.
    pub bottom: f64,
    /// Left of the plot, holds the y axis.
    pub left: f64,
}

impl Margins {
    /// Creates margins.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 40.0, 50.0, 60.0)
    }
}

/// Tunables of the zoomed chart.
///
/// Durations are stored in milliseconds so the struct deserializes from
/// plain numbers; use the `Duration` accessors in code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Margins around the plot area.
    pub margins: Margins,
    /// Fraction of the viewport the plot area takes in each direction.
    pub plot_fraction: f64,
    /// Visible fraction at which the entry animation is triggered.
    pub visibility_threshold: f64,
    /// Length of the stroke‑dash reveal of each line.
    pub entry_duration_ms: u64,
    /// Delay before the legend fades in.
    pub legend_fade_delay_ms: u64,
    /// Length of the legend fade.
    pub legend_fade_ms: u64,
    /// Length of each zoom stage.
    pub zoom_duration_ms: u64,
    /// Delay of the y stage behind the x stage.
    pub y_stage_delay_ms: u64,
    /// Length of a legend move.
    pub legend_move_ms: u64,
    /// Tick count requested before the first zoom.
    pub initial_ticks: usize,
    /// Tick count requested by zoomed axes.
    pub zoom_ticks: usize,
    /// Gas‑age range shown on the inhale step.
    pub inhale_range: [f64; 2],
    /// Gas‑age range shown on the exhale step.
    pub exhale_range: [f64; 2],
    /// Distance of the legend's left edge from the plot's right edge.
    pub legend_inset: f64,
    /// Distance of the top legend anchor below the plot's top.
    pub legend_top: f64,
    /// Distance of the bottom legend anchor above the plot's bottom.
    pub legend_bottom: f64,
    /// Vertical distance between legend rows.
    pub legend_row_height: f64,
    /// Stroke width of the data lines.
    pub line_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            plot_fraction: 0.8,
            visibility_threshold: 0.95,
            entry_duration_ms: 2000,
            legend_fade_delay_ms: 3200,
            legend_fade_ms: 600,
            zoom_duration_ms: 1400,
            y_stage_delay_ms: 150,
            legend_move_ms: 1200,
            initial_ticks: 6,
            zoom_ticks: 5,
            inhale_range: [59_000.0, 64_000.0],
            exhale_range: [68_000.0, 72_000.0],
            legend_inset: 120.0,
            legend_top: 20.0,
            legend_bottom: 60.0,
            legend_row_height: 22.0,
            line_width: 2.0,
        }
    }
}

impl ChartConfig {
    /// Length of the entry reveal.
    #[must_use]
    pub fn entry_duration(&self) -> Duration {
        Duration::from_millis(self.entry_duration_ms)
    }

    /// Delay before the legend fades in.
    #[must_use]
    pub fn legend_fade_delay(&self) -> Duration {
        Duration::from_millis(self.legend_fade_delay_ms)
    }

    /// Length of the legend fade.
    #[must_use]
    pub fn legend_fade(&self) -> Duration {
        Duration::from_millis(self.legend_fade_ms)
    }

    /// Length of each zoom stage.
    #[must_use]
    pub fn zoom_duration(&self) -> Duration {
        Duration::from_millis(self.zoom_duration_ms)
    }

    /// Delay of the y stage.
    #[must_use]
    pub fn y_stage_delay(&self) -> Duration {
        Duration::from_millis(self.y_stage_delay_ms)
    }

    /// Length of a legend move.
    #[must_use]
    pub fn legend_move(&self) -> Duration {
        Duration::from_millis(self.legend_move_ms)
    }

    /// Inhale range as a `Range`.
    #[must_use]
    pub fn inhale(&self) -> Range<f64> {
        self.inhale_range[0]..self.inhale_range[1]
    }

    /// Exhale range as a `Range`.
    #[must_use]
    pub fn exhale(&self) -> Range<f64> {
        self.exhale_range[0]..self.exhale_range[1]
    }

    /// Plot area size for a viewport.
    #[must_use]
    pub fn plot_size(&self, viewport: ViewportSize) -> Size {
        Size::new(
            viewport.width * self.plot_fraction,
            viewport.height * self.plot_fraction,
        )
    }
}

/// Tunables of the step scroller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepScrollerConfig {
    /// Selector of the step elements. Carried for hosts that query the DOM.
    pub step_selector: String,
    /// Trigger line position as a fraction of the viewport height.
    pub offset: f64,
}

impl Default for StepScrollerConfig {
    fn default() -> Self {
        Self {
            step_selector: String::from(".step"),
            offset: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, ViewportSize};

    #[test]
    fn plot_is_a_fraction_of_the_viewport() {
        let config = ChartConfig::default();
        let size = config.plot_size(ViewportSize::new(1000.0, 500.0));
        assert_eq!(size.width, 800.0);
        assert_eq!(size.height, 400.0);
        assert_eq!(config.zoom_duration().as_millis(), 1400);
        assert_eq!(config.inhale(), 59_000.0..64_000.0);
    }
}
