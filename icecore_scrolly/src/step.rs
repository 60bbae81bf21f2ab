// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::ChartConfig;

/// Where the legend is anchored inside the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendPosition {
    /// Near the top right corner.
    TopRight,
    /// Near the bottom right corner.
    #[default]
    BottomRight,
}

/// The gas‑age window a zoom step shows.
#[derive(Clone, Debug, PartialEq)]
pub enum XRange {
    /// The full gas‑age extent of the data.
    Full,
    /// A literal window, clamped into the full extent when applied.
    Span(Range<f64>),
}

/// The scroll‑triggered view states of the zoomed chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZoomStep {
    /// Everything, as first drawn.
    #[default]
    FullView,
    /// The inhale window.
    Inhale,
    /// The exhale window.
    Exhale,
    /// Back to everything.
    Reset,
}

impl ZoomStep {
    /// All steps in scroll order.
    pub const ALL: [Self; 4] = [Self::FullView, Self::Inhale, Self::Exhale, Self::Reset];

    /// Maps a step element's index to its zoom step.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of the step element that selects this step.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::FullView => 0,
            Self::Inhale => 1,
            Self::Exhale => 2,
            Self::Reset => 3,
        }
    }

    /// Window shown by this step.
    #[must_use]
    pub fn x_range(self, config: &ChartConfig) -> XRange {
        match self {
            Self::FullView | Self::Reset => XRange::Full,
            Self::Inhale => XRange::Span(config.inhale()),
            Self::Exhale => XRange::Span(config.exhale()),
        }
    }

    /// Legend anchor used by this step.
    #[must_use]
    pub fn legend_position(self) -> LegendPosition {
        match self {
            Self::Inhale => LegendPosition::TopRight,
            Self::FullView | Self::Exhale | Self::Reset => LegendPosition::BottomRight,
        }
    }
}
