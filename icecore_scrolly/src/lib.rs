// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_scrolly --heading-base-level=0

//! Icecore Scrolly: the scroll‑synchronized zoom chart.
//!
//! [`ZoomedChartController`] ties a page's scroll position to a fixed
//! sequence of [`ZoomStep`]s over shared gas‑age/CO₂ scales. It is headless:
//! hosts feed it visibility fractions, step‑enter events and a monotonic
//! clock, and read back a [`icecore_shape::Scene`].
//!
//! The pieces:
//!
//! - [`DrawGate`] and [`VisibilityObserver`]: the entry animation plays at
//!   most once, when the chart first becomes (almost) fully visible, and
//!   holds the page's [`ScrollLock`] while it runs.
//! - [`StepScroller`]: turns scroll offsets into [`StepEnter`] events using a
//!   trigger line at a fraction of the viewport height.
//! - [`ZoomStep`]: the zoom table. Each step maps to an [`XRange`] and a
//!   [`LegendPosition`].
//! - Transitions run per channel (line x, line y, each axis, legend anchor,
//!   legend opacity). Starting a new one on a channel interrupts the old one
//!   from its displayed value.
//!
//! ```rust
//! use core::time::Duration;
//!
//! use icecore_scrolly::{ChartConfig, DrawPhase, ViewportSize, ZoomedChartController};
//! use icecore_series::SeriesGroup;
//!
//! let csv = "depth,gasage,[CO2],core\n\
//!            1,50000,200,3\n2,60000,230,3\n3,70000,250,3\n";
//! let mut chart = ZoomedChartController::new(ChartConfig::default(), ViewportSize::new(1000.0, 600.0));
//! chart.set_data(SeriesGroup::from_reader(csv.as_bytes()).unwrap());
//!
//! assert!(chart.on_visibility(1.0, Duration::ZERO));
//! chart.tick(Duration::from_secs(2));
//! assert_eq!(chart.phase(), DrawPhase::Drawn);
//!
//! assert!(chart.on_scroll_step(1, Duration::from_secs(3)));
//! assert_eq!(chart.x_domain(), 59_000.0..64_000.0);
//! assert_eq!(chart.y_domain(), 230.0..230.0);
//! ```

mod config;
mod controller;
mod gate;
mod lock;
mod palette;
mod scroller;
mod step;

pub use config::{ChartConfig, Margins, StepScrollerConfig, ViewportSize};
pub use controller::{ViewState, ZoomedChartController};
pub use gate::{DrawGate, DrawPhase, VisibilityObserver};
pub use lock::{ScrollLock, ScrollLockGuard};
pub use palette::CorePalette;
pub use scroller::{ScrollDirection, StepEnter, StepScroller};
pub use step::{LegendPosition, XRange, ZoomStep};
