// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_depth --heading-base-level=0

//! Icecore Depth: depth versus CO₂ for one core at a time.
//!
//! [`DepthExplorer`] draws a core's samples as a monotone‑in‑y line (CO₂
//! across, depth down) and adds:
//!
//! - a slider dot that rides the line by arc length, with a readout of the
//!   sample under it;
//! - playback that advances the slider one step per interval, with
//!   "Play" / "Pause" / "Replay" button states;
//! - a nearest‑sample tooltip;
//! - a rectangular [`BrushState`] whose release averages the samples inside
//!   it ([`SelectionStats`]).
//!
//! ```rust
//! use icecore_depth::{DepthConfig, DepthExplorer};
//! use icecore_scrolly::ViewportSize;
//! use icecore_series::SeriesGroup;
//!
//! let csv = "depth,gasage,[CO2],core\n10,60000,200,3\n20,61000,210,3\n";
//! let group = SeriesGroup::from_reader(csv.as_bytes()).unwrap();
//! let mut explorer = DepthExplorer::new(group, DepthConfig::default(), ViewportSize::new(600.0, 400.0));
//!
//! explorer.set_slider(100);
//! assert_eq!(explorer.readout().unwrap().depth(), "20.0");
//! ```

mod brush;
mod config;
mod explorer;
mod playback;
mod readout;

pub use brush::BrushState;
pub use config::DepthConfig;
pub use explorer::DepthExplorer;
pub use playback::{PlayState, SliderPlayback};
pub use readout::{Readout, SelectionStats, Tooltip, format_grouped};
