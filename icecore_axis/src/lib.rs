// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_axis --heading-base-level=0

//! Icecore Axis: headless linear scales and tick generation.
//!
//! This crate provides the numeric half of a chart axis:
//! - [`LinearScale`]: maps a world‑space domain (gas age, CO₂, depth, years)
//!   onto a view‑space range in pixels, and back.
//! - [`extent`]: the `[min, max]` of a set of values, skipping `NaN`.
//! - [`ticks`] / [`tick_step`]: “nice” tick positions on a 1‑2‑5 ladder.
//! - [`TickFormat`]: fixed‑precision tick labels with thousands grouping.
//!
//! It does **not** draw anything. Callers turn ticks into marks with their
//! own scene or display layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use icecore_axis::{LinearScale, extent};
//!
//! let ages = [50_000.0, 61_000.0, 75_000.0];
//! let domain = extent(ages).unwrap();
//!
//! // 0..800 pixels across.
//! let scale = LinearScale::new(domain, 0.0..800.0);
//! assert_eq!(scale.map(62_500.0), 400.0);
//!
//! let ticks = scale.ticks(6);
//! assert_eq!(ticks.first(), Some(&50_000.0));
//! ```
//!
//! Inverted ranges (for a y axis growing upward) are expressed by passing
//! `height..0.0` as the range.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod scale;
mod ticks;

pub use scale::{LinearScale, LinearScaleDebugInfo, extent};
pub use ticks::{TickFormat, tick_step, ticks};
