// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_shape --heading-base-level=0

//! Icecore Shape: chart geometry and a tiny scene IR.
//!
//! - [`line_path`] turns screen‑space points into a [`kurbo::BezPath`] using a
//!   [`Curve`]: straight segments, or monotone cubic interpolation along x
//!   (time series) or y (depth profiles).
//! - [`PathMeasure`] answers “how long is this line” and “where is the point
//!   `len` along it”, which drive stroke‑dash reveals and dots that ride a
//!   line.
//! - [`axis_group`] draws a bottom or left axis for an
//!   [`icecore_axis::LinearScale`]: domain line, ticks and formatted labels.
//! - [`Scene`] / [`Mark`] is a flat, retained description of what a chart
//!   looks like at one instant. Controllers emit scenes; [`to_svg`] writes
//!   one out as an SVG document for inspection and snapshots.
//!
//! ```rust
//! use icecore_shape::{Curve, PathMeasure, line_path};
//! use kurbo::Point;
//!
//! let path = line_path(
//!     [Point::new(0.0, 0.0), Point::new(30.0, 40.0)],
//!     Curve::MonotoneX,
//! );
//! let measure = PathMeasure::new(&path);
//! assert!((measure.total_length() - 50.0).abs() < 1e-6);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axis;
mod line;
mod measure;
mod scene;
mod svg;

pub use axis::{AxisOrient, axis_group, tick_labels};
pub use line::{Curve, line_path};
pub use measure::PathMeasure;
pub use scene::{
    CircleMark, Dash, GroupMark, LineMark, Mark, PathMark, RectMark, Scene, TextAnchor, TextMark,
};
pub use svg::to_svg;
