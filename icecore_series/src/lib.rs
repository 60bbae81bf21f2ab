// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_series --heading-base-level=0

//! Icecore Series: ice‑core CO₂ samples and their loaders.
//!
//! - [`Sample`]: one measurement `{depth, gasage, co2, core}`.
//! - [`SeriesGroup`]: samples grouped per [`CoreId`], with the extent queries
//!   the charts need (global gas‑age and CO₂ extents, CO₂ extent inside a
//!   gas‑age window).
//! - [`SeriesGroup::from_reader`] / [`SeriesGroup::from_csv_path`]: CSV loading
//!   with unary‑plus number coercion (blank cells are `0`, anything
//!   unparseable is `NaN`).
//! - [`load_annual_means`]: the modern record, averaged per calendar year.
//!
//! Malformed numbers are **not** filtered out. They are counted and reported
//! through the `log` facade, and flow into the charts as `NaN`.
//!
//! ```rust
//! use icecore_series::SeriesGroup;
//!
//! let csv = "depth,gasage,[CO2],core\n\
//!            100.5,59000,210.2,3\n\
//!            101.0,60500,215.8,3\n\
//!            98.0,61000,222.1,4\n";
//! let group = SeriesGroup::from_reader(csv.as_bytes()).unwrap();
//! assert_eq!(group.len(), 2);
//! assert_eq!(group.gas_age_extent(), Some(59_000.0..61_000.0));
//! ```

mod error;
mod group;
mod load;
mod modern;
mod sample;

pub use error::LoadError;
pub use group::SeriesGroup;
pub use load::{coerce_number, load_samples};
pub use modern::{AnnualMean, load_annual_means};
pub use sample::{CoreId, Sample};
