// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_modern --heading-base-level=0

//! Icecore Modern: a replay of the instrumental CO₂ record.
//!
//! [`ModernRecord`] draws yearly means (see
//! [`load_annual_means`](icecore_series::load_annual_means)) against a
//! baseline at the natural ice‑core peak. Pressing play reveals the line over
//! a few seconds while a dot rides its tip and the captions name the year
//! under it.
//!
//! ```rust
//! use core::time::Duration;
//!
//! use icecore_modern::{ModernConfig, ModernRecord};
//! use icecore_series::load_annual_means;
//!
//! let csv = "year,deseasonalized\n1960,316.9\n1990,354.2\n2020,413.2\n";
//! let yearly = load_annual_means(csv.as_bytes()).unwrap();
//! let mut record = ModernRecord::new(yearly, ModernConfig::default());
//!
//! record.play(Duration::ZERO);
//! while record.tick(Duration::from_secs(10)) {}
//! assert_eq!(record.button_label(), "Play again");
//! ```

mod config;
mod record;

pub use config::ModernConfig;
pub use record::{ModernRecord, ReplayState};
