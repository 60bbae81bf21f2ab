// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless driver for the Icecore page.
//!
//! Reads `icecore.toml`, loads the CSV sources and plays the whole story on a
//! virtual clock, writing SVG snapshots along the way.
//!
//! `RUST_LOG=debug cargo run -p icecore_demos`

mod config;
mod error;
pub mod session;

pub use config::{DataPaths, PageConfig};
pub use error::DemoError;
