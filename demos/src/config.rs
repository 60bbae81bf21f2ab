// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML settings for the headless story run.
//!
//! ```toml
//! # icecore.toml
//! output_dir = "out"
//!
//! [data]
//! ice_core_csv = "data/dataset1.csv"
//!
//! [chart]
//! zoom_duration_ms = 900
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use icecore_depth::DepthConfig;
use icecore_intro::IntroConfig;
use icecore_modern::ModernConfig;
use icecore_scrolly::{ChartConfig, StepScrollerConfig, ViewportSize};
use serde::Deserialize;

use crate::DemoError;

/// Where the CSV sources live, relative to the settings file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Ice‑core samples (`depth`, `gasage`, `[CO2]`, `core`).
    pub ice_core_csv: PathBuf,
    /// Modern record (`year`, `deseasonalized`).
    pub modern_csv: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            ice_core_csv: PathBuf::from("data/dataset1.csv"),
            modern_csv: PathBuf::from("data/modern_co2_cleaned.csv"),
        }
    }
}

/// Root of `icecore.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Data sources.
    pub data: DataPaths,
    /// Viewport every section is laid out in.
    pub viewport: ViewportSize,
    /// Directory the SVG snapshots are written to.
    pub output_dir: PathBuf,
    /// Zoomed chart.
    pub chart: ChartConfig,
    /// Step scroller of the chart's steps.
    pub scroller: StepScrollerConfig,
    /// Depth explorer.
    pub depth: DepthConfig,
    /// Intro slides.
    pub intro: IntroConfig,
    /// Modern record.
    pub modern: ModernConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            viewport: ViewportSize::default(),
            output_dir: PathBuf::from("out"),
            chart: ChartConfig::default(),
            scroller: StepScrollerConfig::default(),
            depth: DepthConfig::default(),
            intro: IntroConfig::default(),
            modern: ModernConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parses settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads settings from `path`, falling back to defaults when it does not
    /// exist. Relative paths inside are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map_err(|source| DemoError::ParseConfig {
                path: path.to_owned(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("{} not found, using default settings", path.display());
                Self::default()
            }
            Err(source) => {
                return Err(DemoError::ReadConfig {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        if let Some(base) = path.parent() {
            config.resolve_against(base);
        }
        Ok(config)
    }

    fn resolve_against(&mut self, base: &Path) {
        for p in [
            &mut self.data.ice_core_csv,
            &mut self.data.modern_csv,
            &mut self.output_dir,
        ] {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }
}
