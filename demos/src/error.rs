// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use icecore_series::LoadError;

/// Errors that stop the headless story run.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings {path}: {source}")]
    ReadConfig {
        /// Settings file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`PageConfig`](crate::PageConfig).
    #[error("Failed to parse settings {path}: {source}")]
    ParseConfig {
        /// Settings file.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },

    /// A data source could not be loaded.
    #[error("Failed to load data: {0}")]
    Load(#[from] LoadError),

    /// A snapshot could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Output file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}
