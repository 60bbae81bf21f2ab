// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors that can occur while loading a CSV data source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("Failed to read data source: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV framing is broken (for example, invalid UTF-8 in the header).
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
