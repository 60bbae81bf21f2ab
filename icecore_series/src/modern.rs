// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::Read;

use log::{info, warn};

use crate::LoadError;
use crate::load::{cell, column};

/// Mean CO₂ of one calendar year of the modern (instrumental) record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnualMean {
    /// Calendar year.
    pub year: f64,
    /// Mean deseasonalized CO₂ over that year's rows, in ppm.
    pub co2: f64,
}

/// A year as a map key, ordered by [`f64::total_cmp`].
#[derive(Clone, Copy, Debug)]
struct YearKey(f64);

impl YearKey {
    fn new(year: f64) -> Self {
        // Folds -0 into 0.
        Self(year + 0.0)
    }
}

impl PartialEq for YearKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for YearKey {}

impl PartialOrd for YearKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

/// Reads the modern record (`year`, `deseasonalized`) and averages it per year.
///
/// `NaN` readings are left out of a year's mean; a year with no valid reading
/// has a `NaN` mean. Rows without a usable year are skipped and reported.
/// The result is sorted by ascending year.
pub fn load_annual_means<R: Read>(reader: R) -> Result<Vec<AnnualMean>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let year_col = column(&headers, "year")?;
    let co2_col = column(&headers, "deseasonalized")?;

    let mut years: BTreeMap<YearKey, Accumulator> = BTreeMap::new();
    let mut rows = 0_usize;
    let mut skipped = 0_usize;

    for record in csv_reader.records() {
        let record = record?;
        rows += 1;
        let year = cell(&record, year_col);
        if year.is_nan() {
            skipped += 1;
            continue;
        }
        let co2 = cell(&record, co2_col);
        let slot = years.entry(YearKey::new(year)).or_default();
        if !co2.is_nan() {
            slot.sum += co2;
            slot.count += 1;
        }
    }

    if skipped > 0 {
        warn!("{skipped} modern CO2 rows skipped: `year` is not a number");
    }

    let means: Vec<AnnualMean> = years
        .into_iter()
        .map(|(year, a)| AnnualMean {
            year: year.0,
            co2: if a.count == 0 {
                f64::NAN
            } else {
                a.sum / a.count as f64
            },
        })
        .collect();
    info!("loaded {rows} modern CO2 rows into {} yearly means", means.len());
    Ok(means)
}
