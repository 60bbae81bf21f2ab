// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Read;

use log::{debug, warn};

use crate::{CoreId, LoadError, Sample};

/// Coerces a CSV cell the way unary plus coerces a string.
///
/// Surrounding whitespace is ignored and an empty cell is `0`. Decimal and
/// exponent forms take an optional sign; `0x`, `0o` and `0b` literals do not.
/// Only the spelled‑out `Infinity` is infinite. Anything else is `NaN`.
#[must_use]
pub fn coerce_number(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return 0.0;
    }
    if let Some(value) = radix_literal(cell) {
        return value;
    }
    let unsigned = cell.strip_prefix(['+', '-']).unwrap_or(cell);
    if unsigned == "Infinity" {
        return if cell.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // `str::parse` also takes `inf`, `infinity` and `nan` in any case.
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return f64::NAN;
    }
    cell.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(cell: &str) -> Option<f64> {
    let radix = match cell.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = cell.get(2..)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    Some(u64::from_str_radix(digits, radix).map_or(f64::NAN, |v| v as f64))
}

pub(crate) fn column(headers: &csv::StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

pub(crate) fn cell(record: &csv::StringRecord, index: usize) -> f64 {
    // A missing cell coerces like `undefined`.
    record.get(index).map_or(f64::NAN, coerce_number)
}

/// Reads ice‑core samples from a CSV source with a header row.
///
/// Required columns: `depth`, `gasage`, `[CO2]`, `core`, in any order. Rows
/// whose `core` is not a finite integer cannot be grouped; they are skipped
/// and reported. Every other malformed number is kept as `NaN`.
pub fn load_samples<R: Read>(reader: R) -> Result<Vec<Sample>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let depth_col = column(&headers, "depth")?;
    let gasage_col = column(&headers, "gasage")?;
    let co2_col = column(&headers, "[CO2]")?;
    let core_col = column(&headers, "core")?;

    let mut samples = Vec::new();
    let mut nan_fields = 0_usize;
    let mut unkeyed_rows = 0_usize;

    for record in csv_reader.records() {
        let record = record?;
        let Some(core) = CoreId::from_value(cell(&record, core_col)) else {
            unkeyed_rows += 1;
            continue;
        };
        let sample = Sample::new(
            core,
            cell(&record, depth_col),
            cell(&record, gasage_col),
            cell(&record, co2_col),
        );
        nan_fields += sample.nan_fields();
        samples.push(sample);
    }

    if nan_fields > 0 {
        warn!("{nan_fields} numeric fields failed to parse and were kept as NaN");
    }
    if unkeyed_rows > 0 {
        warn!("{unkeyed_rows} rows skipped: `core` is not an integer");
    }
    debug!("parsed {} sample rows", samples.len());
    Ok(samples)
}
