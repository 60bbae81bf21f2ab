// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identifier of one ice core (one rendered line).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoreId(pub i64);

impl CoreId {
    /// Keys a coerced `core` cell. Only finite integers can be keyed.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "checked integral and well inside i64"
            )]
            let id = value as i64;
            Some(Self(id))
        } else {
            None
        }
    }
}

impl fmt::Display for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ice‑core measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Depth below surface, in metres.
    pub depth: f64,
    /// Estimated age of the trapped gas, in years.
    pub gasage: f64,
    /// CO₂ concentration, in ppm.
    pub co2: f64,
    /// Core this sample belongs to.
    pub core: CoreId,
}

impl Sample {
    /// Convenience constructor.
    #[must_use]
    pub fn new(core: CoreId, depth: f64, gasage: f64, co2: f64) -> Self {
        Self {
            depth,
            gasage,
            co2,
            core,
        }
    }

    /// Number of fields that failed to parse.
    #[must_use]
    pub fn nan_fields(&self) -> usize {
        [self.depth, self.gasage, self.co2]
            .iter()
            .filter(|v| v.is_nan())
            .count()
    }
}
