// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nice tick generation on a 1‑2‑5 ladder.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

// Thresholds between the 1, 2, 5 and 10 multipliers.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick indices plus the increment that turns them back into values.
///
/// A negative increment means “divide by `-inc`”, which keeps small steps
/// (0.1, 0.02, ...) exact.
#[derive(Clone, Copy, Debug)]
struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn round_half_up(x: f64) -> f64 {
    libm::floor(x + 0.5)
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = libm::floor(libm::log10(step));
    let error = step / libm::pow(10.0, power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        inc = libm::pow(10.0, -power) / factor;
        i1 = round_half_up(start * inc);
        i2 = round_half_up(stop * inc);
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        if i2 < i1 && (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        Some(TickSpec { i1, i2, inc: -inc })
    } else {
        inc = libm::pow(10.0, power) * factor;
        i1 = round_half_up(start / inc);
        i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        if i2 < i1 && (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        Some(TickSpec { i1, i2, inc })
    }
}

fn count_f64(count: usize) -> f64 {
    count as f64
}

/// Returns roughly `count` evenly spaced, human‑friendly values in `[start, stop]`.
///
/// The order of the result follows the order of the arguments, so a reversed
/// domain yields descending ticks. Non‑finite bounds yield no ticks.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return alloc::vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count_f64(count)) else {
        return Vec::new();
    };
    if spec.i2 < spec.i1 {
        return Vec::new();
    }

    let n = libm::floor(spec.i2 - spec.i1) + 1.0;
    let mut out = Vec::new();
    let mut i = 0.0;
    while i < n {
        let k = spec.i1 + i;
        out.push(if spec.inc < 0.0 {
            k / -spec.inc
        } else {
            k * spec.inc
        });
        i += 1.0;
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Returns the spacing between consecutive [`ticks`] for the same arguments.
///
/// Returns `0.0` when no ticks would be produced.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if !(start.is_finite() && stop.is_finite()) || count == 0 || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    match tick_spec(lo, hi, count_f64(count)) {
        Some(spec) if spec.inc < 0.0 => 1.0 / -spec.inc,
        Some(spec) => spec.inc,
        None => 0.0,
    }
}

/// Fixed‑precision tick label formatter with thousands grouping.
///
/// The precision is derived from the tick step, so `5000` steps print as
/// `"60,000"` and `0.5` steps print as `"282.5"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat {
    precision: usize,
    grouping: bool,
}

impl TickFormat {
    /// Formatter with just enough decimals to distinguish ticks `step` apart.
    #[must_use]
    pub fn for_step(step: f64) -> Self {
        let step = step.abs();
        let exp = if step > 0.0 && step.is_finite() {
            libm::floor(libm::log10(step))
        } else {
            0.0
        };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "exponent of a tick step is a small integer"
        )]
        let precision = (-exp).max(0.0) as usize;
        Self {
            precision,
            grouping: true,
        }
    }

    /// Integer formatter without grouping, for calendar years.
    #[must_use]
    pub fn integer() -> Self {
        Self {
            precision: 0,
            grouping: false,
        }
    }

    /// Number of decimals printed.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Formats a single value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{value}");
        }
        let body = format!("{:.*}", self.precision, value.abs());
        // Avoid printing "-0".
        let negative = value < 0.0 && body.bytes().any(|b| b != b'0' && b != b'.');
        let (int_part, frac_part) = match body.find('.') {
            Some(dot) => body.split_at(dot),
            None => (body.as_str(), ""),
        };

        let mut out = String::with_capacity(body.len() + body.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        if self.grouping {
            let digits = int_part.len();
            for (i, ch) in int_part.chars().enumerate() {
                if i > 0 && (digits - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(ch);
            }
        } else {
            out.push_str(int_part);
        }
        out.push_str(frac_part);
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{TickFormat, tick_step, ticks};

    #[test]
    fn gas_age_ticks_land_on_thousands() {
        assert_eq!(
            ticks(50_000.0, 75_000.0, 6),
            vec![50_000.0, 55_000.0, 60_000.0, 65_000.0, 70_000.0, 75_000.0]
        );
        assert_eq!(tick_step(50_000.0, 75_000.0, 6), 5_000.0);
        assert_eq!(
            ticks(59_000.0, 64_000.0, 5),
            vec![59_000.0, 60_000.0, 61_000.0, 62_000.0, 63_000.0, 64_000.0]
        );
    }

    #[test]
    fn fractional_steps_stay_exact() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
    }

    #[test]
    fn reversed_and_degenerate_inputs() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(ticks(f64::NAN, 3.0, 5).is_empty());
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn format_groups_thousands() {
        let f = TickFormat::for_step(5_000.0);
        assert_eq!(f.format(60_000.0), "60,000");
        assert_eq!(f.format(125.0), "125");
        assert_eq!(f.format(-1_234_567.0), "-1,234,567");
    }

    #[test]
    fn format_precision_follows_step() {
        let f = TickFormat::for_step(0.5);
        assert_eq!(f.precision(), 1);
        assert_eq!(f.format(282.5), "282.5");
        assert_eq!(f.format(-0.01), "0.0");
        assert_eq!(TickFormat::integer().format(1958.0), "1958");
        assert_eq!(TickFormat::integer().format(12_345.0), "12345");
    }
}
