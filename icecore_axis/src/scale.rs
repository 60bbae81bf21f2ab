// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::ticks::{TickFormat, tick_step, ticks};

/// Returns the `[min, max]` of `values`, ignoring `NaN`.
///
/// Returns `None` when no comparable value is present.
#[must_use]
pub fn extent<I>(values: I) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let mut out: Option<Range<f64>> = None;
    for v in values {
        if v.is_nan() {
            continue;
        }
        out = Some(match out {
            None => v..v,
            Some(r) => r.start.min(v)..r.end.max(v),
        });
    }
    out
}

/// Linear mapping from a world‑space domain to a view‑space range.
///
/// `LinearScale` is the 1D building block shared by every Icecore chart. The
/// domain is expressed in data units, the range in device pixels. Either may
/// be reversed (`start > end`); this is how y axes that grow upward are
/// expressed.
///
/// A degenerate domain (`start == end`) maps every value to the middle of the
/// range. A `NaN` domain maps every value to `NaN`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: Range<f64>,
    range: Range<f64>,
    clamp: bool,
}

impl LinearScale {
    /// Creates a new scale over the given domain and range.
    #[must_use]
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Returns the current domain.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Sets the domain. This is a synchronous assignment.
    pub fn set_domain(&mut self, domain: Range<f64>) {
        self.domain = domain;
    }

    /// Returns the current range in view units.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    /// Sets the range in view units.
    pub fn set_range(&mut self, range: Range<f64>) {
        self.range = range;
    }

    /// Enables or disables clamping of mapped values into the range.
    pub fn set_clamp(&mut self, clamp: bool) {
        self.clamp = clamp;
    }

    /// Returns whether output clamping is enabled.
    #[must_use]
    pub fn clamp(&self) -> bool {
        self.clamp
    }

    /// Maps a domain value into view space.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        let t = normalize(&self.domain, x);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        lerp(&self.range, t)
    }

    /// Maps a view‑space value back into the domain.
    #[must_use]
    pub fn invert(&self, y: f64) -> f64 {
        let t = normalize(&self.range, y);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        lerp(&self.domain, t)
    }

    /// Returns roughly `count` nice tick values inside the domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.start, self.domain.end, count)
    }

    /// Returns a label formatter matched to [`LinearScale::ticks`] with the same `count`.
    #[must_use]
    pub fn tick_format(&self, count: usize) -> TickFormat {
        TickFormat::for_step(tick_step(self.domain.start, self.domain.end, count))
    }

    /// Snapshot of the current scale for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> LinearScaleDebugInfo {
        LinearScaleDebugInfo {
            domain: self.domain.clone(),
            range: self.range.clone(),
            clamp: self.clamp,
            world_units_per_pixel: (self.domain.end - self.domain.start)
                / (self.range.end - self.range.start),
        }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(0.0..1.0, 0.0..1.0)
    }
}

/// Debug snapshot of a [`LinearScale`].
#[derive(Clone, Debug)]
pub struct LinearScaleDebugInfo {
    /// Current domain.
    pub domain: Range<f64>,
    /// Current range in view units.
    pub range: Range<f64>,
    /// Whether mapped values are clamped.
    pub clamp: bool,
    /// Domain units covered by a single view unit.
    pub world_units_per_pixel: f64,
}

fn normalize(span: &Range<f64>, x: f64) -> f64 {
    let len = span.end - span.start;
    if len.is_nan() {
        f64::NAN
    } else if len == 0.0 {
        0.5
    } else {
        (x - span.start) / len
    }
}

fn lerp(span: &Range<f64>, t: f64) -> f64 {
    span.start + (span.end - span.start) * t
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, extent};

    #[test]
    fn extent_skips_nan() {
        let e = extent([3.0, f64::NAN, -1.0, 7.5]).unwrap();
        assert_eq!(e, -1.0..7.5);
        assert!(extent([f64::NAN]).is_none());
        assert!(extent(core::iter::empty()).is_none());
    }

    #[test]
    fn map_invert_roundtrip_with_inverted_range() {
        let scale = LinearScale::new(180.0..300.0, 400.0..0.0);
        assert_eq!(scale.map(180.0), 400.0);
        assert_eq!(scale.map(300.0), 0.0);
        let y = scale.map(255.0);
        assert!((scale.invert(y) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new(5.0..5.0, 0.0..100.0);
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.map(1e9), 50.0);
    }

    #[test]
    fn nan_domain_propagates() {
        let scale = LinearScale::new(f64::NAN..1.0, 0.0..100.0);
        assert!(scale.map(0.5).is_nan());
    }

    #[test]
    fn clamp_limits_output() {
        let mut scale = LinearScale::new(0.0..10.0, 0.0..100.0);
        assert_eq!(scale.map(20.0), 200.0);
        scale.set_clamp(true);
        assert_eq!(scale.map(20.0), 100.0);
        assert_eq!(scale.map(-5.0), 0.0);
    }

    #[test]
    fn set_domain_is_synchronous() {
        let mut scale = LinearScale::new(50_000.0..75_000.0, 0.0..800.0);
        scale.set_domain(59_000.0..64_000.0);
        assert_eq!(scale.domain(), 59_000.0..64_000.0);
        assert_eq!(scale.map(59_000.0), 0.0);

        let info = scale.debug_info();
        assert!((info.world_units_per_pixel - 6.25).abs() < 1e-12);
    }
}
