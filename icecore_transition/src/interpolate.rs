// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Point, Vec2};

/// Values that can be blended between two endpoints.
pub trait Interpolate: Clone {
    /// Returns the value a fraction `t` of the way from `self` to `to`.
    ///
    /// `t` is eased progress and may leave `[0, 1]` for overshooting curves.
    #[must_use]
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Range<f64> {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.start.interpolate(&to.start, t)..self.end.interpolate(&to.end, t)
    }
}

impl Interpolate for Point {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.lerp(*to, t)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.lerp(*to, t)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Interpolate;

    #[test]
    fn ranges_blend_both_ends() {
        let a = 50_000.0..75_000.0;
        let b = 59_000.0..64_000.0;
        assert_eq!(a.interpolate(&b, 0.5), 54_500.0..69_500.0);
        assert_eq!(a.interpolate(&b, 1.0), b);
    }

    #[test]
    fn points_blend_componentwise() {
        let p = Point::new(0.0, 10.0).interpolate(&Point::new(10.0, 30.0), 0.25);
        assert_eq!(p, Point::new(2.5, 15.0));
    }
}
