// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

/// Interpolation between consecutive points of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Cubic segments that preserve monotonicity in y, assuming x is sorted.
    ///
    /// Suited to time series: the curve never overshoots between samples.
    MonotoneX,
    /// The same as [`Curve::MonotoneX`] with the roles of x and y swapped.
    ///
    /// Suited to depth profiles where y is the sorted axis.
    MonotoneY,
}

/// Builds a path through `points` using `curve`.
///
/// Non‑finite coordinates are passed through untouched; the resulting
/// segments collapse rather than abort.
#[must_use]
pub fn line_path<I>(points: I, curve: Curve) -> BezPath
where
    I: IntoIterator<Item = Point>,
{
    let points: Vec<Point> = points.into_iter().collect();
    match curve {
        Curve::Linear => linear(&points),
        Curve::MonotoneX => monotone(&points, false),
        Curve::MonotoneY => monotone(&points, true),
    }
}

fn linear(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
    }
    for p in iter {
        path.line_to(*p);
    }
    path
}

fn monotone(points: &[Point], reflect: bool) -> BezPath {
    let flip = |p: Point| if reflect { Point::new(p.y, p.x) } else { p };
    let pts: Vec<Point> = points.iter().copied().map(flip).collect();

    let mut path = BezPath::new();
    match pts.len() {
        0 => return path,
        1 => {
            path.move_to(flip(pts[0]));
            return path;
        }
        2 => {
            path.move_to(flip(pts[0]));
            path.line_to(flip(pts[1]));
            return path;
        }
        _ => {}
    }

    // Tangent at each point; the two ends use the one‑sided estimate.
    let n = pts.len();
    let mut tangents = Vec::with_capacity(n);
    tangents.push(0.0);
    for i in 1..n - 1 {
        tangents.push(slope3(pts[i - 1], pts[i], pts[i + 1]));
    }
    tangents[0] = slope2(pts[0], pts[1], tangents[1]);
    tangents.push(slope2(pts[n - 2], pts[n - 1], tangents[n - 2]));

    path.move_to(flip(pts[0]));
    for i in 0..n - 1 {
        let (p0, p1) = (pts[i], pts[i + 1]);
        let dx = (p1.x - p0.x) / 3.0;
        path.curve_to(
            flip(Point::new(p0.x + dx, p0.y + dx * tangents[i])),
            flip(Point::new(p1.x - dx, p1.y - dx * tangents[i + 1])),
            flip(p1),
        );
    }
    path
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Divides by `h`, or by a zero signed like `other` when `h` is zero.
fn slope_over(dy: f64, h: f64, other: f64) -> f64 {
    let denom = if h != 0.0 && !h.is_nan() {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    };
    dy / denom
}

/// Tangent at `p1` from both neighbours (Steffen's method).
fn slope3(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = slope_over(p1.y - p0.y, h0, h1);
    let s1 = slope_over(p2.y - p1.y, h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    if s0.is_nan() || s1.is_nan() || p.is_nan() {
        return 0.0;
    }
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() { 0.0 } else { t }
}

/// One‑sided tangent at an end point given the tangent `t` at its neighbour.
fn slope2(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 && !h.is_nan() {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Point};

    use super::{Curve, line_path};

    #[test]
    fn linear_visits_every_point() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.0),
        ];
        let path = line_path(pts, Curve::Linear);
        let els = path.elements();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0], PathEl::MoveTo(pts[0]));
        assert_eq!(els[2], PathEl::LineTo(pts[2]));
    }

    #[test]
    fn short_inputs() {
        assert!(line_path([], Curve::MonotoneX).elements().is_empty());
        let one = line_path([Point::new(1.0, 1.0)], Curve::MonotoneX);
        assert_eq!(one.elements().len(), 1);
        let two = line_path(
            [Point::new(0.0, 0.0), Point::new(4.0, 4.0)],
            Curve::MonotoneX,
        );
        assert_eq!(two.elements()[1], PathEl::LineTo(Point::new(4.0, 4.0)));
    }

    #[test]
    fn monotone_x_does_not_overshoot() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 10.0),
            Point::new(2.0, 10.0),
            Point::new(3.0, 20.0),
        ];
        let path = line_path(pts, Curve::MonotoneX);
        for el in path.elements() {
            if let PathEl::CurveTo(c1, c2, end) = *el {
                for c in [c1, c2, end] {
                    assert!((0.0..=20.0).contains(&c.y), "overshoot at {c:?}");
                }
            }
        }
        // Flat run between two equal samples stays flat.
        if let PathEl::CurveTo(c1, c2, _) = path.elements()[2] {
            assert_eq!(c1.y, 10.0);
            assert_eq!(c2.y, 10.0);
        } else {
            panic!("expected cubic segment");
        }
    }

    #[test]
    fn monotone_y_passes_through_points() {
        let pts = [
            Point::new(280.0, 0.0),
            Point::new(260.0, 50.0),
            Point::new(270.0, 100.0),
        ];
        let path = line_path(pts, Curve::MonotoneY);
        let els = path.elements();
        assert_eq!(els[0], PathEl::MoveTo(pts[0]));
        match els[2] {
            PathEl::CurveTo(_, _, end) => assert_eq!(end, pts[2]),
            ref other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn nan_samples_collapse_quietly() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, f64::NAN),
            Point::new(2.0, 1.0),
        ];
        let path = line_path(pts, Curve::MonotoneX);
        assert_eq!(path.elements().len(), 3);
    }
}
