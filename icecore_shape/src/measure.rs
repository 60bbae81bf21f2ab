// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};

const ACCURACY: f64 = 1e-3;

/// Arc‑length lookup over a path.
///
/// Segments containing non‑finite coordinates measure as zero length, so a
/// line built from malformed samples is treated as collapsed instead of
/// poisoning the total.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    segments: Vec<(PathSeg, f64)>,
    start: Option<Point>,
    total: f64,
}

impl PathMeasure {
    /// Measures every segment of `path`.
    #[must_use]
    pub fn new(path: &BezPath) -> Self {
        let mut segments = Vec::new();
        let mut total = 0.0;
        for seg in path.segments() {
            let len = if segment_is_finite(&seg) {
                seg.arclen(ACCURACY)
            } else {
                0.0
            };
            total += len;
            segments.push((seg, len));
        }
        let start = path.elements().first().and_then(|el| el.end_point());
        Self {
            segments,
            start,
            total,
        }
    }

    /// Total arc length.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total
    }

    /// The point `len` along the path, clamped to the path's ends.
    ///
    /// Returns `None` for an empty path.
    #[must_use]
    pub fn point_at_length(&self, len: f64) -> Option<Point> {
        let start = self.start?;
        if self.segments.is_empty() || len.is_nan() || len <= 0.0 {
            return Some(start);
        }
        let mut remaining = len;
        let mut last = start;
        for (seg, seg_len) in &self.segments {
            if *seg_len <= 0.0 {
                continue;
            }
            if remaining <= *seg_len {
                let t = seg.inv_arclen(remaining, ACCURACY);
                return Some(seg.eval(t));
            }
            remaining -= seg_len;
            last = seg.eval(1.0);
        }
        Some(last)
    }
}

fn segment_is_finite(seg: &PathSeg) -> bool {
    let ok = |p: Point| p.is_finite();
    match *seg {
        PathSeg::Line(l) => ok(l.p0) && ok(l.p1),
        PathSeg::Quad(q) => ok(q.p0) && ok(q.p1) && ok(q.p2),
        PathSeg::Cubic(c) => ok(c.p0) && ok(c.p1) && ok(c.p2) && ok(c.p3),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Point};

    use super::PathMeasure;
    use crate::{Curve, line_path};

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-3
    }

    #[test]
    fn polyline_lengths_add_up() {
        let path = line_path(
            [
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(3.0, 14.0),
            ],
            Curve::Linear,
        );
        let m = PathMeasure::new(&path);
        assert!((m.total_length() - 15.0).abs() < 1e-9);
        assert!(close(m.point_at_length(0.0).unwrap(), Point::new(0.0, 0.0)));
        assert!(close(m.point_at_length(10.0).unwrap(), Point::new(3.0, 9.0)));
        assert!(close(m.point_at_length(99.0).unwrap(), Point::new(3.0, 14.0)));
    }

    #[test]
    fn empty_and_single_point_paths() {
        let empty = PathMeasure::new(&BezPath::new());
        assert_eq!(empty.total_length(), 0.0);
        assert!(empty.point_at_length(1.0).is_none());

        let dot = PathMeasure::new(&line_path([Point::new(2.0, 3.0)], Curve::MonotoneX));
        assert_eq!(dot.point_at_length(5.0), Some(Point::new(2.0, 3.0)));
    }

    #[test]
    fn nan_segments_measure_zero() {
        let path = line_path(
            [
                Point::new(0.0, 0.0),
                Point::new(f64::NAN, 1.0),
                Point::new(10.0, 0.0),
            ],
            Curve::Linear,
        );
        let m = PathMeasure::new(&path);
        assert_eq!(m.total_length(), 0.0);
    }
}
