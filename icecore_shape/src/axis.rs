// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use icecore_axis::{LinearScale, TickFormat};
use kurbo::Point;
use peniko::Color;

use crate::scene::{GroupMark, LineMark, Mark, TextAnchor, TextMark};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const FONT_SIZE: f64 = 10.0;

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis, ticks pointing down, labels below.
    Bottom,
    /// Vertical axis, ticks pointing left, labels to the left.
    Left,
}

/// Builds the marks of one axis: a domain line plus a tick and label per tick value.
///
/// The group is in the coordinate space of the scale's range; callers
/// translate it (for example to the bottom of the plot).
#[must_use]
pub fn axis_group(
    scale: &LinearScale,
    orient: AxisOrient,
    tick_count: usize,
    format: &TickFormat,
    class: &str,
) -> GroupMark {
    let ink = Color::from_rgb8(0, 0, 0);
    let mut group = GroupMark::new(class);
    let range = scale.range();
    let (start, end) = match orient {
        AxisOrient::Bottom => (Point::new(range.start, 0.0), Point::new(range.end, 0.0)),
        AxisOrient::Left => (Point::new(0.0, range.start), Point::new(0.0, range.end)),
    };
    group.marks.push(Mark::Line(LineMark {
        class: String::from("domain"),
        p0: start,
        p1: end,
        stroke: ink,
        stroke_width: 1.0,
    }));

    for value in scale.ticks(tick_count) {
        let at = scale.map(value);
        let mut tick = GroupMark::new("tick");
        let (p1, label_at, anchor) = match orient {
            AxisOrient::Bottom => {
                tick = tick.translated(at, 0.0);
                (
                    Point::new(0.0, TICK_SIZE),
                    Point::new(0.0, TICK_SIZE + TICK_PADDING + 0.71 * FONT_SIZE),
                    TextAnchor::Middle,
                )
            }
            AxisOrient::Left => {
                tick = tick.translated(0.0, at);
                (
                    Point::new(-TICK_SIZE, 0.0),
                    Point::new(-(TICK_SIZE + TICK_PADDING), 0.32 * FONT_SIZE),
                    TextAnchor::End,
                )
            }
        };
        tick.marks.push(Mark::Line(LineMark {
            class: String::new(),
            p0: Point::ORIGIN,
            p1,
            stroke: ink,
            stroke_width: 1.0,
        }));
        tick.marks.push(Mark::Text(TextMark {
            class: String::new(),
            position: label_at,
            text: format.format(value),
            anchor,
            font_size: FONT_SIZE,
            fill: ink,
            rotate: 0.0,
        }));
        group.marks.push(Mark::Group(tick));
    }
    group
}

/// Labels of the ticks in an axis group, in order. Useful in tests.
#[must_use]
pub fn tick_labels(axis: &GroupMark) -> Vec<String> {
    axis.marks
        .iter()
        .filter_map(|m| match m {
            Mark::Group(g) if g.class == "tick" => g.marks.iter().find_map(|c| match c {
                Mark::Text(t) => Some(t.text.clone()),
                _ => None,
            }),
            _ => None,
        })
        .collect()
}
