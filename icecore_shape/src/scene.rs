// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Rect, Size};
use peniko::Color;

/// Stroke dash pattern with a phase, as used by line reveal animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    /// Dash and gap length (a single `dash gap` pair).
    pub length: f64,
    /// Phase; `length` hides the whole line, `0` shows all of it.
    pub offset: f64,
}

/// A stroked path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Space separated CSS classes.
    pub class: String,
    /// Geometry in the coordinate space of the enclosing group.
    pub path: BezPath,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Dash used to partially reveal the stroke.
    pub dash: Option<Dash>,
}

/// A straight stroked line (axis domain, tick, baseline).
#[derive(Clone, Debug)]
pub struct LineMark {
    /// Space separated CSS classes.
    pub class: String,
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

/// A filled circle with an optional outline.
#[derive(Clone, Debug)]
pub struct CircleMark {
    /// Space separated CSS classes.
    pub class: String,
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub fill: Color,
    /// Optional outline color and width.
    pub stroke: Option<(Color, f64)>,
}

/// A filled and optionally stroked rectangle.
#[derive(Clone, Debug)]
pub struct RectMark {
    /// Space separated CSS classes.
    pub class: String,
    /// Bounds.
    pub rect: Rect,
    /// Fill color.
    pub fill: Color,
    /// Optional outline color and width.
    pub stroke: Option<(Color, f64)>,
}

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// A single line of text.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Space separated CSS classes.
    pub class: String,
    /// Anchor point (baseline).
    pub position: Point,
    /// Contents.
    pub text: String,
    /// Alignment relative to `position`.
    pub anchor: TextAnchor,
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill color.
    pub fill: Color,
    /// Rotation in degrees about `position`.
    pub rotate: f64,
}

/// A transformed, faded group of marks.
#[derive(Clone, Debug)]
pub struct GroupMark {
    /// Space separated CSS classes.
    pub class: String,
    /// Transform applied to children.
    pub transform: Affine,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
    /// Children, painted in order.
    pub marks: Vec<Mark>,
}

impl GroupMark {
    /// An untransformed, opaque group.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            transform: Affine::IDENTITY,
            opacity: 1.0,
            marks: Vec::new(),
        }
    }

    /// Returns the group translated by `(x, y)`.
    #[must_use]
    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.transform = Affine::translate((x, y));
        self
    }
}

/// One visual element of a [`Scene`].
#[derive(Clone, Debug)]
pub enum Mark {
    /// See [`PathMark`].
    Path(PathMark),
    /// See [`LineMark`].
    Line(LineMark),
    /// See [`CircleMark`].
    Circle(CircleMark),
    /// See [`RectMark`].
    Rect(RectMark),
    /// See [`TextMark`].
    Text(TextMark),
    /// See [`GroupMark`].
    Group(GroupMark),
}

impl Mark {
    /// CSS classes of this mark.
    #[must_use]
    pub fn class(&self) -> &str {
        match self {
            Self::Path(m) => &m.class,
            Self::Line(m) => &m.class,
            Self::Circle(m) => &m.class,
            Self::Rect(m) => &m.class,
            Self::Text(m) => &m.class,
            Self::Group(m) => &m.class,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class().split_ascii_whitespace().any(|c| c == class)
    }
}

/// Everything a chart paints at one instant.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Document size in pixels.
    pub size: Size,
    /// Top level marks, painted in order.
    pub marks: Vec<Mark>,
}

impl Scene {
    /// An empty scene of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            marks: Vec::new(),
        }
    }

    /// Depth‑first search for every mark carrying `class`.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<&Mark> {
        let mut out = Vec::new();
        collect(&self.marks, class, &mut out);
        out
    }

    /// The first mark carrying `class`, if any.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<&Mark> {
        self.find_all(class).into_iter().next()
    }
}

fn collect<'a>(marks: &'a [Mark], class: &str, out: &mut Vec<&'a Mark>) {
    for mark in marks {
        if mark.has_class(class) {
            out.push(mark);
        }
        if let Mark::Group(g) = mark {
            collect(&g.marks, class, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use kurbo::{Point, Size};
    use peniko::Color;

    use super::{CircleMark, GroupMark, Mark, Scene};

    #[test]
    fn find_descends_into_groups() {
        let mut legend = GroupMark::new("legend").translated(10.0, 20.0);
        legend.marks.push(Mark::Circle(CircleMark {
            class: String::from("legend-swatch core-3"),
            center: Point::ORIGIN,
            radius: 6.0,
            fill: Color::from_rgb8(0x1f, 0x77, 0xb4),
            stroke: None,
        }));
        let mut scene = Scene::new(Size::new(100.0, 100.0));
        scene.marks.push(Mark::Group(legend));

        assert!(scene.find("legend").is_some());
        assert_eq!(scene.find_all("core-3").len(), 1);
        assert!(scene.find("core").is_none());
    }
}
