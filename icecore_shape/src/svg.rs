// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export of a [`Scene`].
//!
//! Intended for inspection and snapshots, not pixel‑perfect rendering: fonts
//! are left to the viewer and every mark maps to exactly one element.

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{Affine, BezPath, PathEl};
use peniko::Color;

use crate::scene::{Mark, Scene, TextAnchor};

/// Writes `scene` as a standalone SVG document.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let w = fmt_f64(scene.size.width);
    let h = fmt_f64(scene.size.height);
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    for mark in &scene.marks {
        write_mark(&mut out, mark);
    }
    out.push_str("</svg>");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match mark {
        Mark::Path(m) => {
            let (stroke, alpha) = color_to_svg(m.stroke);
            let _ = write!(
                out,
                "<path{} d=\"{}\" fill=\"none\" stroke=\"{stroke}\"{} stroke-width=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"",
                class_attr(&m.class),
                bez_path_to_svg_d(&m.path),
                opacity_attr("stroke-opacity", alpha),
                fmt_f64(m.stroke_width),
            );
            if let Some(dash) = m.dash {
                let len = fmt_f64(dash.length);
                let _ = write!(
                    out,
                    " stroke-dasharray=\"{len} {len}\" stroke-dashoffset=\"{}\"",
                    fmt_f64(dash.offset)
                );
            }
            out.push_str("/>");
        }
        Mark::Line(m) => {
            let (stroke, alpha) = color_to_svg(m.stroke);
            let _ = write!(
                out,
                "<line{} x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\"{} stroke-width=\"{}\"/>",
                class_attr(&m.class),
                fmt_f64(m.p0.x),
                fmt_f64(m.p0.y),
                fmt_f64(m.p1.x),
                fmt_f64(m.p1.y),
                opacity_attr("stroke-opacity", alpha),
                fmt_f64(m.stroke_width),
            );
        }
        Mark::Circle(m) => {
            let (fill, alpha) = color_to_svg(m.fill);
            let _ = write!(
                out,
                "<circle{} cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"{}",
                class_attr(&m.class),
                fmt_f64(m.center.x),
                fmt_f64(m.center.y),
                fmt_f64(m.radius),
                opacity_attr("fill-opacity", alpha),
            );
            write_outline(out, m.stroke);
            out.push_str("/>");
        }
        Mark::Rect(m) => {
            let (fill, alpha) = color_to_svg(m.fill);
            let _ = write!(
                out,
                "<rect{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"{}",
                class_attr(&m.class),
                fmt_f64(m.rect.x0),
                fmt_f64(m.rect.y0),
                fmt_f64(m.rect.width()),
                fmt_f64(m.rect.height()),
                opacity_attr("fill-opacity", alpha),
            );
            write_outline(out, m.stroke);
            out.push_str("/>");
        }
        Mark::Text(m) => {
            let (fill, alpha) = color_to_svg(m.fill);
            let anchor = match m.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                out,
                "<text{} x=\"{}\" y=\"{}\" text-anchor=\"{anchor}\" font-size=\"{}\" fill=\"{fill}\"{}",
                class_attr(&m.class),
                fmt_f64(m.position.x),
                fmt_f64(m.position.y),
                fmt_f64(m.font_size),
                opacity_attr("fill-opacity", alpha),
            );
            if m.rotate != 0.0 {
                let _ = write!(
                    out,
                    " transform=\"rotate({} {} {})\"",
                    fmt_f64(m.rotate),
                    fmt_f64(m.position.x),
                    fmt_f64(m.position.y)
                );
            }
            out.push('>');
            escape_into(out, &m.text);
            out.push_str("</text>");
        }
        Mark::Group(g) => {
            let _ = write!(out, "<g{}", class_attr(&g.class));
            if g.transform != Affine::IDENTITY {
                let _ = write!(out, " transform=\"{}\"", affine_to_svg(g.transform));
            }
            if g.opacity < 1.0 {
                let _ = write!(out, " opacity=\"{}\"", fmt_f64(g.opacity.max(0.0)));
            }
            out.push('>');
            for child in &g.marks {
                write_mark(out, child);
            }
            out.push_str("</g>");
        }
    }
}

fn write_outline(out: &mut String, stroke: Option<(Color, f64)>) {
    if let Some((color, width)) = stroke {
        let (stroke, alpha) = color_to_svg(color);
        let _ = write!(
            out,
            " stroke=\"{stroke}\"{} stroke-width=\"{}\"",
            opacity_attr("stroke-opacity", alpha),
            fmt_f64(width)
        );
    }
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{class}\"")
    }
}

fn opacity_attr(name: &str, alpha: f32) -> String {
    if alpha >= 1.0 {
        String::new()
    } else {
        format!(" {name}=\"{}\"", fmt_f32(alpha))
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn affine_to_svg(xf: Affine) -> String {
    // kurbo::Affine stores [a, b, c, d, e, f] corresponding to:
    // [ a c e ]
    // [ b d f ]
    // [ 0 0 1 ]
    let c = xf.as_coeffs();
    if c[0] == 1.0 && c[1] == 0.0 && c[2] == 0.0 && c[3] == 1.0 {
        return format!("translate({} {})", fmt_f64(c[4]), fmt_f64(c[5]));
    }
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y),
                    fmt_f64(p3.x),
                    fmt_f64(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "SVG uses f32-like scalar formatting"
)]
fn fmt_f64(v: f64) -> String {
    fmt_f32(v as f32)
}

fn fmt_f32(v: f32) -> String {
    // Keep output readable and stable enough for diffing.
    if !v.is_finite() {
        return format!("{v}");
    }
    if v.abs() < 1e9 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i32;
        let diff = (i as f32) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use kurbo::{Point, Size};
    use peniko::Color;

    use super::to_svg;
    use crate::scene::{Dash, GroupMark, Mark, PathMark, Scene, TextAnchor, TextMark};
    use crate::{Curve, line_path};

    #[test]
    fn exports_dashed_path_in_group() {
        let path = line_path([Point::new(0.0, 0.0), Point::new(10.0, 0.0)], Curve::Linear);
        let mut g = GroupMark::new("plot").translated(60.0, 40.0);
        g.marks.push(Mark::Path(PathMark {
            class: String::from("core-line core-3"),
            path,
            stroke: Color::from_rgb8(0x1f, 0x77, 0xb4),
            stroke_width: 2.0,
            dash: Some(Dash {
                length: 10.0,
                offset: 2.5,
            }),
        }));
        let scene = Scene {
            size: Size::new(100.0, 80.0),
            marks: vec![Mark::Group(g)],
        };
        let svg = to_svg(&scene);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<g class=\"plot\" transform=\"translate(60 40)\">"));
        assert!(svg.contains("d=\"M0 0L10 0\""));
        assert!(svg.contains("stroke=\"#1f77b4\""));
        assert!(svg.contains("stroke-dasharray=\"10 10\" stroke-dashoffset=\"2.5\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped_and_rotated() {
        let scene = Scene {
            size: Size::new(10.0, 10.0),
            marks: vec![Mark::Text(TextMark {
                class: String::new(),
                position: Point::new(-5.0, 3.0),
                text: String::from("CO\u{2082} <ppm> & more"),
                anchor: TextAnchor::Middle,
                font_size: 12.0,
                fill: Color::from_rgb8(0x33, 0x33, 0x33),
                rotate: -90.0,
            })],
        };
        let svg = to_svg(&scene);
        assert!(svg.contains("&lt;ppm&gt; &amp; more"));
        assert!(svg.contains("transform=\"rotate(-90 -5 3)\""));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn nan_coordinates_are_written_verbatim() {
        let path = line_path(
            [Point::new(0.0, f64::NAN), Point::new(1.0, 1.0)],
            Curve::Linear,
        );
        let scene = Scene {
            size: Size::new(10.0, 10.0),
            marks: vec![Mark::Path(PathMark {
                class: String::new(),
                path,
                stroke: Color::from_rgb8(0, 0, 0),
                stroke_width: 1.0,
                dash: None,
            })],
        };
        assert!(to_svg(&scene).contains("M0 NaN"));
    }
}
