// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use icecore_axis::{LinearScale, TickFormat, extent};
use icecore_series::AnnualMean;
use icecore_shape::{
    AxisOrient, CircleMark, Curve, Dash, GroupMark, LineMark, Mark, PathMark, PathMeasure, Scene,
    TextAnchor, TextMark, axis_group, line_path,
};
use icecore_transition::{Animated, Easing, TransitionId, TransitionSpec};
use kurbo::{BezPath, Point, Size};
use peniko::Color;

use crate::ModernConfig;

const RECORD_COLOR: Color = Color::from_rgb8(0x8b, 0x1e, 0x4f);

/// State of the replay button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReplayState {
    /// Not played yet.
    #[default]
    Ready,
    /// Replay running; the button is disabled.
    Playing,
    /// Replay ended.
    Finished,
}

impl ReplayState {
    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Play the record",
            Self::Playing => "Playing…",
            Self::Finished => "Play again",
        }
    }

    /// Returns `true` if the button accepts clicks.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Playing
    }
}

/// The modern CO₂ record, drawn by a replay that sweeps a dot along it.
#[derive(Debug)]
pub struct ModernRecord {
    config: ModernConfig,
    yearly: Vec<AnnualMean>,
    x: LinearScale,
    y: LinearScale,
    path: BezPath,
    measure: PathMeasure,
    /// Eased replay progress in `[0, 1]`.
    progress: Animated<f64>,
    replay: Option<TransitionId>,
    state: ReplayState,
    dot: Option<Point>,
    captions: [String; 2],
}

impl ModernRecord {
    /// Lays out the record from yearly means sorted by year.
    ///
    /// Years without a valid mean are left out of the line.
    #[must_use]
    pub fn new(yearly: Vec<AnnualMean>, config: ModernConfig) -> Self {
        let total = yearly.len();
        let yearly: Vec<AnnualMean> = yearly.into_iter().filter(|d| !d.co2.is_nan()).collect();
        if yearly.len() < total {
            log::warn!(
                "modern record: {} years without a CO2 mean left out",
                total - yearly.len()
            );
        }

        let plot = config.plot_size();
        let x_domain = extent(yearly.iter().map(|d| d.year)).unwrap_or(f64::NAN..f64::NAN);
        let y_top = extent(yearly.iter().map(|d| d.co2)).map_or(f64::NAN, |e| e.end);
        let x = LinearScale::new(x_domain, 0.0..plot.width);
        let y = LinearScale::new(config.y_floor..y_top + config.y_headroom, plot.height..0.0);

        let path = line_path(
            yearly.iter().map(|d| Point::new(x.map(d.year), y.map(d.co2))),
            Curve::Linear,
        );
        let measure = PathMeasure::new(&path);
        let dot = yearly
            .first()
            .map(|d| Point::new(x.map(d.year), y.map(d.co2)));
        let captions = prompt(&config, yearly.first());
        log::debug!(
            "modern record: {} years, path length {:.1}",
            yearly.len(),
            measure.total_length()
        );

        Self {
            config,
            yearly,
            x,
            y,
            path,
            measure,
            progress: Animated::new(0.0),
            replay: None,
            state: ReplayState::Ready,
            dot,
            captions,
        }
    }

    /// Yearly means drawn.
    #[must_use]
    pub fn yearly(&self) -> &[AnnualMean] {
        &self.yearly
    }

    /// Replay button state.
    #[must_use]
    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Button caption.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        self.state.label()
    }

    /// Returns `true` if the button accepts clicks.
    #[must_use]
    pub fn button_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Main and secondary captions.
    #[must_use]
    pub fn captions(&self) -> &[String; 2] {
        &self.captions
    }

    /// Center of the highlight dot, if there is any data.
    #[must_use]
    pub fn dot(&self) -> Option<Point> {
        self.dot
    }

    /// Replay progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        *self.progress.value()
    }

    /// Presses the button. Ignored while a replay runs or without data.
    pub fn play(&mut self, now: Duration) -> bool {
        if self.state == ReplayState::Playing || self.yearly.is_empty() {
            return false;
        }
        self.progress.set(0.0);
        self.replay = Some(self.progress.start(
            1.0,
            now,
            TransitionSpec::new(self.config.play_duration(), Easing::CubicInOut),
        ));
        self.state = ReplayState::Playing;
        log::debug!("modern record: replay started");
        true
    }

    /// Advances the replay. Returns `true` while it runs.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.state != ReplayState::Playing {
            return false;
        }
        let done = self.progress.tick(now);
        let t = self.progress();
        if let Some(point) = self.measure.point_at_length(t * self.measure.total_length()) {
            self.dot = Some(point);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index into the yearly means"
        )]
        let index = (t * (self.yearly.len() - 1) as f64).round() as usize;
        if let Some(d) = self.yearly.get(index) {
            self.captions = year_captions(self.config.natural_peak, d);
        }
        if done.is_some() && done == self.replay {
            self.replay = None;
            self.state = ReplayState::Finished;
            log::debug!("modern record: replay finished");
        }
        self.state == ReplayState::Playing
    }

    /// Everything the chart paints as of the last tick.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let m = self.config.margins;
        let plot = self.config.plot_size();
        let mut scene = Scene::new(Size::new(self.config.width, self.config.height));
        let mut chart = GroupMark::new("modern").translated(m.left, m.top);
        let ink = Color::from_rgb8(0x55, 0x55, 0x55);

        let ticks = self.config.tick_count;
        chart.marks.push(Mark::Group(
            axis_group(
                &self.x,
                AxisOrient::Bottom,
                ticks,
                &TickFormat::integer(),
                "modern-axis x-axis",
            )
            .translated(0.0, plot.height),
        ));
        chart.marks.push(Mark::Group(axis_group(
            &self.y,
            AxisOrient::Left,
            ticks,
            &self.y.tick_format(ticks),
            "modern-axis y-axis",
        )));

        let base = self.y.map(self.config.natural_peak);
        if base.is_finite() {
            chart.marks.push(Mark::Line(LineMark {
                class: String::from("modern-baseline"),
                p0: Point::new(0.0, base),
                p1: Point::new(plot.width, base),
                stroke: ink,
                stroke_width: 1.0,
            }));
            chart.marks.push(Mark::Text(TextMark {
                class: String::from("modern-baseline-label"),
                position: Point::new(plot.width - 5.0, base - 6.0),
                text: format!("Natural ice-core peak (~{:.0} ppm).", self.config.natural_peak),
                anchor: TextAnchor::End,
                font_size: 12.0,
                fill: ink,
                rotate: 0.0,
            }));
        }

        if !self.yearly.is_empty() {
            let length = self.measure.total_length();
            chart.marks.push(Mark::Path(PathMark {
                class: String::from("modern-line"),
                path: self.path.clone(),
                stroke: RECORD_COLOR,
                stroke_width: self.config.line_width,
                dash: Some(Dash {
                    length,
                    offset: length * (1.0 - self.progress()),
                }),
            }));
        }
        if let Some(center) = self.dot {
            chart.marks.push(Mark::Circle(CircleMark {
                class: String::from("modern-highlight-dot"),
                center,
                radius: self.config.dot_radius,
                fill: RECORD_COLOR,
                stroke: Some((Color::WHITE, 2.0)),
            }));
        }
        scene.marks.push(Mark::Group(chart));
        scene
    }
}

fn prompt(config: &ModernConfig, first: Option<&AnnualMean>) -> [String; 2] {
    let main = match first {
        Some(d) => format!(
            "Press “Play the record” to watch CO₂ rise from {:.0} to today.",
            d.year
        ),
        None => String::from("Press “Play the record” to watch CO₂ rise to today."),
    };
    [
        main,
        format!(
            "Keep an eye on how far the line climbs above the natural ice-core peak (~{:.0} ppm).",
            config.natural_peak
        ),
    ]
}

fn year_captions(peak: f64, d: &AnnualMean) -> [String; 2] {
    let above = d.co2 - peak;
    let pct = (d.co2 / peak - 1.0) * 100.0;
    [
        format!("In {:.0}, atmospheric CO₂ was {:.1} ppm.", d.year, d.co2),
        format!(
            "That’s about {above:.1} ppm above the natural ice-core peaks, roughly {pct:.0}% higher than the warmest parts of the last 120,000 years."
        ),
    ]
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use icecore_series::AnnualMean;
    use icecore_shape::Mark;

    use super::{ModernRecord, ReplayState};
    use crate::ModernConfig;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn record() -> ModernRecord {
        let yearly = (0..=60)
            .map(|i| AnnualMean {
                year: 1960.0 + f64::from(i),
                co2: 316.0 + 1.5 * f64::from(i),
            })
            .collect();
        ModernRecord::new(yearly, ModernConfig::default())
    }

    #[test]
    fn starts_hidden_with_the_prompt() {
        let r = record();
        assert_eq!(r.state(), ReplayState::Ready);
        assert!(r.captions()[0].contains("from 1960 to today"));
        let scene = r.scene();
        let Some(Mark::Path(line)) = scene.find("modern-line") else {
            panic!("no record line");
        };
        let dash = line.dash.unwrap();
        assert_eq!(dash.offset, dash.length);
        assert_eq!(r.dot(), Some(kurbo::Point::new(0.0, r.y.map(316.0))));
    }

    #[test]
    fn replay_walks_the_years() {
        let mut r = record();
        assert!(r.play(ms(0)));
        assert!(!r.button_enabled());
        assert_eq!(r.button_label(), "Playing…");
        assert!(!r.play(ms(100)));

        assert!(r.tick(ms(4000)));
        assert!((r.progress() - 0.5).abs() < 1e-9);
        assert_eq!(r.captions()[0], "In 1990, atmospheric CO₂ was 361.0 ppm.");

        assert!(!r.tick(ms(8000)));
        assert_eq!(r.state(), ReplayState::Finished);
        assert_eq!(r.button_label(), "Play again");
        assert_eq!(r.captions()[0], "In 2020, atmospheric CO₂ was 406.0 ppm.");
        assert!(r.captions()[1].starts_with("That’s about 126.0 ppm above"));
        assert!(r.captions()[1].contains("roughly 45% higher"));
    }

    #[test]
    fn replay_again_restarts_hidden() {
        let mut r = record();
        r.play(ms(0));
        r.tick(ms(9000));
        assert!(r.play(ms(10_000)));
        assert_eq!(r.progress(), 0.0);
    }

    #[test]
    fn nan_years_are_dropped_and_empty_data_never_plays() {
        let r = ModernRecord::new(
            vec![
                AnnualMean {
                    year: 2000.0,
                    co2: f64::NAN,
                },
                AnnualMean {
                    year: 2001.0,
                    co2: 371.0,
                },
            ],
            ModernConfig::default(),
        );
        assert_eq!(r.yearly().len(), 1);

        let mut empty = ModernRecord::new(Vec::new(), ModernConfig::default());
        assert!(!empty.play(ms(0)));
        assert!(empty.dot().is_none());
        assert!(empty.scene().find("modern-line").is_none());
    }
}
