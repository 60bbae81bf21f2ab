// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use core::time::Duration;

use icecore_axis::LinearScale;
use icecore_series::{CoreId, Sample, SeriesGroup};
use icecore_shape::{
    AxisOrient, CircleMark, Curve, Dash, GroupMark, Mark, PathMark, PathMeasure, Scene,
    TextAnchor, TextMark, axis_group, line_path,
};
use icecore_transition::{Animated, Easing, TransitionId, TransitionSpec};
use kurbo::{Point, Size};
use peniko::Color;

use crate::{
    ChartConfig, CorePalette, DrawGate, DrawPhase, LegendPosition, ScrollLock, ViewportSize,
    VisibilityObserver, XRange, ZoomStep,
};

/// Domains of the shared scales.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Gas‑age window.
    pub x_domain: Range<f64>,
    /// CO₂ window.
    pub y_domain: Range<f64>,
}

/// One core's line and the domains it is currently drawn with.
#[derive(Clone, Debug)]
struct SeriesLine {
    core: CoreId,
    color: Color,
    samples: Vec<Sample>,
    x_domain: Animated<Range<f64>>,
    y_domain: Animated<Range<f64>>,
    /// Hidden fraction of the stroke: `1` hides all of it.
    hidden: Animated<f64>,
    /// Entry reveal still running.
    entry: Option<TransitionId>,
}

#[derive(Clone, Debug)]
struct AxisState {
    domain: Animated<Range<f64>>,
    ticks: usize,
}

impl AxisState {
    fn new(domain: Range<f64>, ticks: usize) -> Self {
        Self {
            domain: Animated::new(domain),
            ticks,
        }
    }
}

#[derive(Clone, Debug)]
struct Legend {
    entries: Vec<(CoreId, Color)>,
    position: LegendPosition,
    anchor: Animated<Point>,
    opacity: Animated<f64>,
}

/// The scroll‑driven ice‑core chart.
///
/// Owns the shared x/y scales, one line per core, both axes and the legend,
/// and keeps them consistent while transitions overlap. Drive it with
/// [`on_visibility`](Self::on_visibility), [`on_scroll_step`](Self::on_scroll_step)
/// and [`tick`](Self::tick), then read [`scene`](Self::scene).
#[derive(Debug)]
pub struct ZoomedChartController {
    config: ChartConfig,
    viewport: ViewportSize,
    data: SeriesGroup,
    full_extent: Range<f64>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    lines: Vec<SeriesLine>,
    x_axis: AxisState,
    y_axis: AxisState,
    legend: Legend,
    palette: CorePalette,
    gate: DrawGate,
    observer: VisibilityObserver,
    lock: ScrollLock,
    step: ZoomStep,
    built: bool,
}

impl ZoomedChartController {
    /// Creates an empty, undrawn chart.
    #[must_use]
    pub fn new(config: ChartConfig, viewport: ViewportSize) -> Self {
        let plot = config.plot_size(viewport);
        let nan = f64::NAN..f64::NAN;
        let legend = Legend {
            entries: Vec::new(),
            position: LegendPosition::BottomRight,
            anchor: Animated::new(legend_anchor(&config, plot, LegendPosition::BottomRight)),
            opacity: Animated::new(0.0),
        };
        Self {
            observer: VisibilityObserver::new(config.visibility_threshold),
            x_scale: LinearScale::new(nan.clone(), 0.0..plot.width),
            y_scale: LinearScale::new(nan.clone(), plot.height..0.0),
            lines: Vec::new(),
            x_axis: AxisState::new(nan.clone(), config.initial_ticks),
            y_axis: AxisState::new(nan.clone(), config.initial_ticks),
            full_extent: nan,
            legend,
            palette: CorePalette::default(),
            gate: DrawGate::new(),
            lock: ScrollLock::new(),
            data: SeriesGroup::new(),
            step: ZoomStep::FullView,
            built: false,
            config,
            viewport,
        }
    }

    /// Shares the page's scroll lock instead of a private one.
    #[must_use]
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.lock = lock;
        self
    }

    /// Hands over loaded data. It is drawn on the next visibility trigger.
    pub fn set_data(&mut self, data: SeriesGroup) {
        log::debug!("chart: received {} series", data.len());
        self.data = data;
    }

    /// Reports the chart container's visible fraction.
    ///
    /// The first report at or above the threshold while undrawn, with data
    /// present, starts the entry animation. Returns `true` if it did.
    pub fn on_visibility(&mut self, visible_fraction: f64, now: Duration) -> bool {
        if !self.observer.observe(visible_fraction) {
            return false;
        }
        if self.gate.phase() != DrawPhase::NotDrawn {
            log::debug!("chart: visible again, already {:?}", self.gate.phase());
            return false;
        }
        let data = core::mem::take(&mut self.data);
        self.initialize(data, now)
    }

    /// Builds scales, lines, axes and legend from `data`.
    ///
    /// The first successful call plays the entry animation and locks
    /// scrolling until every line is revealed. Calls after the chart is drawn
    /// rebuild without animation. Calls while drawing, or with no data, change
    /// nothing and return `false`.
    pub fn initialize(&mut self, mut data: SeriesGroup, now: Duration) -> bool {
        data.sort_by_gas_age();
        match self.gate.phase() {
            DrawPhase::Drawing => {
                log::debug!("chart: initialize ignored while drawing");
                false
            }
            DrawPhase::NotDrawn => {
                let started = self.gate.try_begin(data.cores(), &self.lock);
                self.data = data;
                if started {
                    self.build(now, true);
                }
                started
            }
            DrawPhase::Drawn if data.is_empty() => {
                log::debug!("chart: no data, keeping the drawn chart");
                false
            }
            DrawPhase::Drawn => {
                self.data = data;
                self.build(now, false);
                true
            }
        }
    }

    /// Handles a step element entering the trigger line.
    ///
    /// Ignored unless the chart is drawn, for unknown indices, and for the
    /// step already shown. Returns `true` if the view changed.
    pub fn on_scroll_step(&mut self, step_index: usize, now: Duration) -> bool {
        if self.gate.phase() != DrawPhase::Drawn {
            log::debug!("chart: step {step_index} ignored while {:?}", self.gate.phase());
            return false;
        }
        let Some(step) = ZoomStep::from_index(step_index) else {
            log::debug!("chart: no zoom step at index {step_index}");
            return false;
        };
        if step == self.step {
            return false;
        }
        log::debug!("chart: {:?} -> {step:?}", self.step);
        self.step = step;
        self.apply_zoom(step.x_range(&self.config), now);
        self.move_legend(step.legend_position(), now);
        true
    }

    /// Zooms the x axis to `range` and fits the y axis to what is visible.
    ///
    /// The x stage moves every line and the x axis together. The y stage
    /// follows after a short delay with the y domain recomputed from the
    /// samples inside the new x domain. If none are, y is left as is.
    pub fn apply_zoom(&mut self, range: XRange, now: Duration) {
        if !self.built {
            return;
        }
        let x = match range {
            XRange::Full => self.full_extent.clone(),
            XRange::Span(window) => clamp_into(&window, &self.full_extent),
        };
        self.x_scale.set_domain(x.clone());

        let stage = TransitionSpec::new(self.config.zoom_duration(), Easing::CubicInOut);
        for line in &mut self.lines {
            line.x_domain.start(x.clone(), now, stage);
        }
        self.x_axis.domain.start(x.clone(), now, stage);
        self.x_axis.ticks = self.config.zoom_ticks;

        match self.data.co2_extent_within(&x) {
            Some(y) => self.y_scale.set_domain(y),
            None => log::debug!("chart: no samples in {x:?}, keeping y domain"),
        }
        let y = self.y_scale.domain();
        let stage = stage.with_delay(self.config.y_stage_delay());
        for line in &mut self.lines {
            line.y_domain.start(y.clone(), now, stage);
        }
        self.y_axis.domain.start(y, now, stage);
        self.y_axis.ticks = self.config.zoom_ticks;
    }

    /// Moves the legend to `position`.
    pub fn move_legend(&mut self, position: LegendPosition, now: Duration) {
        let plot = self.config.plot_size(self.viewport);
        self.legend.position = position;
        self.legend.anchor.start(
            legend_anchor(&self.config, plot, position),
            now,
            TransitionSpec::new(self.config.legend_move(), Easing::CubicInOut),
        );
    }

    /// Advances every transition to `now`.
    pub fn tick(&mut self, now: Duration) {
        for line in &mut self.lines {
            line.x_domain.tick(now);
            line.y_domain.tick(now);
            let done = line.hidden.tick(now);
            if done.is_some() && done == line.entry {
                line.entry = None;
                self.gate.finish_series(line.core);
            }
        }
        self.x_axis.domain.tick(now);
        self.y_axis.domain.tick(now);
        self.legend.anchor.tick(now);
        self.legend.opacity.tick(now);
    }

    /// Lays the chart out for a new viewport. Domains are kept.
    pub fn resize(&mut self, viewport: ViewportSize, now: Duration) {
        self.viewport = viewport;
        let plot = self.config.plot_size(viewport);
        self.x_scale.set_range(0.0..plot.width);
        self.y_scale.set_range(plot.height..0.0);
        let anchor = legend_anchor(&self.config, plot, self.legend.position);
        if self.legend.anchor.is_animating() {
            self.legend.anchor.start(
                anchor,
                now,
                TransitionSpec::new(self.config.legend_move(), Easing::CubicInOut),
            );
        } else {
            self.legend.anchor.set(anchor);
        }
        log::debug!("chart: resized to {}x{}", viewport.width, viewport.height);
    }

    /// Current phase of the entry animation.
    #[must_use]
    pub fn phase(&self) -> DrawPhase {
        self.gate.phase()
    }

    /// Step currently shown.
    #[must_use]
    pub fn step(&self) -> ZoomStep {
        self.step
    }

    /// Target domains of the shared scales.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState {
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
        }
    }

    /// Target gas‑age domain.
    #[must_use]
    pub fn x_domain(&self) -> Range<f64> {
        self.x_scale.domain()
    }

    /// Target CO₂ domain.
    #[must_use]
    pub fn y_domain(&self) -> Range<f64> {
        self.y_scale.domain()
    }

    /// Full gas‑age extent of the loaded data.
    #[must_use]
    pub fn full_extent(&self) -> Range<f64> {
        self.full_extent.clone()
    }

    /// Where the legend is headed.
    #[must_use]
    pub fn legend_position(&self) -> LegendPosition {
        self.legend.position
    }

    /// Displayed legend anchor.
    #[must_use]
    pub fn legend_anchor(&self) -> Point {
        *self.legend.anchor.value()
    }

    /// Displayed legend opacity.
    #[must_use]
    pub fn legend_opacity(&self) -> f64 {
        *self.legend.opacity.value()
    }

    /// Returns `true` when no transition is running or pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.lines.iter().all(|l| {
            !l.x_domain.is_animating() && !l.y_domain.is_animating() && !l.hidden.is_animating()
        }) && !self.x_axis.domain.is_animating()
            && !self.y_axis.domain.is_animating()
            && !self.legend.anchor.is_animating()
            && !self.legend.opacity.is_animating()
    }

    /// The scroll lock this chart takes while drawing.
    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Marks as displayed after the last [`tick`](Self::tick).
    #[must_use]
    pub fn scene(&self) -> Scene {
        let plot = self.config.plot_size(self.viewport);
        let m = self.config.margins;
        let mut scene = Scene::new(Size::new(
            plot.width + m.left + m.right,
            plot.height + m.top + m.bottom,
        ));
        if !self.built {
            return scene;
        }
        let ink = Color::from_rgb8(0, 0, 0);

        let mut chart = GroupMark::new("chart").translated(m.left, m.top);
        for line in &self.lines {
            chart.marks.push(Mark::Path(self.line_mark(line, plot)));
        }

        let x_scale = LinearScale::new(self.x_axis.domain.value().clone(), 0.0..plot.width);
        let x_format = x_scale.tick_format(self.x_axis.ticks);
        chart.marks.push(Mark::Group(
            axis_group(
                &x_scale,
                AxisOrient::Bottom,
                self.x_axis.ticks,
                &x_format,
                "x-axis",
            )
            .translated(0.0, plot.height),
        ));
        chart.marks.push(Mark::Text(TextMark {
            class: String::from("axis-title x-title"),
            position: Point::new(plot.width / 2.0, plot.height + 40.0),
            text: String::from("Gas Age (years)"),
            anchor: TextAnchor::Middle,
            font_size: 14.0,
            fill: ink,
            rotate: 0.0,
        }));

        let y_scale = LinearScale::new(self.y_axis.domain.value().clone(), plot.height..0.0);
        let y_format = y_scale.tick_format(self.y_axis.ticks);
        chart.marks.push(Mark::Group(axis_group(
            &y_scale,
            AxisOrient::Left,
            self.y_axis.ticks,
            &y_format,
            "y-axis",
        )));
        chart.marks.push(Mark::Text(TextMark {
            class: String::from("axis-title y-title"),
            position: Point::new(-45.0, plot.height / 2.0),
            text: String::from("CO₂ (ppm)"),
            anchor: TextAnchor::Middle,
            font_size: 14.0,
            fill: ink,
            rotate: -90.0,
        }));
        scene.marks.push(Mark::Group(chart));

        let anchor = self.legend.anchor.value();
        let mut legend = GroupMark::new("legend").translated(anchor.x, anchor.y);
        legend.opacity = *self.legend.opacity.value();
        for (i, (core, color)) in self.legend.entries.iter().enumerate() {
            let row = i as f64 * self.config.legend_row_height;
            let mut item = GroupMark::new("legend-item").translated(0.0, row);
            item.marks.push(Mark::Circle(CircleMark {
                class: String::new(),
                center: Point::ORIGIN,
                radius: 6.0,
                fill: *color,
                stroke: None,
            }));
            item.marks.push(Mark::Text(TextMark {
                class: String::new(),
                position: Point::new(12.0, 4.0),
                text: format!("Core {core}"),
                anchor: TextAnchor::Start,
                font_size: 14.0,
                fill: Color::from_rgb8(0x33, 0x33, 0x33),
                rotate: 0.0,
            }));
            legend.marks.push(Mark::Group(item));
        }
        scene.marks.push(Mark::Group(legend));
        scene
    }

    fn line_mark(&self, line: &SeriesLine, plot: Size) -> PathMark {
        let x = LinearScale::new(line.x_domain.value().clone(), 0.0..plot.width);
        let y = LinearScale::new(line.y_domain.value().clone(), plot.height..0.0);
        let path = line_path(
            line.samples
                .iter()
                .map(|s| Point::new(x.map(s.gasage), y.map(s.co2))),
            Curve::MonotoneX,
        );
        let dash = line.entry.map(|_| {
            let length = PathMeasure::new(&path).total_length();
            Dash {
                length,
                offset: line.hidden.value() * length,
            }
        });
        PathMark {
            class: format!("core-line core-{}", line.core),
            path,
            stroke: line.color,
            stroke_width: self.config.line_width,
            dash,
        }
    }

    fn build(&mut self, now: Duration, animate: bool) {
        let plot = self.config.plot_size(self.viewport);
        let nan = f64::NAN..f64::NAN;
        self.full_extent = self.data.gas_age_extent().unwrap_or(nan.clone());
        let y_full = self.data.co2_extent().unwrap_or(nan);
        self.x_scale = LinearScale::new(self.full_extent.clone(), 0.0..plot.width);
        self.y_scale = LinearScale::new(y_full.clone(), plot.height..0.0);

        let reveal = TransitionSpec::new(self.config.entry_duration(), Easing::Linear);
        self.lines.clear();
        for (core, samples) in &self.data {
            let mut hidden = Animated::new(if animate { 1.0 } else { 0.0 });
            let entry = animate.then(|| hidden.start(0.0, now, reveal));
            self.lines.push(SeriesLine {
                core: *core,
                color: self.palette.color(*core),
                samples: samples.clone(),
                x_domain: Animated::new(self.full_extent.clone()),
                y_domain: Animated::new(y_full.clone()),
                hidden,
                entry,
            });
        }

        self.x_axis = AxisState::new(self.full_extent.clone(), self.config.initial_ticks);
        self.y_axis = AxisState::new(y_full, self.config.initial_ticks);

        let opacity = if animate {
            let mut opacity = Animated::new(0.0);
            opacity.start(
                1.0,
                now,
                TransitionSpec::new(self.config.legend_fade(), Easing::CubicInOut)
                    .with_delay(self.config.legend_fade_delay()),
            );
            opacity
        } else {
            Animated::new(1.0)
        };
        self.legend = Legend {
            entries: self.lines.iter().map(|l| (l.core, l.color)).collect(),
            position: LegendPosition::BottomRight,
            anchor: Animated::new(legend_anchor(&self.config, plot, LegendPosition::BottomRight)),
            opacity,
        };
        self.step = ZoomStep::FullView;
        self.built = true;
        log::debug!(
            "chart: built {} series over {:?} (animated: {animate})",
            self.lines.len(),
            self.full_extent
        );
    }
}

/// Legend anchor in document coordinates.
fn legend_anchor(config: &ChartConfig, plot: Size, position: LegendPosition) -> Point {
    let m = config.margins;
    let x = m.left + plot.width - config.legend_inset;
    let y = match position {
        LegendPosition::TopRight => m.top + config.legend_top,
        LegendPosition::BottomRight => m.top + plot.height - config.legend_bottom,
    };
    Point::new(x, y)
}

/// Intersects `window` with `full`, falling back to `full` when they are disjoint.
fn clamp_into(window: &Range<f64>, full: &Range<f64>) -> Range<f64> {
    let start = window.start.max(full.start);
    let end = window.end.min(full.end);
    if start <= end {
        start..end
    } else {
        full.clone()
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use icecore_series::{CoreId, Sample, SeriesGroup};
    use icecore_shape::Mark;
    use kurbo::Point;

    use super::{ZoomedChartController, clamp_into, legend_anchor};
    use crate::{ChartConfig, DrawPhase, LegendPosition, ViewportSize, ZoomStep};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn group() -> SeriesGroup {
        SeriesGroup::from_samples([
            Sample::new(CoreId(3), 0.0, 62_000.0, 230.0),
            Sample::new(CoreId(3), 0.0, 50_000.0, 200.0),
            Sample::new(CoreId(4), 0.0, 75_000.0, 260.0),
            Sample::new(CoreId(4), 0.0, 60_000.0, 215.0),
        ])
    }

    fn drawn() -> ZoomedChartController {
        let mut chart =
            ZoomedChartController::new(ChartConfig::default(), ViewportSize::new(1000.0, 500.0));
        chart.set_data(group());
        assert!(chart.on_visibility(1.0, ms(0)));
        chart.tick(ms(2000));
        assert_eq!(chart.phase(), DrawPhase::Drawn);
        chart
    }

    #[test]
    fn legend_anchors() {
        let config = ChartConfig::default();
        let plot = config.plot_size(ViewportSize::new(1000.0, 500.0));
        assert_eq!(
            legend_anchor(&config, plot, LegendPosition::TopRight),
            Point::new(60.0 + 800.0 - 120.0, 40.0 + 20.0)
        );
        assert_eq!(
            legend_anchor(&config, plot, LegendPosition::BottomRight),
            Point::new(740.0, 40.0 + 400.0 - 60.0)
        );
    }

    #[test]
    fn windows_are_clamped_into_the_extent() {
        let full = 50_000.0..75_000.0;
        assert_eq!(clamp_into(&(59_000.0..64_000.0), &full), 59_000.0..64_000.0);
        assert_eq!(clamp_into(&(40_000.0..55_000.0), &full), 50_000.0..55_000.0);
        assert_eq!(clamp_into(&(80_000.0..90_000.0), &full), full);
    }

    #[test]
    fn entry_reveals_lines_then_unlocks() {
        let mut chart =
            ZoomedChartController::new(ChartConfig::default(), ViewportSize::new(1000.0, 500.0));
        chart.set_data(group());
        assert!(!chart.on_visibility(0.5, ms(0)));
        assert!(chart.on_visibility(0.96, ms(0)));
        assert_eq!(chart.phase(), DrawPhase::Drawing);
        assert!(chart.scroll_lock().is_locked());

        chart.tick(ms(1000));
        let scene = chart.scene();
        let Some(Mark::Path(path)) = scene.find("core-3") else {
            panic!("missing core-3 line");
        };
        let dash = path.dash.expect("dashed while drawing");
        assert!((dash.offset - dash.length / 2.0).abs() < 1e-6);

        chart.tick(ms(2000));
        assert_eq!(chart.phase(), DrawPhase::Drawn);
        assert!(!chart.scroll_lock().is_locked());
        let scene = chart.scene();
        let Some(Mark::Path(path)) = scene.find("core-4") else {
            panic!("missing core-4 line");
        };
        assert!(path.dash.is_none());
    }

    #[test]
    fn legend_fades_in_after_its_delay() {
        let mut chart = drawn();
        assert_eq!(chart.legend_opacity(), 0.0);
        chart.tick(ms(3200));
        assert_eq!(chart.legend_opacity(), 0.0);
        chart.tick(ms(3800));
        assert_eq!(chart.legend_opacity(), 1.0);
    }

    #[test]
    fn zoom_stages_are_staggered() {
        let mut chart = drawn();
        let y_before = chart.y_domain();
        assert!(chart.on_scroll_step(1, ms(5000)));
        assert_eq!(chart.step(), ZoomStep::Inhale);
        assert_eq!(chart.x_domain(), 59_000.0..64_000.0);
        // Only the 62_000 and 60_000 samples are visible.
        assert_eq!(chart.y_domain(), 215.0..230.0);

        // At +100 ms x is moving and y has not started.
        chart.tick(ms(5100));
        let scene = chart.scene();
        let y_ticks = scene.find_all("tick").len();
        assert!(y_ticks > 0);
        assert_eq!(*chart.y_axis.domain.value(), y_before);
        assert_ne!(*chart.x_axis.domain.value(), chart.full_extent());

        chart.tick(ms(6400));
        assert_eq!(*chart.x_axis.domain.value(), 59_000.0..64_000.0);
        assert!(chart.y_axis.domain.is_animating());
        chart.tick(ms(6550));
        assert_eq!(*chart.y_axis.domain.value(), 215.0..230.0);
        assert!(chart.is_settled() || chart.legend.anchor.is_animating());
    }

    #[test]
    fn empty_window_keeps_y() {
        let mut chart = drawn();
        let mut config = chart.config().clone();
        config.exhale_range = [70_000.0, 74_000.0];
        chart.config = config;
        let y = chart.y_domain();
        assert!(chart.on_scroll_step(2, ms(3000)));
        assert_eq!(chart.x_domain(), 70_000.0..74_000.0);
        assert_eq!(chart.y_domain(), y);
    }

    #[test]
    fn reinitialize_after_drawn_does_not_replay() {
        let mut chart = drawn();
        assert!(chart.on_scroll_step(1, ms(2500)));
        assert!(chart.initialize(group(), ms(3000)));
        assert_eq!(chart.phase(), DrawPhase::Drawn);
        assert_eq!(chart.step(), ZoomStep::FullView);
        assert_eq!(chart.legend_opacity(), 1.0);
        let scene = chart.scene();
        for mark in scene.find_all("core-line") {
            let Mark::Path(path) = mark else { panic!("line is a path") };
            assert!(path.dash.is_none());
        }
    }

    #[test]
    fn reinitialize_without_data_keeps_the_chart() {
        let mut chart = drawn();
        let state = chart.view_state();
        let lines = chart.scene().find_all("core-line").len();
        assert_eq!(lines, 2);

        assert!(!chart.initialize(SeriesGroup::new(), ms(3000)));
        assert_eq!(chart.phase(), DrawPhase::Drawn);
        assert_eq!(chart.view_state(), state);
        assert_eq!(chart.x_domain(), 50_000.0..75_000.0);
        assert_eq!(chart.scene().find_all("core-line").len(), lines);

        // Later zooms still work against the kept data.
        assert!(chart.on_scroll_step(1, ms(3100)));
        assert_eq!(chart.y_domain(), 215.0..230.0);
    }

    #[test]
    fn resize_keeps_domains() {
        let mut chart = drawn();
        assert!(chart.on_scroll_step(1, ms(2500)));
        let state = chart.view_state();
        chart.resize(ViewportSize::new(500.0, 400.0), ms(2600));
        assert_eq!(chart.view_state(), state);
        assert_eq!(chart.scene().size.width, 400.0 + 60.0 + 40.0);
    }
}
