// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use icecore_axis::{LinearScale, extent};
use icecore_scrolly::ViewportSize;
use icecore_series::{CoreId, Sample, SeriesGroup};
use icecore_shape::{
    AxisOrient, CircleMark, Curve, GroupMark, Mark, PathMark, PathMeasure, RectMark, Scene,
    TextAnchor, TextMark, axis_group, line_path,
};
use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;

use crate::{BrushState, DepthConfig, PlayState, Readout, SelectionStats, SliderPlayback, Tooltip};

/// Slider‑driven depth profile of one core.
///
/// x maps CO₂ and y maps depth (growing downwards), each over the selected
/// core's own extent. Pointer positions passed to [`hover`](Self::hover) and
/// the brush methods are in plot coordinates.
#[derive(Debug)]
pub struct DepthExplorer {
    config: DepthConfig,
    viewport: ViewportSize,
    group: SeriesGroup,
    core: CoreId,
    samples: Vec<Sample>,
    x: LinearScale,
    y: LinearScale,
    path: BezPath,
    measure: PathMeasure,
    slider: u32,
    dot: Option<Point>,
    readout: Option<Readout>,
    playback: SliderPlayback,
    brush: BrushState,
    selection_rect: Option<Rect>,
    selection: Option<SelectionStats>,
}

impl DepthExplorer {
    /// Builds the explorer and shows the configured default core.
    #[must_use]
    pub fn new(mut group: SeriesGroup, config: DepthConfig, viewport: ViewportSize) -> Self {
        group.sort_by_depth();
        let plot = plot_size(&config, viewport);
        let path = BezPath::new();
        let mut explorer = Self {
            core: config.default_core(),
            samples: Vec::new(),
            x: LinearScale::new(f64::NAN..f64::NAN, 0.0..plot.width),
            y: LinearScale::new(f64::NAN..f64::NAN, 0.0..plot.height),
            measure: PathMeasure::new(&path),
            path,
            slider: 0,
            dot: None,
            readout: None,
            playback: SliderPlayback::new(config.play_step(), config.slider_max),
            brush: BrushState::new(Rect::from_origin_size(Point::ORIGIN, plot)),
            selection_rect: None,
            selection: None,
            group,
            config,
            viewport,
        };
        let core = explorer.core;
        if !explorer.select_core(core) {
            log::debug!("depth explorer: default core {core} has no samples");
        }
        explorer
    }

    /// Shows `core`. Unknown cores are ignored; returns `true` if shown.
    pub fn select_core(&mut self, core: CoreId) -> bool {
        let Some(samples) = self.group.get(core) else {
            return false;
        };
        self.core = core;
        self.samples = samples.to_vec();
        self.playback.reset();
        self.rescale();
        self.slider = 0;
        self.clear_selection();
        log::debug!("depth explorer: core {core}, {} samples", self.samples.len());
        true
    }

    /// Moves the slider by hand, pausing playback.
    pub fn set_slider(&mut self, value: u32) {
        self.playback.reset();
        self.slider = value.min(self.config.slider_max);
        self.update_dot();
    }

    /// Presses the play button.
    pub fn toggle_play(&mut self, now: Duration) {
        if self.playback.state().is_playing() {
            self.playback.pause();
            return;
        }
        if self.playback.play(now) {
            self.slider = 0;
            self.update_dot();
        }
        log::debug!("depth explorer: playing from {}", self.slider);
    }

    /// Advances playback.
    pub fn tick(&mut self, now: Duration) {
        let mut value = self.slider;
        if self.playback.advance(now, &mut value) {
            self.slider = value;
            self.update_dot();
        }
    }

    /// Tooltip for the sample nearest to `pointer`, if close enough.
    #[must_use]
    pub fn hover(&self, pointer: Point) -> Option<Tooltip> {
        let mut best: Option<Tooltip> = None;
        for s in &self.samples {
            let distance = pointer.distance(self.screen(s));
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Tooltip {
                    sample: *s,
                    distance,
                });
            }
        }
        best.filter(|t| t.distance <= self.config.tooltip_radius)
    }

    /// Presses the brush.
    pub fn brush_start(&mut self, pointer: Point) {
        self.brush.start(pointer);
        self.selection_rect = self.brush.rect();
    }

    /// Drags the brush.
    pub fn brush_move(&mut self, pointer: Point) {
        if let Some(rect) = self.brush.update(pointer) {
            self.selection_rect = Some(rect);
        }
    }

    /// Releases the brush and averages the samples inside it.
    ///
    /// A click without a drag, or a selection with no samples, clears the
    /// brush and restores the readout.
    pub fn brush_end(&mut self, pointer: Point) -> Option<SelectionStats> {
        let rect = self.brush.end(pointer)?;
        if rect.width() == 0.0 || rect.height() == 0.0 {
            self.clear_selection();
            return None;
        }
        let inside = self.samples.iter().filter(|s| {
            let p = self.screen(s);
            p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
        });
        match SelectionStats::from_samples(inside) {
            Some(stats) => {
                log::debug!("depth explorer: {} samples selected", stats.count);
                self.selection_rect = Some(rect);
                self.selection = Some(stats);
                Some(stats)
            }
            None => {
                self.clear_selection();
                None
            }
        }
    }

    /// Removes the brush and the selection panel, restoring the readout.
    pub fn clear_selection(&mut self) {
        self.brush.cancel();
        self.selection_rect = None;
        self.selection = None;
        self.update_dot();
    }

    /// Core shown.
    #[must_use]
    pub fn core(&self) -> CoreId {
        self.core
    }

    /// Slider value.
    #[must_use]
    pub fn slider(&self) -> u32 {
        self.slider
    }

    /// Slider dot position, in plot coordinates.
    #[must_use]
    pub fn dot(&self) -> Option<Point> {
        self.dot
    }

    /// Sample under the dot.
    #[must_use]
    pub fn readout(&self) -> Option<Readout> {
        self.readout
    }

    /// Brush statistics, while a selection is shown.
    #[must_use]
    pub fn selection(&self) -> Option<SelectionStats> {
        self.selection
    }

    /// Play button state.
    #[must_use]
    pub fn play_state(&self) -> PlayState {
        self.playback.state()
    }

    /// Play button label.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        self.playback.state().label()
    }

    /// Returns `true` when the "Clear selection" button is shown.
    #[must_use]
    pub fn can_clear_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Marks of the explorer.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let plot = plot_size(&self.config, self.viewport);
        let ink = Color::from_rgb8(0, 0, 0);
        let mut scene = Scene::new(self.viewport.to_size());
        let mut g =
            GroupMark::new("depth-chart").translated(self.config.origin_x, self.config.origin_y);

        g.marks.push(Mark::Path(PathMark {
            class: String::from("depth-line"),
            path: self.path.clone(),
            stroke: Color::from_rgb8(0x1f, 0x77, 0xb4),
            stroke_width: 2.0,
            dash: None,
        }));
        if let Some(center) = self.dot {
            g.marks.push(Mark::Circle(CircleMark {
                class: String::from("depth-dot"),
                center,
                radius: self.config.dot_radius,
                fill: ink,
                stroke: None,
            }));
        }

        let ticks = self.config.tick_count;
        g.marks.push(Mark::Group(
            axis_group(
                &self.x,
                AxisOrient::Bottom,
                ticks,
                &self.x.tick_format(ticks),
                "x-axis",
            )
            .translated(0.0, plot.height),
        ));
        g.marks.push(Mark::Group(axis_group(
            &self.y,
            AxisOrient::Left,
            ticks,
            &self.y.tick_format(ticks),
            "y-axis",
        )));
        g.marks.push(Mark::Text(TextMark {
            class: String::from("x-label"),
            position: Point::new(plot.width / 2.0, plot.height + 45.0),
            text: String::from("CO₂ (ppm)"),
            anchor: TextAnchor::Middle,
            font_size: 14.0,
            fill: ink,
            rotate: 0.0,
        }));
        g.marks.push(Mark::Text(TextMark {
            class: String::from("y-label"),
            position: Point::new(-45.0, plot.height / 2.0),
            text: String::from("Depth (m)"),
            anchor: TextAnchor::Middle,
            font_size: 14.0,
            fill: ink,
            rotate: -90.0,
        }));
        if let Some(rect) = self.selection_rect {
            g.marks.push(Mark::Rect(RectMark {
                class: String::from("selection-rect"),
                rect,
                fill: Color::from_rgba8(0, 120, 255, 38),
                stroke: Some((Color::from_rgba8(0, 120, 255, 128), 1.0)),
            }));
        }
        scene.marks.push(Mark::Group(g));
        scene
    }

    fn screen(&self, s: &Sample) -> Point {
        Point::new(self.x.map(s.co2), self.y.map(s.depth))
    }

    fn rescale(&mut self) {
        if let Some(co2) = extent(self.samples.iter().map(|s| s.co2)) {
            self.x.set_domain(co2);
        }
        if let Some(depth) = extent(self.samples.iter().map(|s| s.depth)) {
            self.y.set_domain(depth);
        }
        self.path = line_path(
            self.samples.iter().map(|s| self.screen(s)),
            Curve::MonotoneY,
        );
        self.measure = PathMeasure::new(&self.path);
    }

    fn update_dot(&mut self) {
        let total = self.measure.total_length();
        let pos = f64::from(self.slider) / f64::from(self.config.slider_max.max(1)) * total;
        self.dot = self.measure.point_at_length(pos);
        self.readout = readout_index(pos, total, self.samples.len())
            .and_then(|i| self.samples.get(i))
            .map(|s| Readout { sample: *s });
    }
}

fn plot_size(config: &DepthConfig, viewport: ViewportSize) -> Size {
    Size::new(
        (viewport.width - config.inset_x).max(0.0),
        (viewport.height - config.inset_y).max(0.0),
    )
}

/// Index of the sample shown for a dot `pos` along a line of length `total`.
fn readout_index(pos: f64, total: f64, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    if total.is_nan() || total <= 0.0 {
        return Some(0);
    }
    let fraction = (pos / total).clamp(0.0, 1.0);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "floor of a value in [0, len - 1]"
    )]
    let index = (fraction * last as f64).floor() as usize;
    Some(index.min(last))
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use icecore_scrolly::ViewportSize;
    use icecore_series::{CoreId, Sample, SeriesGroup};
    use icecore_shape::Mark;
    use kurbo::Point;

    use super::{DepthExplorer, readout_index};
    use crate::{DepthConfig, PlayState};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Core 3: a straight diagonal profile, depth 0..=100 m, CO₂ 200..=210.
    /// Core 4: two samples.
    fn group() -> SeriesGroup {
        let mut samples: Vec<Sample> = (0..=10_u32)
            .rev()
            .map(|i| {
                Sample::new(
                    CoreId(3),
                    f64::from(i) * 10.0,
                    50_000.0 + f64::from(i) * 1000.0,
                    200.0 + f64::from(i),
                )
            })
            .collect();
        samples.push(Sample::new(CoreId(4), 5.0, 60_000.0, 250.0));
        samples.push(Sample::new(CoreId(4), 1.0, 59_000.0, 240.0));
        SeriesGroup::from_samples(samples)
    }

    fn explorer() -> DepthExplorer {
        // Plot is 400 x 300.
        DepthExplorer::new(group(), DepthConfig::default(), ViewportSize::new(520.0, 380.0))
    }

    #[test]
    fn readout_index_floors_over_samples() {
        assert_eq!(readout_index(0.0, 100.0, 11), Some(0));
        assert_eq!(readout_index(55.0, 100.0, 11), Some(5));
        assert_eq!(readout_index(100.0, 100.0, 11), Some(10));
        assert_eq!(readout_index(0.0, 0.0, 1), Some(0));
        assert_eq!(readout_index(3.0, 10.0, 0), None);
    }

    #[test]
    fn starts_on_the_default_core_at_the_top() {
        let e = explorer();
        assert_eq!(e.core(), CoreId(3));
        assert_eq!(e.slider(), 0);
        let dot = e.dot().unwrap();
        assert!((dot.x - 0.0).abs() < 1e-9 && (dot.y - 0.0).abs() < 1e-9);
        assert_eq!(e.readout().unwrap().depth(), "0.0");
        assert_eq!(e.button_label(), "Play");
    }

    #[test]
    fn slider_walks_the_profile() {
        let mut e = explorer();
        e.set_slider(100);
        let dot = e.dot().unwrap();
        assert!((dot.x - 400.0).abs() < 1e-3);
        assert!((dot.y - 300.0).abs() < 1e-3);
        assert_eq!(e.readout().unwrap().sample.depth, 100.0);
        e.set_slider(500);
        assert_eq!(e.slider(), 100);
    }

    #[test]
    fn unknown_core_is_ignored() {
        let mut e = explorer();
        e.set_slider(40);
        assert!(!e.select_core(CoreId(9)));
        assert_eq!(e.core(), CoreId(3));
        assert_eq!(e.slider(), 40);
        assert!(e.select_core(CoreId(4)));
        assert_eq!(e.slider(), 0);
        assert_eq!(e.readout().unwrap().sample.depth, 1.0);
    }

    #[test]
    fn playback_runs_to_replay_and_restarts() {
        let mut e = explorer();
        e.set_slider(98);
        e.toggle_play(ms(0));
        assert_eq!(e.button_label(), "Pause");
        e.tick(ms(100));
        assert_eq!(e.slider(), 100);
        e.tick(ms(150));
        assert_eq!(e.play_state(), PlayState::Finished);
        assert_eq!(e.button_label(), "Replay");

        e.toggle_play(ms(200));
        assert_eq!(e.slider(), 0);
        e.tick(ms(250));
        assert_eq!(e.slider(), 1);
        // Pause, then moving the slider keeps it paused.
        e.toggle_play(ms(260));
        assert_eq!(e.button_label(), "Play");
        e.set_slider(30);
        e.tick(ms(1000));
        assert_eq!(e.slider(), 30);
    }

    #[test]
    fn hover_needs_to_be_close() {
        let e = explorer();
        // Depth 50 sits at y = 150, CO₂ 205 at x = 200.
        let near = e.hover(Point::new(210.0, 150.0)).unwrap();
        assert_eq!(near.sample.depth, 50.0);
        assert_eq!(near.lines()[0], "Depth: 50.0 m");
        assert!(e.hover(Point::new(200.0, 10.0 + 150.0 + 26.0)).is_none());
    }

    #[test]
    fn brush_averages_the_selected_samples() {
        let mut e = explorer();
        e.brush_start(Point::new(-50.0, 100.0));
        e.brush_move(Point::new(500.0, 160.0));
        // Samples at depth 40 and 50 (y = 120, 150) are inside.
        let stats = e.brush_end(Point::new(500.0, 160.0)).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean_depth, 45.0);
        assert!(e.can_clear_selection());
        let scene = e.scene();
        let Some(Mark::Rect(rect)) = scene.find("selection-rect") else {
            panic!("selection rect is drawn");
        };
        assert_eq!(rect.rect.x0, 0.0);
        assert_eq!(rect.rect.x1, 400.0);

        e.clear_selection();
        assert!(e.selection().is_none());
        assert!(e.scene().find("selection-rect").is_none());
        assert!(e.readout().is_some());
    }

    #[test]
    fn empty_brush_clears() {
        let mut e = explorer();
        e.brush_start(Point::new(0.0, 5.0));
        assert!(e.brush_end(Point::new(10.0, 10.0)).is_none());
        assert!(!e.can_clear_selection());
        assert!(e.scene().find("selection-rect").is_none());
    }

    #[test]
    fn click_on_a_sample_is_not_a_selection() {
        let mut e = explorer();
        // The depth 50 sample of core 3 sits at (200, 150).
        assert!(e.hover(Point::new(200.0, 150.0)).is_some());
        e.brush_start(Point::new(200.0, 150.0));
        assert!(e.brush_end(Point::new(200.0, 150.0)).is_none());
        assert!(e.selection().is_none());
        assert!(!e.can_clear_selection());
        assert!(e.scene().find("selection-rect").is_none());
        assert!(e.readout().is_some());

        // A flat drag across the same row selects nothing either.
        e.brush_start(Point::new(0.0, 150.0));
        assert!(e.brush_end(Point::new(400.0, 150.0)).is_none());
        assert!(e.selection().is_none());
    }
}
