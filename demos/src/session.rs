// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted walk through the whole page on a virtual clock.

use std::fs::File;
use std::io::BufReader;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::Duration;

use icecore_depth::DepthExplorer;
use icecore_intro::IntroStory;
use icecore_modern::ModernRecord;
use icecore_scrolly::{ScrollLock, StepScroller, ZoomStep, ZoomedChartController};
use icecore_series::{AnnualMean, SeriesGroup, load_annual_means};
use icecore_shape::{Scene, to_svg};
use kurbo::Point;

use crate::{DemoError, PageConfig};

/// One animation frame at 60 Hz.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Longest a single scripted wait may run.
const WAIT_LIMIT: Duration = Duration::from_secs(20);

/// Virtual frame clock.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    now: Duration,
    frame: Duration,
}

impl FrameClock {
    /// A clock at zero stepping by `frame`.
    #[must_use]
    pub fn new(frame: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame,
        }
    }

    /// Current time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves one frame ahead and returns the new time.
    pub fn advance(&mut self) -> Duration {
        self.now += self.frame;
        self.now
    }

    /// Calls `frame` once per frame until it returns `false` or `limit`
    /// elapses. Returns the number of frames run.
    pub fn run_while(&mut self, limit: Duration, mut frame: impl FnMut(Duration) -> bool) -> usize {
        let end = self.now + limit;
        let mut frames = 0;
        while self.now < end {
            frames += 1;
            if !frame(self.advance()) {
                break;
            }
        }
        frames
    }
}

/// SVG files written during a run.
#[derive(Debug)]
struct Snapshots {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl Snapshots {
    fn new(dir: &Path) -> Result<Self, DemoError> {
        std::fs::create_dir_all(dir).map_err(|source| DemoError::Write {
            path: dir.to_owned(),
            source,
        })?;
        Ok(Self {
            dir: dir.to_owned(),
            written: Vec::new(),
        })
    }

    fn write(&mut self, name: &str, scene: &Scene) -> Result<(), DemoError> {
        let path = self.dir.join(name);
        std::fs::write(&path, to_svg(scene)).map_err(|source| DemoError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Loads the ice‑core samples.
pub fn load_group(path: &Path) -> Result<SeriesGroup, DemoError> {
    Ok(SeriesGroup::from_csv_path(path)?)
}

/// Loads the modern record's yearly means.
pub fn load_modern(path: &Path) -> Result<Vec<AnnualMean>, DemoError> {
    let file = File::open(path).map_err(icecore_series::LoadError::from)?;
    Ok(load_annual_means(BufReader::new(file))?)
}

/// Document positions of the chart's step elements: one viewport tall each,
/// stacked below the chart.
#[must_use]
pub fn step_layout(count: usize, viewport_height: f64) -> Vec<Range<f64>> {
    (0..count)
        .map(|i| {
            let top = viewport_height * (1 + i) as f64;
            top..top + viewport_height
        })
        .collect()
}

/// Plays the page from the intro to the modern record, writing an SVG
/// snapshot after each beat. Returns the files written.
///
/// Missing data sources are logged and drawn as empty charts.
pub fn run(config: &PageConfig) -> Result<Vec<PathBuf>, DemoError> {
    let group = load_group(&config.data.ice_core_csv).unwrap_or_else(|err| {
        log::error!("{err}; continuing without ice-core samples");
        SeriesGroup::new()
    });
    let yearly = load_modern(&config.data.modern_csv).unwrap_or_else(|err| {
        log::error!("{err}; continuing without the modern record");
        Vec::new()
    });

    let mut out = Snapshots::new(&config.output_dir)?;
    let mut clock = FrameClock::new(FRAME);
    let lock = ScrollLock::new();
    let viewport = config.viewport;

    // Intro: click through the slides, then let the floating dot land.
    let mut intro = IntroStory::new(config.intro.clone(), viewport, &lock);
    out.write("intro-0.svg", &intro.scene())?;
    while intro.step() + 2 < intro.slide_count() {
        intro.next(clock.now());
    }
    out.write(&format!("intro-{}.svg", intro.step()), &intro.scene())?;
    intro.next(clock.now());
    clock.run_while(WAIT_LIMIT, |now| intro.tick(now));
    out.write(&format!("intro-{}.svg", intro.step()), &intro.scene())?;

    // Zoomed chart: scroll it into view, then through each step.
    let h = viewport.height;
    let steps = step_layout(ZoomStep::ALL.len(), h);
    let mut scroller = StepScroller::setup(config.scroller.clone(), steps.clone(), h)
        .with_scroll_lock(lock.clone());
    let mut chart = ZoomedChartController::new(config.chart.clone(), viewport)
        .with_scroll_lock(lock.clone());
    chart.set_data(group.clone());
    chart.on_visibility(1.0, clock.now());
    // Scrolling while the entry plays is dropped by the lock.
    let early = scroller.on_scroll(steps[0].start);
    log::debug!("scroll during the entry: {early:?}");
    clock.run_while(WAIT_LIMIT, |now| {
        chart.tick(now);
        !chart.is_settled()
    });
    log::info!("chart {:?}, scroll locked: {}", chart.phase(), lock.is_locked());
    out.write("chart-drawn.svg", &chart.scene())?;

    let offset = scroller.config().offset * h;
    for (i, step) in steps.iter().enumerate() {
        let scroll_y = (step.start + step.end) / 2.0 - offset;
        if let Some(enter) = scroller.on_scroll(scroll_y) {
            chart.on_scroll_step(enter.index, clock.now());
        }
        clock.run_while(WAIT_LIMIT, |now| {
            chart.tick(now);
            !chart.is_settled()
        });
        let x = chart.x_domain();
        log::info!(
            "step {i} ({:?}): gas age {:.0}..{:.0}",
            chart.step(),
            x.start,
            x.end
        );
        out.write(&format!("chart-step-{i}.svg"), &chart.scene())?;
    }

    // Depth explorer: play the slider through, then brush the middle.
    let mut depth = DepthExplorer::new(group, config.depth.clone(), viewport);
    depth.toggle_play(clock.now());
    clock.run_while(WAIT_LIMIT, |now| {
        depth.tick(now);
        depth.play_state().is_playing()
    });
    out.write("depth-played.svg", &depth.scene())?;
    let w = viewport.width - config.depth.inset_x;
    let dh = viewport.height - config.depth.inset_y;
    depth.brush_start(Point::new(w * 0.25, dh * 0.25));
    depth.brush_move(Point::new(w * 0.6, dh * 0.5));
    match depth.brush_end(Point::new(w * 0.75, dh * 0.75)) {
        Some(stats) => log::info!("{}", stats.lines().join(" ")),
        None => log::info!("brush selected no samples"),
    }
    out.write("depth-selection.svg", &depth.scene())?;

    // Modern record.
    let mut modern = ModernRecord::new(yearly, config.modern.clone());
    if modern.play(clock.now()) {
        clock.run_while(WAIT_LIMIT, |now| modern.tick(now));
        log::info!("{}", modern.captions()[0]);
    }
    out.write("modern.svg", &modern.scene())?;

    Ok(out.written)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{FrameClock, step_layout};

    #[test]
    fn clock_stops_when_asked() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        let frames = clock.run_while(Duration::from_secs(1), |now| now < Duration::from_millis(50));
        assert_eq!(frames, 5);
        assert_eq!(clock.now(), Duration::from_millis(50));
    }

    #[test]
    fn clock_gives_up_at_the_limit() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        let frames = clock.run_while(Duration::from_millis(100), |_| true);
        assert_eq!(frames, 10);
    }

    #[test]
    fn steps_stack_below_the_chart() {
        assert_eq!(step_layout(2, 800.0), vec![800.0..1600.0, 1600.0..2400.0]);
    }
}
