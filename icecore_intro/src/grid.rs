// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icecore_axis::TickFormat;
use icecore_scrolly::ViewportSize;
use kurbo::Point;

use crate::IntroConfig;

/// Layout of the intro's dot grid, with its trapped block and single CO₂ dot.
#[derive(Clone, Debug, PartialEq)]
pub struct DotGrid {
    total: usize,
    cols: usize,
    rows: usize,
    gap: f64,
    dot_size: f64,
    trapped_cols: usize,
    trapped_rows: usize,
    co2_index: usize,
}

impl DotGrid {
    /// Lays out `config.total_dots` dots to fill `viewport`.
    ///
    /// The column count follows the viewport's aspect ratio so dots stay
    /// square; the dot size is the largest that fits both directions.
    #[must_use]
    pub fn layout(config: &IntroConfig, viewport: ViewportSize) -> Self {
        let total = config.total_dots;
        let aspect = if viewport.height > 0.0 {
            viewport.width / viewport.height
        } else {
            1.0
        };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "column count of a screen-sized grid"
        )]
        let cols = ((total as f64 * aspect).sqrt().round() as usize).max(1);
        let rows = total.div_ceil(cols);
        let gap = config.gap;
        let dot_w = (viewport.width - gap * cols as f64) / cols as f64;
        let dot_h = if rows == 0 {
            dot_w
        } else {
            (viewport.height - gap * rows as f64) / rows as f64
        };
        let dot_size = dot_w.min(dot_h).max(0.0);

        #[expect(
            clippy::cast_possible_truncation,
            reason = "a fraction of the column count"
        )]
        let trapped_cols = (cols as f64 * config.trapped_fraction).floor() as usize;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a fraction of the row count"
        )]
        let trapped_rows = (rows as f64 * config.trapped_fraction).floor() as usize;
        let co2_index = (trapped_rows / 2) * cols + trapped_cols / 2;

        log::debug!("intro grid: {cols} x {rows} dots of {dot_size:.2} px");
        Self {
            total,
            cols,
            rows,
            gap,
            dot_size,
            trapped_cols,
            trapped_rows,
            co2_index,
        }
    }

    /// Number of dots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows (the last may be partial).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Side of one dot, in pixels.
    #[must_use]
    pub fn dot_size(&self) -> f64 {
        self.dot_size
    }

    /// Size of the trapped block, in dots: `(cols, rows)`.
    #[must_use]
    pub fn trapped_block(&self) -> (usize, usize) {
        (self.trapped_cols, self.trapped_rows)
    }

    /// Number of trapped dots.
    #[must_use]
    pub fn trapped_count(&self) -> usize {
        (0..self.total).filter(|&i| self.is_trapped(i)).count()
    }

    /// Returns `true` if dot `index` lies in the trapped block.
    #[must_use]
    pub fn is_trapped(&self, index: usize) -> bool {
        index < self.total
            && index / self.cols < self.trapped_rows
            && index % self.cols < self.trapped_cols
    }

    /// Index of the single CO₂ dot, at the center cell of the trapped block.
    #[must_use]
    pub fn co2_index(&self) -> usize {
        self.co2_index
    }

    /// Center of dot `index`.
    #[must_use]
    pub fn dot_center(&self, index: usize) -> Point {
        let pitch = self.dot_size + self.gap;
        let col = (index % self.cols) as f64;
        let row = (index / self.cols) as f64;
        Point::new(
            col * pitch + self.dot_size / 2.0,
            row * pitch + self.dot_size / 2.0,
        )
    }

    /// Caption stating the dot count.
    #[must_use]
    pub fn count_text(&self) -> String {
        format!(
            "This screen shows {} gray dots—each representing a share of Earth’s atmosphere.",
            TickFormat::for_step(1.0).format(self.total as f64)
        )
    }
}

#[cfg(test)]
mod tests {
    use icecore_scrolly::ViewportSize;

    use super::DotGrid;
    use crate::IntroConfig;

    #[test]
    fn widescreen_layout() {
        let grid = DotGrid::layout(&IntroConfig::default(), ViewportSize::new(1600.0, 900.0));
        assert_eq!(grid.cols(), 180);
        assert_eq!(grid.rows(), 102);
        assert_eq!(grid.trapped_block(), (27, 15));
        assert_eq!(grid.trapped_count(), 27 * 15);
        assert_eq!(grid.co2_index(), 7 * 180 + 13);
        assert!(grid.is_trapped(grid.co2_index()));
        assert!(!grid.is_trapped(27));
        assert!(!grid.is_trapped(15 * 180));
        let expected = (900.0 - 2.0 * 102.0) / 102.0;
        assert!((grid.dot_size() - expected).abs() < 1e-12);
    }

    #[test]
    fn dot_centers_step_by_size_plus_gap() {
        let grid = DotGrid::layout(&IntroConfig::default(), ViewportSize::new(1600.0, 900.0));
        let a = grid.dot_center(0);
        let b = grid.dot_center(181);
        let pitch = grid.dot_size() + 2.0;
        assert!((b.x - a.x - pitch).abs() < 1e-9);
        assert!((b.y - a.y - pitch).abs() < 1e-9);
    }

    #[test]
    fn count_text_is_grouped() {
        let grid = DotGrid::layout(&IntroConfig::default(), ViewportSize::new(800.0, 800.0));
        assert!(grid.count_text().starts_with("This screen shows 18,240 gray dots"));
    }
}
