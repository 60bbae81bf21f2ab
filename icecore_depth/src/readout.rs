// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icecore_axis::TickFormat;
use icecore_series::Sample;
use kurbo::Point;

/// Formats a number with thousands separators and up to three decimals.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    if value.fract() == 0.0 || !value.is_finite() {
        return TickFormat::for_step(1.0).format(value);
    }
    let s = TickFormat::for_step(0.001).format(value);
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// The sample under the slider dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    /// Sample shown.
    pub sample: Sample,
}

impl Readout {
    /// Depth in metres, one decimal.
    #[must_use]
    pub fn depth(&self) -> String {
        format!("{:.1}", self.sample.depth)
    }

    /// CO₂ in ppm, one decimal.
    #[must_use]
    pub fn co2(&self) -> String {
        format!("{:.1}", self.sample.co2)
    }

    /// Gas age in years, grouped.
    #[must_use]
    pub fn gas_age(&self) -> String {
        format_grouped(self.sample.gasage)
    }
}

/// Hover details for the sample nearest to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip {
    /// Sample under the pointer.
    pub sample: Sample,
    /// Distance from the pointer to the sample, in pixels.
    pub distance: f64,
}

impl Tooltip {
    /// The three lines shown in the tooltip.
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Depth: {:.1} m", self.sample.depth),
            format!("CO₂: {:.1} ppm", self.sample.co2),
            format!("Gas Age: {} yrs", format_grouped(self.sample.gasage)),
        ]
    }

    /// Top‑left corner of the tooltip box for a pointer at `client`.
    ///
    /// The box sits below right of the pointer, and flips to the left when it
    /// would overflow the viewport.
    #[must_use]
    pub fn placement(client: Point, tooltip_width: f64, viewport_width: f64) -> Point {
        let x = if client.x + tooltip_width + 40.0 > viewport_width {
            client.x - tooltip_width - 15.0
        } else {
            client.x + 15.0
        };
        Point::new(x, client.y + 15.0)
    }
}

/// Means over the brushed samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionStats {
    /// Number of samples inside the brush.
    pub count: usize,
    /// Mean depth.
    pub mean_depth: f64,
    /// Mean CO₂.
    pub mean_co2: f64,
    /// Mean gas age.
    pub mean_gasage: f64,
}

impl SelectionStats {
    /// Means over `samples`, or `None` when there are none.
    #[must_use]
    pub fn from_samples<'a, I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let mut count = 0_usize;
        let (mut depth, mut co2, mut gasage) = (0.0, 0.0, 0.0);
        for s in samples {
            count += 1;
            depth += s.depth;
            co2 += s.co2;
            gasage += s.gasage;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self {
            count,
            mean_depth: depth / n,
            mean_co2: co2 / n,
            mean_gasage: gasage / n,
        })
    }

    /// The lines of the selection panel.
    #[must_use]
    pub fn lines(&self) -> [String; 4] {
        [
            String::from("Selection Mean Values:"),
            format!("Mean Depth: {:.1} m", self.mean_depth),
            format!("Mean CO₂: {:.1} ppm", self.mean_co2),
            format!(
                "Mean Gas Age: {} years",
                format_grouped(self.mean_gasage.round())
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use icecore_series::{CoreId, Sample};
    use kurbo::Point;

    use super::{SelectionStats, Tooltip, format_grouped};

    #[test]
    fn grouped_numbers() {
        assert_eq!(format_grouped(61_234.0), "61,234");
        assert_eq!(format_grouped(1_234.5), "1,234.5");
        assert_eq!(format_grouped(0.125), "0.125");
    }

    #[test]
    fn selection_means() {
        let a = Sample::new(CoreId(3), 100.0, 60_000.0, 200.0);
        let b = Sample::new(CoreId(3), 102.0, 61_001.0, 210.0);
        let stats = SelectionStats::from_samples([&a, &b]).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean_depth, 101.0);
        assert_eq!(stats.mean_co2, 205.0);
        assert_eq!(stats.lines()[3], "Mean Gas Age: 60,501 years");
        assert!(SelectionStats::from_samples([]).is_none());
    }

    #[test]
    fn tooltip_flips_near_the_right_edge() {
        assert_eq!(
            Tooltip::placement(Point::new(100.0, 50.0), 150.0, 1000.0),
            Point::new(115.0, 65.0)
        );
        assert_eq!(
            Tooltip::placement(Point::new(900.0, 50.0), 150.0, 1000.0),
            Point::new(735.0, 65.0)
        );
    }
}
