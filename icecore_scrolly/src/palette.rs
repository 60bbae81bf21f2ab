// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icecore_series::CoreId;
use peniko::Color;

/// Ordinal color scale keyed by core id.
///
/// Cores 3 and 4 are pre‑registered. Unseen cores are appended in the order
/// they are asked for and cycle through the range.
#[derive(Clone, Debug)]
pub struct CorePalette {
    domain: Vec<CoreId>,
    range: Vec<Color>,
}

impl Default for CorePalette {
    fn default() -> Self {
        Self::new(
            vec![CoreId(3), CoreId(4)],
            vec![
                Color::from_rgb8(0x1f, 0x77, 0xb4),
                Color::from_rgb8(0xff, 0x7f, 0x0e),
            ],
        )
    }
}

impl CorePalette {
    /// Creates a palette from an initial domain and a color range.
    #[must_use]
    pub fn new(domain: Vec<CoreId>, range: Vec<Color>) -> Self {
        Self { domain, range }
    }

    /// Color for `core`, registering it if unseen.
    pub fn color(&mut self, core: CoreId) -> Color {
        let index = match self.domain.iter().position(|c| *c == core) {
            Some(i) => i,
            None => {
                self.domain.push(core);
                self.domain.len() - 1
            }
        };
        if self.range.is_empty() {
            return Color::from_rgb8(0, 0, 0);
        }
        self.range[index % self.range.len()]
    }
}

#[cfg(test)]
mod tests {
    use icecore_series::CoreId;

    use super::CorePalette;

    #[test]
    fn known_cores_have_fixed_colors_and_unknown_ones_cycle() {
        let mut p = CorePalette::default();
        let four = p.color(CoreId(4)).to_rgba8();
        assert_eq!((four.r, four.g, four.b), (0xff, 0x7f, 0x0e));
        let three = p.color(CoreId(3)).to_rgba8();
        assert_eq!((three.r, three.g, three.b), (0x1f, 0x77, 0xb4));
        // Third registered core wraps to the first color.
        assert_eq!(p.color(CoreId(9)).to_rgba8(), three);
    }
}
