// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Range;
use std::path::Path;

use icecore_axis::extent;

use crate::load::load_samples;
use crate::{CoreId, LoadError, Sample};

/// Samples grouped per core, cores in ascending id order.
///
/// Within a core, samples keep their source order until
/// [`SeriesGroup::sort_by_gas_age`] or [`SeriesGroup::sort_by_depth`] is
/// called; ordering is a rendering concern.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesGroup {
    series: BTreeMap<CoreId, Vec<Sample>>,
}

impl SeriesGroup {
    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `samples` by their core.
    #[must_use]
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        let mut series: BTreeMap<CoreId, Vec<Sample>> = BTreeMap::new();
        for s in samples {
            series.entry(s.core).or_default().push(s);
        }
        Self { series }
    }

    /// Loads and groups a CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let samples = load_samples(reader)?;
        let group = Self::from_samples(samples);
        log::info!(
            "loaded {} samples across {} cores",
            group.sample_count(),
            group.len()
        );
        Ok(group)
    }

    /// Loads and groups a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of cores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` when no core has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples across all cores.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Core ids in ascending order.
    pub fn cores(&self) -> impl Iterator<Item = CoreId> + '_ {
        self.series.keys().copied()
    }

    /// Samples of one core.
    #[must_use]
    pub fn get(&self, core: CoreId) -> Option<&[Sample]> {
        self.series.get(&core).map(Vec::as_slice)
    }

    /// `(core, samples)` pairs in ascending core order.
    pub fn iter(&self) -> btree_map::Iter<'_, CoreId, Vec<Sample>> {
        self.series.iter()
    }

    /// Every sample of every core.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.series.values().flatten()
    }

    /// Sorts every core by ascending gas age.
    pub fn sort_by_gas_age(&mut self) {
        for values in self.series.values_mut() {
            values.sort_by(|a, b| a.gasage.total_cmp(&b.gasage));
        }
    }

    /// Sorts every core by ascending depth.
    pub fn sort_by_depth(&mut self) {
        for values in self.series.values_mut() {
            values.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        }
    }

    /// Global gas‑age extent across all cores.
    #[must_use]
    pub fn gas_age_extent(&self) -> Option<Range<f64>> {
        extent(self.samples().map(|s| s.gasage))
    }

    /// Global CO₂ extent across all cores.
    #[must_use]
    pub fn co2_extent(&self) -> Option<Range<f64>> {
        extent(self.samples().map(|s| s.co2))
    }

    /// CO₂ extent over samples whose gas age lies in `window` (inclusive).
    #[must_use]
    pub fn co2_extent_within(&self, window: &Range<f64>) -> Option<Range<f64>> {
        extent(
            self.samples()
                .filter(|s| s.gasage >= window.start && s.gasage <= window.end)
                .map(|s| s.co2),
        )
    }
}

impl<'a> IntoIterator for &'a SeriesGroup {
    type Item = (&'a CoreId, &'a Vec<Sample>);
    type IntoIter = btree_map::Iter<'a, CoreId, Vec<Sample>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
