// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

use icecore_series::CoreId;

use crate::{ScrollLock, ScrollLockGuard};

/// Progress of the one‑time entry animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawPhase {
    /// Nothing drawn yet; the gate is armed.
    #[default]
    NotDrawn,
    /// Entry transitions are running and the page is scroll‑locked.
    Drawing,
    /// Every line has been revealed. Terminal for the gate.
    Drawn,
}

/// Lets the entry animation run at most once.
#[derive(Debug, Default)]
pub struct DrawGate {
    phase: DrawPhase,
    outstanding: BTreeSet<CoreId>,
    guard: Option<ScrollLockGuard>,
}

impl DrawGate {
    /// Creates an armed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    /// Cores whose entry transition has not completed yet.
    pub fn outstanding(&self) -> impl Iterator<Item = CoreId> + '_ {
        self.outstanding.iter().copied()
    }

    /// Starts drawing the given cores.
    ///
    /// Succeeds only from [`DrawPhase::NotDrawn`] with at least one core, and
    /// then holds `lock` until every core has finished. With no cores the gate
    /// stays armed for a later attempt.
    pub fn try_begin<I>(&mut self, cores: I, lock: &ScrollLock) -> bool
    where
        I: IntoIterator<Item = CoreId>,
    {
        if self.phase != DrawPhase::NotDrawn {
            log::debug!("draw gate: ignoring trigger while {:?}", self.phase);
            return false;
        }
        let cores: BTreeSet<CoreId> = cores.into_iter().collect();
        if cores.is_empty() {
            log::debug!("draw gate: no data yet, staying armed");
            return false;
        }
        log::debug!("draw gate: drawing {} series", cores.len());
        self.outstanding = cores;
        self.guard = Some(lock.acquire());
        self.phase = DrawPhase::Drawing;
        true
    }

    /// Records that `core` finished its entry transition.
    ///
    /// Returns `true` when this completed the draw.
    pub fn finish_series(&mut self, core: CoreId) -> bool {
        if self.phase != DrawPhase::Drawing || !self.outstanding.remove(&core) {
            return false;
        }
        if !self.outstanding.is_empty() {
            return false;
        }
        self.phase = DrawPhase::Drawn;
        self.guard = None;
        log::debug!("draw gate: drawn, scroll lock released");
        true
    }
}

/// Turns visible‑fraction reports into entry triggers.
///
/// Fires on the edge where the fraction first reaches the threshold, and
/// re‑arms once the target drops below it again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityObserver {
    threshold: f64,
    visible: bool,
}

impl VisibilityObserver {
    /// Creates an observer with the given threshold in `[0, 1]`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Threshold fraction.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reports the currently visible fraction. Returns `true` on a rising edge.
    pub fn observe(&mut self, fraction: f64) -> bool {
        let visible = fraction >= self.threshold;
        let rising = visible && !self.visible;
        self.visible = visible;
        rising
    }
}
