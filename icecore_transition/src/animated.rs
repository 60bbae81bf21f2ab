// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::{Easing, Interpolate};

/// Timing of a transition: optional delay, duration and easing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionSpec {
    /// Time between scheduling and the start of motion.
    pub delay: Duration,
    /// Length of the motion.
    pub duration: Duration,
    /// Easing applied to linear progress.
    pub easing: Easing,
}

impl TransitionSpec {
    /// Creates a spec without delay.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Returns a copy with the given delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Identifies one scheduled transition, unique per [`Animated`] channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(pub u64);

/// A single scheduled motion from one value to another.
///
/// `from` is captured when motion begins (after the delay), not when the
/// transition is scheduled.
#[derive(Clone, Debug)]
pub struct Transition<V> {
    id: TransitionId,
    from: Option<V>,
    to: V,
    begin: Duration,
    spec: TransitionSpec,
}

impl<V: Interpolate> Transition<V> {
    /// Identifier assigned when the transition was scheduled.
    #[must_use]
    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// Value the transition ends at.
    #[must_use]
    pub fn to(&self) -> &V {
        &self.to
    }

    /// Time at which motion begins (scheduling time plus delay).
    #[must_use]
    pub fn begin(&self) -> Duration {
        self.begin
    }

    /// Time at which motion ends.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.begin + self.spec.duration
    }

    /// Eased progress at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if now <= self.begin {
            return self.spec.easing.apply(0.0);
        }
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = (now - self.begin).as_secs_f64();
        self.spec
            .easing
            .apply(elapsed / self.spec.duration.as_secs_f64())
    }

    /// Returns `true` once `now` has reached the end of the motion.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }

    fn sample(&self, now: Duration, fallback: &V) -> V {
        let from = self.from.as_ref().unwrap_or(fallback);
        from.interpolate(&self.to, self.progress(now))
    }
}

/// An animatable channel: a displayed value with at most one active transition.
#[derive(Clone, Debug)]
pub struct Animated<V> {
    value: V,
    active: Option<Transition<V>>,
    pending: Option<Transition<V>>,
    next_id: u64,
}

impl<V: Interpolate> Animated<V> {
    /// Creates a channel at rest at `value`.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            value,
            active: None,
            pending: None,
            next_id: 0,
        }
    }

    /// The displayed value as of the last [`Animated::tick`].
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The value the channel will settle at once all scheduled motion ends.
    #[must_use]
    pub fn target(&self) -> &V {
        self.pending
            .as_ref()
            .or(self.active.as_ref())
            .map_or(&self.value, Transition::to)
    }

    /// Returns `true` while a transition is running or waiting on its delay.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some() || self.pending.is_some()
    }

    /// The running transition, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Transition<V>> {
        self.active.as_ref()
    }

    /// Cancels all motion and jumps to `value`.
    pub fn set(&mut self, value: V) {
        self.active = None;
        self.pending = None;
        self.value = value;
    }

    /// Schedules a transition to `to`, replacing any earlier one.
    ///
    /// Without a delay the running transition is interrupted immediately and
    /// motion restarts from the displayed value. With a delay the new
    /// transition replaces any pending one and interrupts the running one when
    /// its delay elapses.
    pub fn start(&mut self, to: V, now: Duration, spec: TransitionSpec) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        let transition = Transition {
            id,
            from: None,
            to,
            begin: now + spec.delay,
            spec,
        };
        if spec.delay.is_zero() {
            self.sync(now);
            self.pending = None;
            self.begin(transition);
        } else {
            self.pending = Some(transition);
        }
        id
    }

    /// Advances the channel to `now`.
    ///
    /// Returns the id of a transition that ran to completion during this
    /// call. Interrupted transitions are never reported.
    pub fn tick(&mut self, now: Duration) -> Option<TransitionId> {
        let mut completed = None;

        if let Some(pending) = self.pending.take() {
            if now >= pending.begin {
                // Let the running motion reach the moment it is interrupted.
                if let Some(active) = &self.active {
                    if active.is_finished(pending.begin) {
                        completed = Some(active.id);
                    }
                }
                self.sync(pending.begin);
                self.begin(pending);
            } else {
                self.pending = Some(pending);
            }
        }

        if let Some(active) = &self.active {
            if active.is_finished(now) {
                self.value = active.to.clone();
                completed = Some(active.id);
                self.active = None;
            } else {
                self.value = active.sample(now, &self.value);
            }
        }
        completed
    }

    fn sync(&mut self, now: Duration) {
        if let Some(active) = &self.active {
            self.value = if active.is_finished(now) {
                active.to.clone()
            } else {
                active.sample(now, &self.value)
            };
        }
    }

    fn begin(&mut self, mut transition: Transition<V>) {
        transition.from = Some(self.value.clone());
        self.active = Some(transition);
    }
}

impl<V: Interpolate + Default> Default for Animated<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{Animated, TransitionSpec};
    use crate::Easing;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn linear(d: u64) -> TransitionSpec {
        TransitionSpec::new(ms(d), Easing::Linear)
    }

    #[test]
    fn runs_to_completion_and_reports_once() {
        let mut a = Animated::new(0.0_f64);
        let id = a.start(10.0, ms(0), linear(100));
        assert!(a.is_animating());
        assert_eq!(a.tick(ms(50)), None);
        assert_eq!(*a.value(), 5.0);
        assert_eq!(a.tick(ms(100)), Some(id));
        assert_eq!(*a.value(), 10.0);
        assert_eq!(a.tick(ms(200)), None);
        assert!(!a.is_animating());
    }

    #[test]
    fn restart_begins_from_displayed_value() {
        let mut a = Animated::new(0.0_f64);
        let first = a.start(100.0, ms(0), linear(100));
        a.tick(ms(40));
        assert_eq!(*a.value(), 40.0);

        // Retarget mid-flight: the old motion is interrupted.
        let second = a.start(0.0, ms(50), linear(100));
        assert_eq!(*a.value(), 50.0);
        assert_eq!(a.tick(ms(100)), None);
        assert_eq!(*a.value(), 25.0);
        assert_eq!(a.tick(ms(150)), Some(second));
        assert_ne!(first, second);
        assert_eq!(*a.value(), 0.0);
    }

    #[test]
    fn delayed_transition_interrupts_only_when_it_begins() {
        let mut a = Animated::new(0.0_f64);
        a.start(100.0, ms(0), linear(100));
        let late = a.start(0.0, ms(0), linear(100).with_delay(ms(50)));
        assert_eq!(*a.target(), 0.0);

        // Still running the first motion during the delay.
        a.tick(ms(25));
        assert_eq!(*a.value(), 25.0);

        a.tick(ms(100));
        // Second motion began at 50 from 50, halfway back at 100.
        assert_eq!(*a.value(), 25.0);
        assert_eq!(a.tick(ms(150)), Some(late));
    }

    #[test]
    fn set_cancels_everything() {
        let mut a = Animated::new(0.0_f64);
        a.start(1.0, ms(0), linear(100));
        a.set(3.0);
        assert!(!a.is_animating());
        assert_eq!(a.tick(ms(500)), None);
        assert_eq!(*a.value(), 3.0);
    }

    #[test]
    fn zero_duration_completes_on_next_tick() {
        let mut a = Animated::new(0.0_f64);
        let id = a.start(2.0, ms(10), linear(0));
        assert_eq!(a.tick(ms(10)), Some(id));
        assert_eq!(*a.value(), 2.0);
    }

    #[test]
    fn ranges_animate_both_ends() {
        let mut a = Animated::new(50_000.0..75_000.0);
        a.start(
            59_000.0..64_000.0,
            ms(0),
            TransitionSpec::new(ms(1400), Easing::CubicInOut),
        );
        a.tick(ms(700));
        assert_eq!(*a.value(), 54_500.0..69_500.0);
    }
}
