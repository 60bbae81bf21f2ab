// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// State of the play button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    /// Stopped before the end; the button reads "Play".
    #[default]
    Idle,
    /// Advancing; the next step is due at `next`.
    Playing {
        /// Time of the next slider step.
        next: Duration,
    },
    /// Reached the end; the button reads "Replay".
    Finished,
}

impl PlayState {
    /// Button label for this state.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Play",
            Self::Playing { .. } => "Pause",
            Self::Finished => "Replay",
        }
    }

    /// Returns `true` while playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing { .. })
    }
}

/// Fixed‑interval slider stepper.
///
/// Mirrors an interval timer: the first step fires one interval after
/// starting, and at the end the stepper stops on the following interval.
#[derive(Clone, Copy, Debug)]
pub struct SliderPlayback {
    state: PlayState,
    interval: Duration,
    max: u32,
}

impl SliderPlayback {
    /// Creates an idle stepper running to `max` at one step per `interval`.
    #[must_use]
    pub fn new(interval: Duration, max: u32) -> Self {
        Self {
            state: PlayState::Idle,
            interval,
            max,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Starts stepping. Returns `true` if the slider must first rewind to 0.
    pub fn play(&mut self, now: Duration) -> bool {
        let rewind = self.state == PlayState::Finished;
        if !self.state.is_playing() {
            self.state = PlayState::Playing {
                next: now + self.interval,
            };
        }
        rewind
    }

    /// Stops stepping before the end.
    pub fn pause(&mut self) {
        if self.state.is_playing() {
            self.state = PlayState::Idle;
        }
    }

    /// Stops and forgets a finished run.
    pub fn reset(&mut self) {
        self.state = PlayState::Idle;
    }

    /// Advances `value` for every interval elapsed by `now`.
    ///
    /// Returns `true` if `value` changed.
    pub fn advance(&mut self, now: Duration, value: &mut u32) -> bool {
        let mut changed = false;
        while let PlayState::Playing { next } = self.state {
            if now < next {
                break;
            }
            if *value >= self.max {
                self.state = PlayState::Finished;
                log::debug!("depth playback finished");
                break;
            }
            *value += 1;
            changed = true;
            self.state = PlayState::Playing {
                next: next + self.interval,
            };
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{PlayState, SliderPlayback};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn steps_on_each_interval() {
        let mut p = SliderPlayback::new(ms(50), 100);
        let mut v = 0;
        assert!(!p.play(ms(0)));
        assert_eq!(p.state().label(), "Pause");
        assert!(!p.advance(ms(49), &mut v));
        assert!(p.advance(ms(50), &mut v));
        assert_eq!(v, 1);
        p.advance(ms(260), &mut v);
        assert_eq!(v, 5);
    }

    #[test]
    fn stops_one_interval_after_the_end() {
        let mut p = SliderPlayback::new(ms(50), 3);
        let mut v = 2;
        p.play(ms(0));
        p.advance(ms(50), &mut v);
        assert_eq!(v, 3);
        assert!(p.state().is_playing());
        p.advance(ms(100), &mut v);
        assert_eq!(p.state(), PlayState::Finished);
        assert_eq!(p.state().label(), "Replay");
        // Replay asks for a rewind.
        assert!(p.play(ms(200)));
    }

    #[test]
    fn pause_keeps_position() {
        let mut p = SliderPlayback::new(ms(50), 100);
        let mut v = 10;
        p.play(ms(0));
        p.advance(ms(100), &mut v);
        p.pause();
        assert_eq!(p.state().label(), "Play");
        assert!(!p.advance(ms(1000), &mut v));
        assert_eq!(v, 12);
    }
}
