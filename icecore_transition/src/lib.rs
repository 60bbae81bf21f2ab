// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_transition --heading-base-level=0

//! Icecore Transition: timed, interruptible value transitions.
//!
//! Every animatable property of a chart (the x domain a path is drawn with,
//! a dash offset, a legend anchor, an opacity) is modelled as one
//! [`Animated`] channel. A channel holds a displayed value plus **at most one**
//! active [`Transition`]:
//!
//! - Starting a transition on a channel replaces whatever was in flight. The
//!   new motion begins from the value currently displayed, so rapid
//!   re‑targeting never jumps.
//! - A delayed transition waits in a pending slot. The running motion keeps
//!   going until the delay elapses, then it is interrupted.
//! - Interrupted transitions never report completion; only a transition that
//!   runs to its end is returned from [`Animated::tick`].
//!
//! Time is injected: callers pass `now` as a [`Duration`](core::time::Duration)
//! measured from any fixed origin (page load, test start).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use icecore_transition::{Animated, Easing, TransitionSpec};
//!
//! let ms = Duration::from_millis;
//! let mut offset = Animated::new(100.0_f64);
//! let id = offset.start(0.0, ms(0), TransitionSpec::new(ms(2000), Easing::Linear));
//!
//! assert_eq!(offset.tick(ms(1000)), None);
//! assert_eq!(*offset.value(), 50.0);
//! assert_eq!(offset.tick(ms(2000)), Some(id));
//! assert!(!offset.is_animating());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animated;
mod easing;
mod interpolate;

pub use animated::{Animated, Transition, TransitionId, TransitionSpec};
pub use easing::Easing;
pub use interpolate::Interpolate;
