// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=icecore_intro --heading-base-level=0

//! Icecore Intro: the dot‑grid slides that open the story.
//!
//! [`DotGrid`] fills the viewport with square dots, one per share of the
//! atmosphere, and marks a trapped block with a single CO₂ dot at its center.
//! [`IntroStory`] steps through the slides, recoloring the grid on each, and
//! on the last slide flies the CO₂ dot down to the bottom of the screen
//! before releasing the page's [`ScrollLock`](icecore_scrolly::ScrollLock).
//!
//! ```rust
//! use core::time::Duration;
//!
//! use icecore_intro::{IntroConfig, IntroStory};
//! use icecore_scrolly::{ScrollLock, ViewportSize};
//!
//! let lock = ScrollLock::new();
//! let mut story = IntroStory::new(IntroConfig::default(), ViewportSize::new(1280.0, 800.0), &lock);
//! assert!(lock.is_locked());
//!
//! while story.next(Duration::ZERO) {}
//! assert!(!lock.is_locked());
//! ```

mod config;
mod grid;
mod story;

pub use config::IntroConfig;
pub use grid::DotGrid;
pub use story::{DotState, FloatingPhase, IntroStory};
