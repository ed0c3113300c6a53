// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed interpolation of the drawer's progress.
//!
//! A [`ProgressAnimation`] does not own a clock. The host advances it with the
//! elapsed frame time, which keeps it usable from any frame scheduler and
//! deterministic under test.

use core::time::Duration;

use crate::easing::Easing;

/// An in-flight interpolation of progress toward a fixed target.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl ProgressAnimation {
    /// Creates an animation from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Value the animation started from.
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    /// Value the animation settles at.
    #[must_use]
    pub fn target_value(&self) -> f64 {
        self.to
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Curve used for interpolation.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear time fraction in `[0, 1]`.
    ///
    /// A zero-length animation reports `0.0` until it is first advanced.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.elapsed.is_zero() { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.fraction());
        self.from + (self.to - self.from) * eased
    }

    /// Advances by `dt` and returns the new value.
    ///
    /// A zero-length animation finishes on its first advance, even when `dt`
    /// is zero.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.duration.is_zero() && self.elapsed.is_zero() {
            self.elapsed = Duration::from_nanos(1);
        }
        self.value()
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        if self.duration.is_zero() {
            return !self.elapsed.is_zero();
        }
        self.elapsed >= self.duration
    }
}
