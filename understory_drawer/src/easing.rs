// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for drawer animations.

/// Timing curve applied to a drawer animation.
///
/// Curves map a linear time fraction in `[0, 1]` onto a progress fraction in
/// `[0, 1]`, with `0 -> 0` and `1 -> 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slow, ends fast.
    InCubic,
    /// Starts fast, decelerates into the target.
    #[default]
    OutCubic,
    /// Slow at both ends.
    InOutCubic,
}

impl Easing {
    /// Maps a time fraction onto a progress fraction.
    ///
    /// Inputs outside `[0, 1]` are clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InCubic => t * t * t,
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
