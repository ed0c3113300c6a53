// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete settle state of a drawer.

use core::fmt;
use core::str::FromStr;

use crate::error::{DrawerError, InvalidState};

/// Whether the side panel is settled hidden or revealed.
///
/// The state only describes where the drawer comes to rest. While a drag or
/// an animation is in flight the drawer keeps reporting the last settled
/// state; the continuous position lives in the controller's progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    /// Side panel hidden, progress `0.0`.
    #[default]
    Closed,
    /// Side panel fully revealed, progress `1.0`.
    Open,
}

impl DrawerState {
    /// Returns the other state.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Progress value this state settles at.
    #[must_use]
    pub fn target_progress(self) -> f64 {
        match self {
            Self::Closed => 0.0,
            Self::Open => 1.0,
        }
    }

    /// Token used by [`FromStr`] and [`fmt::Display`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }

    /// Returns `true` for [`DrawerState::Open`].
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl fmt::Display for DrawerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawerState {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(DrawerError::InvalidArgument(InvalidState)),
        }
    }
}
