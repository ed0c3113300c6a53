// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported to the integrating caller.
//!
//! These flag programming mistakes in how a drawer is assembled or commanded.
//! Pointer noise (unknown pointer ids, touches outside the activation region)
//! is never an error; those events are simply passed through.

use core::fmt;

/// Ways the two-panel structure of a drawer can be violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureError {
    /// A panel was attached while both the side and main slots were occupied.
    TooManyPanels,
    /// A panel was detached that occupies neither slot.
    NotAttached,
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPanels => {
                f.write_str("a drawer accepts exactly two panels (side, then main)")
            }
            Self::NotAttached => f.write_str("panel is neither the side nor the main panel"),
        }
    }
}

impl core::error::Error for StructureError {}

/// A state token other than `"open"` or `"closed"` was supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvalidState;

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid drawer state, expected `open` or `closed`")
    }
}

impl core::error::Error for InvalidState {}

/// Error type for fallible drawer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerError {
    /// Panel attachment or removal broke the side/main structure.
    Structure(StructureError),
    /// An unrecognized state was requested.
    InvalidArgument(InvalidState),
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure(err) => write!(f, "structure error: {err}"),
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
        }
    }
}

impl core::error::Error for DrawerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Structure(err) => Some(err),
            Self::InvalidArgument(err) => Some(err),
        }
    }
}

impl From<StructureError> for DrawerError {
    fn from(err: StructureError) -> Self {
        Self::Structure(err)
    }
}

impl From<InvalidState> for DrawerError {
    fn from(err: InvalidState) -> Self {
        Self::InvalidArgument(err)
    }
}
