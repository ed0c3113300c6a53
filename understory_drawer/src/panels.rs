// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer's two content slots.
//!
//! The drawer never looks inside its panels; it only records which host
//! handle occupies the side slot and which occupies the main slot. Handles
//! are compared with [`PartialEq`], so any id type the host already uses for
//! its widgets works.

use crate::error::StructureError;

/// Side and main panel slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSlots<T> {
    side: Option<T>,
    main: Option<T>,
}

impl<T> Default for PanelSlots<T> {
    fn default() -> Self {
        Self {
            side: None,
            main: None,
        }
    }
}

impl<T: PartialEq> PanelSlots<T> {
    /// Creates empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates slots already holding both panels.
    #[must_use]
    pub fn with_panels(side: T, main: T) -> Self {
        Self {
            side: Some(side),
            main: Some(main),
        }
    }

    /// Puts `panel` in the side slot, returning the panel it replaced.
    pub fn attach_side_panel(&mut self, panel: T) -> Option<T> {
        self.side.replace(panel)
    }

    /// Puts `panel` in the main slot, returning the panel it replaced.
    pub fn attach_main_panel(&mut self, panel: T) -> Option<T> {
        self.main.replace(panel)
    }

    /// Attaches `panel` to the first free slot, side before main.
    ///
    /// Fails with [`StructureError::TooManyPanels`] when both slots are taken.
    pub fn attach(&mut self, panel: T) -> Result<(), StructureError> {
        if self.side.is_none() {
            self.side = Some(panel);
        } else if self.main.is_none() {
            self.main = Some(panel);
        } else {
            return Err(StructureError::TooManyPanels);
        }
        Ok(())
    }

    /// Removes `panel` from whichever slot holds it and returns it.
    ///
    /// Fails with [`StructureError::NotAttached`] if neither slot holds it.
    pub fn detach(&mut self, panel: &T) -> Result<T, StructureError> {
        if let Some(side) = self.side.take_if(|p| p == panel) {
            return Ok(side);
        }
        self.main.take_if(|p| p == panel).ok_or(StructureError::NotAttached)
    }

    /// Panel in the side slot.
    #[must_use]
    pub fn side(&self) -> Option<&T> {
        self.side.as_ref()
    }

    /// Panel in the main slot.
    #[must_use]
    pub fn main(&self) -> Option<&T> {
        self.main.as_ref()
    }

    /// Returns `true` when both slots are occupied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.side.is_some() && self.main.is_some()
    }
}
