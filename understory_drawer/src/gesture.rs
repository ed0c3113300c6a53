// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: bookkeeping for one pointer dragging the drawer.
//!
//! ## Usage
//!
//! 1) Begin a session with [`GestureSession::begin`] when a pointer-down is accepted.
//! 2) On each move from the same pointer, call [`GestureSession::progress_at`].
//! 3) Drop the session on pointer-up or cancel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_drawer::{DrawerState, GestureSession};
//!
//! // Pointer 7 lands at x = 5 on a closed drawer whose side panel is 200 wide.
//! let session = GestureSession::begin(7_u32, Point::new(5.0, 40.0), 0.0, DrawerState::Closed);
//! assert!(session.owns(&7));
//!
//! // Dragging 100 px to the right reveals half of the panel.
//! assert_eq!(session.progress_at(105.0, 200.0), 0.5);
//! ```

use kurbo::Point;

use crate::state::DrawerState;

/// Tracks a single pointer dragging the drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession<P> {
    pointer: P,
    origin: Point,
    panel_init_offset: f64,
    initial_state: DrawerState,
}

impl<P: PartialEq> GestureSession<P> {
    /// Starts tracking `pointer`, which went down at `origin`.
    ///
    /// `panel_init_offset` is the main panel's horizontal offset when the
    /// gesture began, in the same units as the side panel width.
    #[must_use]
    pub fn begin(
        pointer: P,
        origin: Point,
        panel_init_offset: f64,
        initial_state: DrawerState,
    ) -> Self {
        Self {
            pointer,
            origin,
            panel_init_offset,
            initial_state,
        }
    }

    /// Returns `true` if events from `pointer` belong to this session.
    #[must_use]
    pub fn owns(&self, pointer: &P) -> bool {
        self.pointer == *pointer
    }

    /// Pointer that owns the session.
    #[must_use]
    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    /// Position of the initiating pointer-down.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Main panel offset captured at pointer-down.
    #[must_use]
    pub fn panel_init_offset(&self) -> f64 {
        self.panel_init_offset
    }

    /// Settled state when the gesture began.
    #[must_use]
    pub fn initial_state(&self) -> DrawerState {
        self.initial_state
    }

    /// Horizontal distance from the origin to `x`.
    #[must_use]
    pub fn dx(&self, x: f64) -> f64 {
        x - self.origin.x
    }

    /// Progress for a pointer currently at `x`.
    ///
    /// The drag maps 1:1 onto the panel width and is clamped to `[0, 1]`.
    /// A non-positive width yields the extreme in the direction of travel.
    #[must_use]
    pub fn progress_at(&self, x: f64, side_panel_width: f64) -> f64 {
        let offset = self.panel_init_offset + self.dx(x);
        if side_panel_width <= 0.0 {
            return if offset > 0.0 { 1.0 } else { 0.0 };
        }
        (offset / side_panel_width).clamp(0.0, 1.0)
    }
}
