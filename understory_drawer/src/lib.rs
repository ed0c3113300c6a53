// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: a headless navigation drawer.
//!
//! A navigation drawer hosts two panels: a side panel hidden at the left edge
//! and a main panel that fills the drawer. Dragging from the edge reveals the
//! side panel; releasing snaps the drawer open or closed with a short
//! animation.
//!
//! This crate owns only the behavior:
//! - A continuous reveal **progress** in `[0, 1]` and a settled [`DrawerState`].
//! - A single-pointer gesture state machine ([`GestureSession`]) that maps
//!   horizontal drag distance 1:1 onto progress.
//! - The release decision ("relax") choosing which state to animate toward.
//! - A frame-driven [`ProgressAnimation`] with selectable [`Easing`].
//! - A pure render description ([`DrawerLayout`]) derived from progress and a
//!   [`DrawerConfig`], including named visual presets ([`DrawerPreset`]).
//!
//! It does **not** draw, lay out panel contents, or own a clock. Callers are
//! expected to:
//! - Forward pointer down/move/up events and route declined ones normally.
//! - Call [`DrawerController::tick`] once per frame while it is animating.
//! - Map [`DrawerController::layout`] onto their own widgets each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use understory_drawer::{DrawerConfig, DrawerController, DrawerState};
//!
//! let config = DrawerConfig::default().with_side_panel_width(200.0);
//! let mut drawer = DrawerController::<u32>::new(Rect::new(0.0, 0.0, 800.0, 600.0), config);
//!
//! // Press in the 20 px edge strip and drag 150 px to the right.
//! assert!(drawer.on_pointer_down(Point::new(4.0, 300.0), 1));
//! drawer.on_pointer_move(Point::new(154.0, 300.0), &1);
//! assert_eq!(drawer.progress(), 0.75);
//!
//! // Past the 0.7 threshold: releasing animates open.
//! drawer.on_pointer_up(&1);
//! while drawer.tick(Duration::from_millis(16)) {}
//! assert_eq!(drawer.state(), DrawerState::Open);
//! assert_eq!(drawer.layout().main_panel.x0, 200.0);
//! ```
//!
//! ## Release rules
//!
//! When the owning pointer is released:
//! - If the gesture began with the drawer open and progress is still at or
//!   above `0.975`, the drawer closes. A tap on the main panel of an open
//!   drawer therefore closes it.
//! - Otherwise the drawer opens if progress exceeds
//!   [`DrawerConfig::min_dist_to_open`] and closes if not.
//!
//! ## Panels
//!
//! The controller records which host handles occupy the side and main slots
//! (see [`PanelSlots`]). Attaching a third panel, or detaching one that is not
//! attached, is a [`StructureError`].
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod config;
mod controller;
mod easing;
mod error;
mod gesture;
mod layout;
mod panels;
mod state;

pub use animation::ProgressAnimation;
pub use config::{DrawerConfig, DrawerPreset, SidePanelWidth, TopPanel, VisualParams};
pub use controller::DrawerController;
pub use easing::Easing;
pub use error::{DrawerError, InvalidState, StructureError};
pub use gesture::GestureSession;
pub use layout::{DrawerLayout, Separator, SeparatorOrientation};
pub use panels::PanelSlots;
pub use state::DrawerState;
