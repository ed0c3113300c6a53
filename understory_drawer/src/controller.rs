// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer controller: pointer input in, progress and state out.

use core::time::Duration;

use kurbo::{Point, Rect};

use crate::animation::ProgressAnimation;
use crate::config::DrawerConfig;
use crate::error::DrawerError;
use crate::gesture::GestureSession;
use crate::layout::DrawerLayout;
use crate::panels::PanelSlots;
use crate::state::DrawerState;

/// Above this progress the main panel, not the edge strip, accepts drags.
const OPEN_REGION_PROGRESS: f64 = 0.001;

/// A drag that began open and ends at or above this progress closes the drawer.
const SNAP_BACK_PROGRESS: f64 = 0.975;

/// Progress at or below this counts as fully closed.
const CLOSED_EPSILON: f64 = 1e-9;

/// Headless navigation drawer.
///
/// Owns the reveal progress, the settled [`DrawerState`], at most one
/// [`GestureSession`], and at most one [`ProgressAnimation`]. `P` is the
/// host's pointer id type and `T` the host's panel handle type.
///
/// All methods are synchronous. The host feeds pointer events as they arrive,
/// calls [`tick`](Self::tick) once per frame while [`is_animating`](Self::is_animating),
/// and reads [`layout`](Self::layout) to render.
#[derive(Clone, Debug)]
pub struct DrawerController<P, T = ()> {
    bounds: Rect,
    config: DrawerConfig,
    progress: f64,
    state: DrawerState,
    session: Option<GestureSession<P>>,
    animation: Option<ProgressAnimation>,
    panels: PanelSlots<T>,
}

impl<P: PartialEq, T: PartialEq> DrawerController<P, T> {
    /// Creates a closed drawer occupying `bounds`.
    #[must_use]
    pub fn new(bounds: Rect, config: DrawerConfig) -> Self {
        Self {
            bounds,
            config,
            progress: 0.0,
            state: DrawerState::Closed,
            session: None,
            animation: None,
            panels: PanelSlots::default(),
        }
    }

    /// Creates a closed drawer holding both panels.
    #[must_use]
    pub fn with_panels(bounds: Rect, config: DrawerConfig, side: T, main: T) -> Self {
        Self {
            panels: PanelSlots::with_panels(side, main),
            ..Self::new(bounds, config)
        }
    }

    /// Bounds of the whole drawer.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moves or resizes the drawer.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Changes take effect on the next event or frame.
    pub fn config_mut(&mut self) -> &mut DrawerConfig {
        &mut self.config
    }

    /// Resolved side panel width for the current bounds.
    #[must_use]
    pub fn side_panel_width(&self) -> f64 {
        self.config.side_panel_width.resolve(self.bounds.width())
    }

    /// Reveal progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Last settled state.
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Returns `true` while a pointer owns the drawer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession<P>> {
        self.session.as_ref()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The in-flight animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&ProgressAnimation> {
        self.animation.as_ref()
    }

    /// State the in-flight animation is heading for.
    #[must_use]
    pub fn animation_target(&self) -> Option<DrawerState> {
        self.animation.as_ref().map(|anim| {
            if anim.target_value() >= 1.0 {
                DrawerState::Open
            } else {
                DrawerState::Closed
            }
        })
    }

    /// Render description for the current progress.
    #[must_use]
    pub fn layout(&self) -> DrawerLayout {
        DrawerLayout::compute(self.bounds, self.progress, self.state, &self.config)
    }

    /// Current bounds of the main panel.
    #[must_use]
    pub fn main_panel_bounds(&self) -> Rect {
        self.layout().main_panel
    }

    /// The panel slots.
    #[must_use]
    pub fn panels(&self) -> &PanelSlots<T> {
        &self.panels
    }

    /// Puts `panel` in the side slot, returning the panel it replaced.
    pub fn attach_side_panel(&mut self, panel: T) -> Option<T> {
        self.panels.attach_side_panel(panel)
    }

    /// Puts `panel` in the main slot, returning the panel it replaced.
    pub fn attach_main_panel(&mut self, panel: T) -> Option<T> {
        self.panels.attach_main_panel(panel)
    }

    /// Attaches `panel` to the first free slot, side before main.
    pub fn attach(&mut self, panel: T) -> Result<(), DrawerError> {
        Ok(self.panels.attach(panel)?)
    }

    /// Detaches `panel` from whichever slot holds it.
    pub fn detach(&mut self, panel: &T) -> Result<T, DrawerError> {
        Ok(self.panels.detach(panel)?)
    }

    /// Offers a pointer-down to the drawer.
    ///
    /// Returns `true` if the drawer takes ownership of `pointer`. A drawer
    /// that is closed accepts presses in the edge strip; one that is even
    /// slightly open accepts presses anywhere over the main panel. Presses
    /// while another pointer owns the drawer are declined. Declined events
    /// should be routed by the host as if the drawer were not there.
    #[must_use = "declined events must be passed through by the host"]
    pub fn on_pointer_down(&mut self, position: Point, pointer: P) -> bool {
        if self.session.is_some() || !self.bounds.contains(position) {
            return false;
        }
        if !self.in_activation_region(position) {
            return false;
        }
        self.cancel_animation();
        let offset = self.progress * self.side_panel_width();
        log::trace!("drawer gesture began at {position:?} from {}", self.state);
        self.session = Some(GestureSession::begin(pointer, position, offset, self.state));
        true
    }

    /// Feeds a pointer move.
    ///
    /// Returns `true` if `pointer` owns the drawer and the move was consumed.
    /// Moves with a non-finite x are ignored.
    pub fn on_pointer_move(&mut self, position: Point, pointer: &P) -> bool {
        if !position.x.is_finite() {
            return false;
        }
        let width = self.side_panel_width();
        let Some(session) = self.session.as_ref().filter(|s| s.owns(pointer)) else {
            return false;
        };
        let progress = session.progress_at(position.x, width);
        self.set_progress(progress);
        true
    }

    /// Feeds a pointer release, settling the drawer open or closed.
    ///
    /// Returns `true` if `pointer` owned the drawer.
    pub fn on_pointer_up(&mut self, pointer: &P) -> bool {
        let Some(session) = self.end_session(pointer) else {
            return false;
        };
        self.relax(session.initial_state());
        true
    }

    /// Feeds a pointer cancellation. Settles exactly like a release.
    pub fn on_pointer_cancel(&mut self, pointer: &P) -> bool {
        self.on_pointer_up(pointer)
    }

    /// Moves the drawer to `target`, animating or jumping.
    ///
    /// Any in-flight animation is replaced. Without animation, progress and
    /// state change before this returns.
    pub fn set_state(&mut self, target: DrawerState, animate: bool) {
        if animate {
            self.animate_to(target);
        } else {
            self.cancel_animation();
            self.progress = target.target_progress();
            self.set_settled(target);
        }
    }

    /// Like [`set_state`](Self::set_state), taking `"open"` or `"closed"`.
    ///
    /// Any other token fails with [`DrawerError::InvalidArgument`] and leaves
    /// the drawer untouched.
    pub fn set_state_named(&mut self, target: &str, animate: bool) -> Result<(), DrawerError> {
        let target = target.parse::<DrawerState>()?;
        self.set_state(target, animate);
        Ok(())
    }

    /// Moves the drawer to the opposite of its settled state.
    pub fn toggle(&mut self, animate: bool) {
        self.set_state(self.state.opposite(), animate);
    }

    /// Advances the in-flight animation by `dt`.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        let value = anim.advance(dt);
        let finished = anim.is_finished();
        self.set_progress(value);
        if finished {
            self.animation = None;
        }
        self.animation.is_some()
    }

    fn in_activation_region(&self, position: Point) -> bool {
        if self.progress > OPEN_REGION_PROGRESS {
            let main = self.main_panel_bounds();
            main.x0 <= position.x && position.x <= main.x1
        } else {
            let left = self.bounds.x0;
            left <= position.x && position.x <= left + self.config.touch_accept_width
        }
    }

    fn end_session(&mut self, pointer: &P) -> Option<GestureSession<P>> {
        if !self.session.as_ref().is_some_and(|s| s.owns(pointer)) {
            return None;
        }
        log::trace!("drawer gesture ended at progress {}", self.progress);
        self.session.take()
    }

    fn relax(&mut self, initial_state: DrawerState) {
        // A press that started open and barely moved closes the drawer.
        let target = if initial_state == DrawerState::Open && self.progress >= SNAP_BACK_PROGRESS {
            DrawerState::Closed
        } else if self.progress > self.config.min_dist_to_open {
            DrawerState::Open
        } else {
            DrawerState::Closed
        };
        self.animate_to(target);
    }

    fn animate_to(&mut self, target: DrawerState) {
        self.cancel_animation();
        let to = target.target_progress();
        if self.progress == to {
            self.set_settled(target);
            return;
        }
        log::debug!(
            "drawer animating {:.3} -> {to} over {:?}",
            self.progress,
            self.config.anim_duration
        );
        self.animation = Some(ProgressAnimation::new(
            self.progress,
            to,
            self.config.anim_duration,
            self.config.transition(target.is_open()),
        ));
    }

    fn cancel_animation(&mut self) {
        if let Some(anim) = self.animation.take() {
            log::debug!("drawer animation toward {} cancelled", anim.target_value());
        }
    }

    fn set_progress(&mut self, value: f64) {
        // NaN survives `clamp`; keep the last good value instead.
        if value.is_nan() {
            return;
        }
        self.progress = value.clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.set_settled(DrawerState::Open);
        } else if self.progress <= CLOSED_EPSILON {
            self.set_settled(DrawerState::Closed);
        }
    }

    fn set_settled(&mut self, state: DrawerState) {
        if self.state != state {
            log::debug!("drawer {} -> {state}", self.state);
            self.state = state;
        }
    }
}
