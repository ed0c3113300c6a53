// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_drawer` crate.
//!
//! These drive `DrawerController` the way a host would: pointer events in,
//! frame ticks until the animation settles, then progress/state/layout out.

use core::time::Duration;

use kurbo::{Point, Rect};
use understory_drawer::{
    DrawerConfig, DrawerController, DrawerError, DrawerPreset, DrawerState, StructureError,
};

const FRAME: Duration = Duration::from_millis(16);
const SIDE_WIDTH: f64 = 200.0;

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

fn drawer() -> DrawerController<u32, &'static str> {
    DrawerController::new(bounds(), DrawerConfig::default().with_side_panel_width(SIDE_WIDTH))
}

fn settle<T: PartialEq>(drawer: &mut DrawerController<u32, T>) -> usize {
    let mut frames = 0;
    while drawer.tick(FRAME) {
        frames += 1;
        assert!(frames < 1_000, "animation never finished");
    }
    frames
}

/// Drags pointer `id` from the edge strip until progress reaches `progress`.
fn drag_from_closed_to(drawer: &mut DrawerController<u32, &'static str>, id: u32, progress: f64) {
    assert!(drawer.on_pointer_down(Point::new(0.0, 300.0), id));
    assert!(drawer.on_pointer_move(Point::new(progress * SIDE_WIDTH, 300.0), &id));
}

fn open_drawer() -> DrawerController<u32, &'static str> {
    let mut d = drawer();
    d.set_state(DrawerState::Open, false);
    d
}

#[test]
fn progress_stays_in_unit_range_for_any_drag() {
    let mut d = drawer();
    assert!(d.on_pointer_down(Point::new(10.0, 300.0), 1));
    for x in [-10_000.0, -1.0, 0.0, 50.0, 199.0, 210.0, 400.0, 10_000.0, -300.0] {
        d.on_pointer_move(Point::new(x, 300.0), &1);
        let p = d.progress();
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range at x = {x}");
    }
    d.on_pointer_up(&1);
    let mut frames = 0;
    while d.tick(FRAME) {
        let p = d.progress();
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range while animating");
        frames += 1;
        assert!(frames < 1_000, "animation never finished");
    }
}

#[test]
fn non_finite_moves_do_not_escape_unit_range() {
    let mut d = drawer();
    assert!(d.on_pointer_down(Point::new(5.0, 300.0), 1));
    assert!(d.on_pointer_move(Point::new(105.0, 300.0), &1));

    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(!d.on_pointer_move(Point::new(x, 300.0), &1), "move to x = {x} consumed");
        assert_eq!(d.progress(), 0.5, "move to x = {x} changed progress");
    }

    assert!(d.on_pointer_up(&1));
    assert_eq!(d.animation_target(), Some(DrawerState::Closed));
    let mut frames = 0;
    while d.tick(FRAME) {
        let p = d.progress();
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range while animating");
        assert!(d.layout().main_panel.x0.is_finite());
        frames += 1;
        assert!(frames < 1_000, "animation never finished");
    }
    assert_eq!(d.progress(), 0.0);
}

#[test]
fn second_gesture_is_rejected_and_first_keeps_tracking() {
    let mut d = drawer();
    assert!(d.on_pointer_down(Point::new(5.0, 300.0), 1));
    assert!(!d.on_pointer_down(Point::new(2.0, 100.0), 2));

    assert!(d.on_pointer_move(Point::new(105.0, 300.0), &1));
    assert_eq!(d.progress(), 0.5);
    assert!(!d.on_pointer_move(Point::new(200.0, 100.0), &2));
    assert_eq!(d.progress(), 0.5);
}

#[test]
fn closed_drawer_declines_presses_outside_edge_strip() {
    let mut d = drawer();
    let strip = d.config().touch_accept_width;
    assert!(!d.on_pointer_down(Point::new(strip + 0.01, 300.0), 1));
    assert!(!d.on_pointer_down(Point::new(SIDE_WIDTH, 300.0), 1));
    assert!(!d.is_dragging());
    assert!(d.on_pointer_down(Point::new(strip, 300.0), 1));
}

#[test]
fn open_drawer_accepts_presses_on_main_panel() {
    let mut d = open_drawer();
    let main = d.main_panel_bounds();
    assert_eq!(main.x0, SIDE_WIDTH);
    // The side panel itself is not a drag handle.
    assert!(!d.on_pointer_down(Point::new(SIDE_WIDTH / 2.0, 300.0), 1));
    assert!(d.on_pointer_down(Point::new(main.x0 + 300.0, 300.0), 1));
    assert_eq!(d.session().map(|s| s.initial_state()), Some(DrawerState::Open));
}

#[test]
fn release_above_threshold_settles_open() {
    let mut d = drawer();
    drag_from_closed_to(&mut d, 1, 0.71);
    assert!(d.on_pointer_up(&1));
    assert_eq!(d.animation_target(), Some(DrawerState::Open));
    assert!(settle(&mut d) > 0);
    assert_eq!(d.progress(), 1.0);
    assert_eq!(d.state(), DrawerState::Open);
}

#[test]
fn release_below_threshold_settles_closed() {
    let mut d = drawer();
    drag_from_closed_to(&mut d, 1, 0.69);
    assert!(d.on_pointer_up(&1));
    assert_eq!(d.animation_target(), Some(DrawerState::Closed));
    settle(&mut d);
    assert_eq!(d.progress(), 0.0);
    assert_eq!(d.state(), DrawerState::Closed);
}

#[test]
fn release_near_fully_open_from_open_snaps_closed() {
    let mut d = open_drawer();
    let start = Point::new(SIDE_WIDTH + 100.0, 300.0);
    assert!(d.on_pointer_down(start, 1));
    assert!(d.on_pointer_move(Point::new(start.x - 0.02 * SIDE_WIDTH, 300.0), &1));
    assert!((d.progress() - 0.98).abs() < 1e-9);
    assert!(d.on_pointer_up(&1));
    assert_eq!(d.animation_target(), Some(DrawerState::Closed));
    settle(&mut d);
    assert_eq!(d.state(), DrawerState::Closed);
}

#[test]
fn release_near_fully_open_from_closed_stays_open() {
    let mut d = drawer();
    drag_from_closed_to(&mut d, 1, 0.98);
    assert!(d.on_pointer_up(&1));
    assert_eq!(d.animation_target(), Some(DrawerState::Open));
    settle(&mut d);
    assert_eq!(d.state(), DrawerState::Open);
}

#[test]
fn partial_drag_back_from_open_uses_general_threshold() {
    let mut d = open_drawer();
    let start = Point::new(SIDE_WIDTH + 100.0, 300.0);
    assert!(d.on_pointer_down(start, 1));

    d.on_pointer_move(Point::new(start.x - 0.2 * SIDE_WIDTH, 300.0), &1);
    assert!(d.on_pointer_up(&1));
    assert_eq!(d.animation_target(), Some(DrawerState::Open));
    settle(&mut d);
    assert_eq!(d.state(), DrawerState::Open);

    assert!(d.on_pointer_down(start, 2));
    d.on_pointer_move(Point::new(start.x - 0.5 * SIDE_WIDTH, 300.0), &2);
    assert!(d.on_pointer_up(&2));
    settle(&mut d);
    assert_eq!(d.state(), DrawerState::Closed);
}

#[test]
fn toggle_without_animation_is_synchronous() {
    let mut d = drawer();
    d.toggle(false);
    assert_eq!(d.state(), DrawerState::Open);
    assert_eq!(d.progress(), 1.0);
    assert!(!d.is_animating());
    assert!(!d.tick(FRAME));

    d.toggle(false);
    assert_eq!(d.state(), DrawerState::Closed);
    assert_eq!(d.progress(), 0.0);
}

#[test]
fn toggle_with_animation_runs_for_configured_duration() {
    let mut d = drawer();
    d.toggle(true);
    assert!(d.is_animating());
    assert_eq!(d.state(), DrawerState::Closed);
    let frames = settle(&mut d);
    // 300 ms at 16 ms per frame.
    assert_eq!(frames, 18);
    assert_eq!(d.state(), DrawerState::Open);
}

#[test]
fn invalid_state_token_leaves_drawer_untouched() {
    let mut d = drawer();
    drag_from_closed_to(&mut d, 1, 0.4);

    let err = d.set_state_named("invalid", false).unwrap_err();
    assert!(matches!(err, DrawerError::InvalidArgument(_)));
    assert_eq!(d.progress(), 0.4);
    assert_eq!(d.state(), DrawerState::Closed);

    assert_eq!(d.set_state_named("open", false), Ok(()));
    assert_eq!(d.state(), DrawerState::Open);
}

#[test]
fn third_panel_is_a_structure_error() {
    let mut d = drawer();
    assert_eq!(d.attach("side"), Ok(()));
    assert_eq!(d.attach("main"), Ok(()));
    assert_eq!(
        d.attach("extra"),
        Err(DrawerError::Structure(StructureError::TooManyPanels))
    );
    assert_eq!(d.panels().side(), Some(&"side"));
    assert_eq!(d.panels().main(), Some(&"main"));
}

#[test]
fn detaching_unknown_panel_is_a_structure_error() {
    let mut d = DrawerController::<u32, &str>::with_panels(
        bounds(),
        DrawerConfig::default(),
        "side",
        "main",
    );
    assert_eq!(
        d.detach(&"other"),
        Err(DrawerError::Structure(StructureError::NotAttached))
    );
    assert_eq!(d.detach(&"side"), Ok("side"));
    assert_eq!(d.attach_side_panel("menu"), None);
    assert!(d.panels().is_complete());
}

#[test]
fn set_state_without_animation_is_idempotent() {
    let mut d = drawer();
    d.set_state(DrawerState::Open, false);
    let first = (d.progress(), d.state());
    d.set_state(DrawerState::Open, false);
    assert_eq!((d.progress(), d.state()), first);
    assert_eq!(first, (1.0, DrawerState::Open));
    assert!(!d.is_animating());
}

#[test]
fn jump_cancels_running_animation() {
    let mut d = drawer();
    d.set_state(DrawerState::Open, true);
    d.tick(FRAME);
    d.set_state(DrawerState::Closed, false);
    assert!(!d.is_animating());
    assert_eq!(d.progress(), 0.0);
    assert!(!d.tick(FRAME));
    assert_eq!(d.progress(), 0.0);
}

#[test]
fn resize_updates_auto_side_width() {
    let mut d =
        DrawerController::<u32>::new(Rect::new(0.0, 0.0, 300.0, 600.0), DrawerConfig::default());
    assert_eq!(d.side_panel_width(), 150.0);
    d.set_bounds(Rect::new(0.0, 0.0, 1_200.0, 600.0));
    assert_eq!(d.side_panel_width(), 250.0);
}

#[test]
fn layout_follows_progress_with_preset() {
    let config = DrawerConfig::default()
        .with_side_panel_width(SIDE_WIDTH)
        .with_preset(DrawerPreset::SlideAboveAnim);
    let mut d = DrawerController::<u32>::new(bounds(), config);
    d.set_state(DrawerState::Open, false);

    let layout = d.layout();
    assert_eq!(layout.side_panel.x0, 0.0);
    assert_eq!(layout.main_panel.x0, SIDE_WIDTH / 2.0);
    assert_eq!(layout.main_panel_darkness, 0.5);
    assert!(layout.separator.visible);

    // With the main panel only half moved, presses on it still start a drag.
    assert!(d.on_pointer_down(Point::new(SIDE_WIDTH, 300.0), 1));
}

#[test]
fn drawer_at_offset_origin_uses_its_own_edge() {
    let mut d = DrawerController::<u32>::new(
        Rect::new(100.0, 50.0, 900.0, 650.0),
        DrawerConfig::default().with_side_panel_width(SIDE_WIDTH),
    );
    assert!(!d.on_pointer_down(Point::new(10.0, 300.0), 1));
    assert!(d.on_pointer_down(Point::new(110.0, 300.0), 1));
    d.on_pointer_move(Point::new(210.0, 300.0), &1);
    assert_eq!(d.progress(), 0.5);
    assert_eq!(d.main_panel_bounds().x0, 200.0);
}
