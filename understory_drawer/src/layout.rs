// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render description derived from progress.
//!
//! [`DrawerLayout::compute`] is a pure function of the drawer bounds, its
//! progress, its settled state, and its configuration. Hosts recompute it once
//! per frame and map the result onto whatever their renderer needs; the
//! controller itself never draws.

use kurbo::Rect;

use crate::config::{DrawerConfig, TopPanel};
use crate::state::DrawerState;

/// Direction of the shadow gradient drawn where the panels meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorOrientation {
    /// Dark on the left, fading to the right. Used when the side panel is on top.
    LeftToRight,
    /// Dark on the right, fading to the left. Used when the main panel is on top.
    RightToLeft,
}

/// The strip drawn along the edge of the top panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separator {
    /// Where to draw it.
    pub rect: Rect,
    /// Which gradient image to use.
    pub orientation: SeparatorOrientation,
    /// Whether it should be drawn at all.
    pub visible: bool,
}

/// Geometry and tinting for both panels at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerLayout {
    /// Progress the layout was computed for, clamped to `[0, 1]`.
    pub progress: f64,
    /// Settled state the layout was computed for.
    pub state: DrawerState,
    /// Side panel bounds.
    pub side_panel: Rect,
    /// Side panel opacity.
    pub side_panel_opacity: f64,
    /// Alpha of the black overlay on the side panel.
    pub side_panel_darkness: f64,
    /// Main panel bounds.
    pub main_panel: Rect,
    /// Alpha of the black overlay on the main panel.
    pub main_panel_darkness: f64,
    /// Which panel is drawn last.
    pub top_panel: TopPanel,
    /// Shadow strip between the panels.
    pub separator: Separator,
}

impl DrawerLayout {
    /// Computes the layout of a drawer occupying `bounds`.
    #[must_use]
    pub fn compute(bounds: Rect, progress: f64, state: DrawerState, config: &DrawerConfig) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let visuals = &config.visuals;
        let side_width = config.side_panel_width.resolve(bounds.width());

        let side_x = bounds.x0 - (1.0 - p) * visuals.side_panel_init_offset * side_width;
        let side_panel = Rect::new(side_x, bounds.y0, side_x + side_width, bounds.y1);

        let main_x = bounds.x0 + p * side_width * visuals.main_panel_final_offset;
        let main_panel = Rect::new(main_x, bounds.y0, main_x + bounds.width(), bounds.y1);

        let sep_width = visuals.separator_width.max(0.0);
        let separator = match visuals.top_panel {
            TopPanel::Main => Separator {
                rect: Rect::new(main_panel.x0 - sep_width, bounds.y0, main_panel.x0, bounds.y1),
                orientation: SeparatorOrientation::RightToLeft,
                visible: p > 0.0,
            },
            TopPanel::Side => Separator {
                rect: Rect::new(side_panel.x1, bounds.y0, side_panel.x1 + sep_width, bounds.y1),
                orientation: SeparatorOrientation::LeftToRight,
                visible: p > 0.0,
            },
        };

        Self {
            progress: p,
            state,
            side_panel,
            side_panel_opacity: visuals.side_panel_opacity + (1.0 - visuals.side_panel_opacity) * p,
            side_panel_darkness: visuals.side_panel_darkness * (1.0 - p),
            main_panel,
            main_panel_darkness: visuals.main_panel_darkness * p,
            top_panel: visuals.top_panel,
            separator,
        }
    }
}
