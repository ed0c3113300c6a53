// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration: sizes, timing, thresholds, and visual presets.

use core::time::Duration;

use crate::easing::Easing;

/// How wide the side panel is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SidePanelWidth {
    /// A fixed width.
    Fixed(f64),
    /// A fraction of the drawer's width, capped at `max`.
    Auto {
        /// Upper bound on the width.
        max: f64,
        /// Share of the drawer's width.
        fraction: f64,
    },
}

impl Default for SidePanelWidth {
    fn default() -> Self {
        Self::Auto {
            max: 250.0,
            fraction: 0.5,
        }
    }
}

impl SidePanelWidth {
    /// Resolves the width for a drawer that is `drawer_width` wide.
    ///
    /// The result is never negative.
    #[must_use]
    pub fn resolve(self, drawer_width: f64) -> f64 {
        let width = match self {
            Self::Fixed(width) => width,
            Self::Auto { max, fraction } => max.min(fraction * drawer_width),
        };
        width.max(0.0)
    }
}

/// Which panel is drawn above the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TopPanel {
    /// The side panel covers the main panel.
    Side,
    /// The main panel covers the side panel.
    #[default]
    Main,
}

/// Visual parameters consumed by [`DrawerLayout`](crate::DrawerLayout).
///
/// All offsets are fractions of the side panel width; darkness and opacity
/// are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    /// How far left of its resting place the side panel starts when closed.
    pub side_panel_init_offset: f64,
    /// Darkness over the side panel when closed, fading out as it opens.
    pub side_panel_darkness: f64,
    /// Opacity of the side panel when closed, rising to `1.0` as it opens.
    pub side_panel_opacity: f64,
    /// How far the main panel has moved right when fully open.
    pub main_panel_final_offset: f64,
    /// Darkness over the main panel when fully open.
    pub main_panel_darkness: f64,
    /// Which panel is on top.
    pub top_panel: TopPanel,
    /// Width of the shadow strip drawn where the panels meet.
    pub separator_width: f64,
}

impl Default for VisualParams {
    fn default() -> Self {
        DrawerPreset::default().visuals()
    }
}

/// Named visual presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawerPreset {
    /// Side panel stays put; the main panel slides the full side width.
    #[default]
    Classic,
    /// Side panel slides in above the main panel, which drifts and darkens.
    SlideAboveAnim,
    /// Side panel slides in above a static main panel.
    SlideAboveSimple,
    /// Side panel fades in above a static main panel.
    FadeIn,
    /// Main panel slides away revealing a side panel that brightens and
    /// catches up from half a width behind.
    RevealBelowAnim,
    /// Main panel slides away revealing a side panel that slides in with it.
    RevealBelowSimple,
}

impl DrawerPreset {
    /// Visual parameters for this preset.
    #[must_use]
    pub fn visuals(self) -> VisualParams {
        let (side_panel_init_offset, side_panel_darkness, side_panel_opacity) = match self {
            Self::Classic => (0.0, 0.0, 1.0),
            Self::SlideAboveAnim | Self::SlideAboveSimple | Self::RevealBelowSimple => {
                (1.0, 0.0, 1.0)
            }
            Self::FadeIn => (0.5, 0.0, 0.0),
            Self::RevealBelowAnim => (0.5, 0.8, 1.0),
        };
        let (main_panel_final_offset, main_panel_darkness) = match self {
            Self::SlideAboveAnim => (0.5, 0.5),
            Self::SlideAboveSimple | Self::FadeIn => (0.0, 0.0),
            Self::Classic | Self::RevealBelowAnim | Self::RevealBelowSimple => (1.0, 0.0),
        };
        let top_panel = match self {
            Self::SlideAboveAnim | Self::SlideAboveSimple | Self::FadeIn => TopPanel::Side,
            Self::Classic | Self::RevealBelowAnim | Self::RevealBelowSimple => TopPanel::Main,
        };
        VisualParams {
            side_panel_init_offset,
            side_panel_darkness,
            side_panel_opacity,
            main_panel_final_offset,
            main_panel_darkness,
            top_panel,
            separator_width: 7.0,
        }
    }
}

/// Behavior and appearance settings for a drawer.
///
/// Defaults: automatic side width (`min(250, 0.5 * width)`), a 20 unit edge
/// strip, 300 ms out-cubic animations, and a 0.7 open threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Width of the side panel.
    pub side_panel_width: SidePanelWidth,
    /// Width of the edge strip that starts a drag while closed.
    pub touch_accept_width: f64,
    /// Duration of open and close animations.
    pub anim_duration: Duration,
    /// Progress past which a released drag settles open.
    pub min_dist_to_open: f64,
    /// Curve used when animating open.
    pub open_transition: Easing,
    /// Curve used when animating closed.
    pub close_transition: Easing,
    /// Appearance of the panels as progress changes.
    pub visuals: VisualParams,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            side_panel_width: SidePanelWidth::default(),
            touch_accept_width: 20.0,
            anim_duration: Duration::from_millis(300),
            min_dist_to_open: 0.7,
            open_transition: Easing::OutCubic,
            close_transition: Easing::OutCubic,
            visuals: VisualParams::default(),
        }
    }
}

impl DrawerConfig {
    /// Sets a fixed side panel width.
    #[must_use]
    pub fn with_side_panel_width(mut self, width: f64) -> Self {
        self.side_panel_width = SidePanelWidth::Fixed(width);
        self
    }

    /// Sets the edge strip width.
    #[must_use]
    pub fn with_touch_accept_width(mut self, width: f64) -> Self {
        self.touch_accept_width = width;
        self
    }

    /// Sets the animation duration.
    #[must_use]
    pub fn with_anim_duration(mut self, duration: Duration) -> Self {
        self.anim_duration = duration;
        self
    }

    /// Sets the open threshold.
    #[must_use]
    pub fn with_min_dist_to_open(mut self, threshold: f64) -> Self {
        self.min_dist_to_open = threshold;
        self
    }

    /// Sets the opening and closing curves.
    #[must_use]
    pub fn with_transitions(mut self, open: Easing, close: Easing) -> Self {
        self.open_transition = open;
        self.close_transition = close;
        self
    }

    /// Applies the visuals of `preset`.
    #[must_use]
    pub fn with_preset(mut self, preset: DrawerPreset) -> Self {
        self.visuals = preset.visuals();
        self
    }

    /// Curve used when animating toward `open`/closed.
    #[must_use]
    pub fn transition(&self, open: bool) -> Easing {
        if open {
            self.open_transition
        } else {
            self.close_transition
        }
    }
}
