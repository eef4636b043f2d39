//! Navbar cluster animation between its two anchors.
//!
//! The button cluster slides between the middle of the view (hub mode) and
//! the top (content mode) by a fixed per-frame step, while the logo's scale
//! and the other icons' vertical scale interpolate with the motion.

use bevy::prelude::*;

/// World units moved per frame while in motion.
pub const NAV_STEP: f32 = 0.3;
/// Total vertical travel between the two anchors.
pub const NAV_RISE: f32 = 1.8;

const FLATTEN_SCALE_TOP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPosition {
    Middle,
    Top,
}

/// One frame of motion handed to the transform systems.
#[derive(Debug, PartialEq)]
pub struct NavFrame {
    /// Vertical delta to add to every cluster mesh this frame.
    pub delta: f32,
    /// 0 at the middle anchor, 1 at the top anchor.
    pub progress: f32,
}

#[derive(Resource, Debug)]
pub struct NavBar {
    position: NavPosition,
    in_motion: bool,
    offset: f32,
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            position: NavPosition::Middle,
            in_motion: false,
            offset: 0.0,
        }
    }
}

impl NavBar {
    pub fn position(&self) -> NavPosition {
        self.position
    }

    pub fn in_motion(&self) -> bool {
        self.in_motion
    }

    pub fn progress(&self) -> f32 {
        self.offset / NAV_RISE
    }

    /// Starts the upward move. No-op at the top anchor or mid-motion.
    pub fn raise(&mut self) {
        if self.position == NavPosition::Middle && !self.in_motion {
            self.in_motion = true;
        }
    }

    /// Starts the downward move. No-op at the middle anchor or mid-motion.
    pub fn lower(&mut self) {
        if self.position == NavPosition::Top && !self.in_motion {
            self.in_motion = true;
        }
    }

    /// Advances one frame of motion. Returns `None` at rest; reaching an
    /// anchor flips `in_motion` off and swaps the position.
    pub fn advance(&mut self) -> Option<NavFrame> {
        if !self.in_motion {
            return None;
        }
        let target = match self.position {
            NavPosition::Middle => NAV_RISE,
            NavPosition::Top => 0.0,
        };
        let remaining = target - self.offset;
        if remaining.abs() < 1e-4 {
            self.in_motion = false;
            self.position = match self.position {
                NavPosition::Middle => NavPosition::Top,
                NavPosition::Top => NavPosition::Middle,
            };
            return None;
        }
        let delta = remaining.clamp(-NAV_STEP, NAV_STEP);
        self.offset += delta;
        Some(NavFrame {
            delta,
            progress: self.offset / NAV_RISE,
        })
    }
}

/// Logo scale at a given motion progress: 1.3 in the middle, 1.0 at the top.
pub fn logo_scale(progress: f32) -> f32 {
    crate::scene::buttons::LOGO_REST_SCALE + (1.0 - crate::scene::buttons::LOGO_REST_SCALE) * progress
}

/// Vertical scale of the non-logo icons: 1.0 in the middle, 0.5 at the top.
pub fn flatten_scale(progress: f32) -> f32 {
    1.0 + (FLATTEN_SCALE_TOP - 1.0) * progress
}
