//! Update-schedule ordering for the per-tick pipeline.
//!
//! Each frame runs input normalization, then hit-testing, then view-state
//! bookkeeping, then the water simulation step. The sets are chained in
//! [`crate::sdk::HubBuilder::build`].

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubSet {
    /// Pointer/touch/resize events folded into shared state.
    Input,
    /// Ray casts against the water plane and buttons, hover + activation.
    Pick,
    /// View-state transitions, visual sync, navbar motion.
    View,
    /// Heightfield step and mesh displacement.
    Simulate,
}
