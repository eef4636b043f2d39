//! Overlay UI: content panels and the landing cover.

pub(crate) mod landing;
pub(crate) mod panels;

pub use landing::{landing_plugin, LandingScreen};
pub use panels::{panels_plugin, MountedPanels};
