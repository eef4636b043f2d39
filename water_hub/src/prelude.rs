//! Minimal prelude for SDK consumers.

pub use crate::scene::{ButtonAction, ButtonId, OverlayBoard, PanelId};
pub use crate::sdk::HubBuilder;
pub use crate::view::{NavBar, RouteHistory, ViewState};
