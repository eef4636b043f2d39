//! Interactive hub controller — dual-scene composition, heightfield water,
//! pointer picking, and the landing → hub → content state machine.
//!
//! Library root: config, input, scene, simulation, view, and UI modules.

pub mod config;
pub mod input;
pub mod scene;
pub mod sets;
pub mod sim;
pub mod ui;
pub mod view;

pub mod prelude;
pub mod sdk;

pub use scene::{ButtonAction, ButtonId, ButtonRegistry, OverlayBoard, PanelId};
pub use sim::{HeightfieldError, HeightfieldSim};
pub use view::{NavBar, NavPosition, RouteHistory, ViewState};
