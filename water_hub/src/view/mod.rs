//! View/navigation state machine: landing → hub → content transitions.
//!
//! A single tagged state owns the mode; everything downstream (water on/off,
//! overlay up/down, landing input) is a computed property of it, so
//! contradictory combinations cannot exist.

mod navbar;
mod route;

pub use navbar::{flatten_scale, logo_scale, NavBar, NavFrame, NavPosition, NAV_RISE, NAV_STEP};
pub use route::{state_for_route, RouteHistory, HOME_ROUTE};

use bevy::prelude::*;

use crate::scene::buttons::{ButtonId, ButtonLabel, HubButton};
use crate::scene::{ButtonAction, OverlayBoard, PanelId};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Landing,
    Hub3D,
    Content(PanelId),
}

impl ViewState {
    /// Water renders and ripples in every mode except an open content panel.
    pub fn show_water(&self) -> bool {
        !matches!(self, ViewState::Content(_))
    }

    pub fn active_content(&self) -> Option<PanelId> {
        match self {
            ViewState::Content(panel) => Some(*panel),
            _ => None,
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, ViewState::Landing)
    }
}

/// Fired once when the landing interaction finishes.
#[derive(Event)]
pub struct LandingComplete;

/// Applies a button activation to the view state, overlay board, navbar,
/// and route history.
///
/// Rules, in precedence order:
/// - hide-all from a content panel returns to the hub, re-enables water,
///   starts the navbar's downward move, and routes home;
/// - hide-all from anywhere else is a no-op;
/// - showing the panel that is already open toggles it closed;
/// - showing a different panel while one is open swaps overlays without
///   restarting the navbar;
/// - showing a panel from the hub opens it and starts the upward move.
pub fn activate(
    action: ButtonAction,
    view: &mut ViewState,
    overlay: &mut OverlayBoard,
    navbar: &mut NavBar,
    route: &mut RouteHistory,
) {
    match action {
        ButtonAction::HideAll => {
            if let ViewState::Content(_) = view {
                overlay.hide_all();
                *view = ViewState::Hub3D;
                navbar.lower();
                route.push(HOME_ROUTE);
            }
        }
        ButtonAction::ShowPanel(panel) => match *view {
            ViewState::Content(current) if current == panel => {
                activate(ButtonAction::HideAll, view, overlay, navbar, route);
            }
            ViewState::Content(_) => {
                overlay.show(panel);
                *view = ViewState::Content(panel);
                route.push(panel.route());
            }
            ViewState::Hub3D => {
                overlay.show(panel);
                *view = ViewState::Content(panel);
                navbar.raise();
                route.push(panel.route());
            }
            // buttons are not hit-testable before the hand-off
            ViewState::Landing => {}
        },
    }
}

/// Landing hand-off: runs once, further calls are no-ops.
pub fn complete_landing(view: &mut ViewState, route: &mut RouteHistory) {
    if view.is_landing() {
        *view = ViewState::Hub3D;
        route.push(HOME_ROUTE);
    }
}

pub fn view_plugin(app: &mut App) {
    app.add_event::<LandingComplete>().add_systems(
        Update,
        (landing_complete_system, navbar_motion_system).in_set(crate::sets::HubSet::View),
    );
}

fn landing_complete_system(
    mut events: EventReader<LandingComplete>,
    mut view: ResMut<ViewState>,
    mut route: ResMut<RouteHistory>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    complete_landing(&mut view, &mut route);
    info!("undertow: landing complete, entering hub");
}

/// Moves the ten cluster meshes by the navbar's per-frame delta and applies
/// the scale interpolation.
fn navbar_motion_system(
    mut navbar: ResMut<NavBar>,
    mut icons: Query<(&mut Transform, &HubButton)>,
    mut labels: Query<&mut Transform, (With<ButtonLabel>, Without<HubButton>)>,
) {
    let Some(frame) = navbar.advance() else {
        return;
    };
    for (mut transform, button) in &mut icons {
        transform.translation.y += frame.delta;
        if button.id == ButtonId::Logo {
            transform.scale = Vec3::splat(logo_scale(frame.progress));
        } else {
            transform.scale.y = flatten_scale(frame.progress);
        }
    }
    for mut transform in &mut labels {
        transform.translation.y += frame.delta;
    }
}
