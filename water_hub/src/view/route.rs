//! Pushed-route history standing in for the browser location bar.

use bevy::prelude::*;

use crate::scene::PanelId;
use crate::view::ViewState;

pub const HOME_ROUTE: &str = "/home";

#[derive(Resource, Debug, Default)]
pub struct RouteHistory {
    stack: Vec<String>,
}

impl RouteHistory {
    /// Pushes a path unless it is already the current location.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.current() != Some(path.as_str()) {
            self.stack.push(path);
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Initial view state for a mount-time route: the root path lands on the
/// intro, a known panel path opens that panel directly, anything else skips
/// straight to the hub.
pub fn state_for_route(path: &str) -> ViewState {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return ViewState::Landing;
    }
    match PanelId::from_route(trimmed) {
        Some(panel) => ViewState::Content(panel),
        None => ViewState::Hub3D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pushes_collapse() {
        let mut history = RouteHistory::default();
        history.push("/about");
        history.push("/about");
        history.push("/home");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("/home"));
    }

    #[test]
    fn root_mounts_on_landing() {
        assert_eq!(state_for_route("/"), ViewState::Landing);
        assert_eq!(state_for_route(""), ViewState::Landing);
    }

    #[test]
    fn panel_routes_mount_open() {
        assert_eq!(
            state_for_route("/contact"),
            ViewState::Content(PanelId::Contact)
        );
    }

    #[test]
    fn unknown_routes_mount_on_hub() {
        assert_eq!(state_for_route("/home"), ViewState::Hub3D);
        assert_eq!(state_for_route("/xyz"), ViewState::Hub3D);
    }
}
