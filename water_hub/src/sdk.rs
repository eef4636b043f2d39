//! SDK entry points and builder for composing the hub app.

use bevy::prelude::*;

use crate::config;
use crate::input::input_plugin;
use crate::scene::{
    buttons_plugin, compositor_plugin, picking_plugin, water_plugin, OverlayBoard, WaterSettings,
};
use crate::sets::HubSet;
use crate::ui::{landing_plugin, panels_plugin, LandingScreen};
use crate::view::{state_for_route, view_plugin, NavBar, RouteHistory, ViewState, HOME_ROUTE};

/// Builder for constructing an Undertow app with customizable pieces.
pub struct HubBuilder {
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    landing_background: Color,
    initial_route: String,
    noise_seed: u32,
    grid_side: usize,
    enable_landing: bool,
    enable_water_render: bool,
}

impl Default for HubBuilder {
    fn default() -> Self {
        Self {
            window_title: "Undertow".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.925, 0.973, 1.0),
            landing_background: Color::WHITE,
            initial_route: "/".to_string(),
            noise_seed: 7,
            grid_side: 128,
            enable_landing: true,
            enable_water_render: true,
        }
    }
}

impl HubBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn landing_background(mut self, color: Color) -> Self {
        self.landing_background = color;
        self
    }

    /// Route the view state machine mounts against (e.g. `/about`).
    pub fn initial_route(mut self, route: impl Into<String>) -> Self {
        self.initial_route = route.into();
        self
    }

    pub fn noise_seed(mut self, seed: u32) -> Self {
        self.noise_seed = seed;
        self
    }

    pub fn grid_side(mut self, side: usize) -> Self {
        self.grid_side = side;
        self
    }

    /// Skip the intro and mount straight into the hub.
    pub fn disable_landing(mut self) -> Self {
        self.enable_landing = false;
        self
    }

    /// Keep the simulation but don't spawn the water mesh.
    pub fn disable_water_render(mut self) -> Self {
        self.enable_water_render = false;
        self
    }

    /// Pulls route, seed, and grid size from the environment.
    pub fn env_config(mut self) -> Self {
        self.initial_route = config::initial_route();
        self.noise_seed = config::noise_seed();
        self.grid_side = config::grid_side();
        self
    }

    /// Builds the Bevy app: plugins, chained tick pipeline, and the initial
    /// view/overlay/navbar/route resources derived from the mount route.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .configure_sets(
            Update,
            (HubSet::Input, HubSet::Pick, HubSet::View, HubSet::Simulate).chain(),
        )
        .add_plugins((
            compositor_plugin,
            buttons_plugin,
            water_plugin,
            input_plugin,
            panels_plugin,
            picking_plugin,
            view_plugin,
        ));

        if self.enable_landing {
            app.add_plugins(landing_plugin)
                .insert_resource(LandingScreen::new(self.landing_background));
        }

        app.insert_resource(WaterSettings {
            grid_side: self.grid_side,
            noise_seed: self.noise_seed,
            render: self.enable_water_render,
        });

        // Mount-time state: the route is consulted exactly once.
        let mut view = state_for_route(&self.initial_route);
        if !self.enable_landing && view.is_landing() {
            view = ViewState::Hub3D;
        }
        let mut overlay = OverlayBoard::default();
        let mut navbar = NavBar::default();
        let mut route = RouteHistory::default();
        match view {
            ViewState::Content(panel) => {
                overlay.show(panel);
                navbar.raise();
                route.push(panel.route());
            }
            ViewState::Hub3D => route.push(HOME_ROUTE),
            ViewState::Landing => {}
        }
        info!(
            "undertow: mounting at {:?} (route {:?})",
            view,
            route.current().unwrap_or("/")
        );

        app.insert_resource(view)
            .insert_resource(overlay)
            .insert_resource(navbar)
            .insert_resource(route);

        app
    }
}
