//! Shared camera plus the overlay board that keeps the 2D content panels in
//! registration with the 3D scene.
//!
//! The overlay pass is egui, but the board still tracks a depth slot per
//! panel so "on screen" and "off screen" stay explicit, testable state
//! rather than a side effect of what happened to be drawn.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

/// Depth at which an overlay panel sits in front of the camera.
pub const Z_ON: f32 = 215.0;
/// Parking depth guaranteeing zero visual or interaction presence.
pub const Z_OFF: f32 = 10_000.0;

pub const CAMERA_FOV_DEG: f32 = 30.0;
pub const CAMERA_NEAR: f32 = 0.25;
pub const CAMERA_FAR: f32 = 4000.0;
pub const CAMERA_POS: Vec3 = Vec3::new(0.0, 30.0, 224.0);

const FALLBACK_VIEWPORT: (f32, f32) = (1280.0, 720.0);

/// The four externally-supplied content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    About,
    Contact,
    Projects,
    Client,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [
        PanelId::About,
        PanelId::Contact,
        PanelId::Projects,
        PanelId::Client,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::About => "about",
            PanelId::Contact => "contact",
            PanelId::Projects => "projects",
            PanelId::Client => "client",
        }
    }

    pub fn route(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Matches a route path (`/about`, `about`) against the known panels.
    pub fn from_route(path: &str) -> Option<PanelId> {
        match path.trim_start_matches('/') {
            "about" => Some(PanelId::About),
            "contact" => Some(PanelId::Contact),
            "projects" => Some(PanelId::Projects),
            "client" => Some(PanelId::Client),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CompositorError {
    AlreadyInitialized,
    BadViewport { width: f32, height: f32 },
}

impl fmt::Display for CompositorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositorError::AlreadyInitialized => write!(f, "compositor already initialized"),
            CompositorError::BadViewport { width, height } => {
                write!(f, "viewport {width}x{height} has a non-positive dimension")
            }
        }
    }
}

impl std::error::Error for CompositorError {}

/// Viewport bookkeeping for the shared camera.
#[derive(Resource, Default)]
pub struct Compositor {
    initialized: bool,
    width: f32,
    height: f32,
}

impl Compositor {
    /// First-call-only setup. A second call is an error.
    pub fn initialize(&mut self, width: f32, height: f32) -> Result<(), CompositorError> {
        if self.initialized {
            return Err(CompositorError::AlreadyInitialized);
        }
        Self::check_viewport(width, height)?;
        self.initialized = true;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Updates the tracked viewport; returns the new aspect ratio.
    /// Safe to call from a resize notification at any time after init.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<f32, CompositorError> {
        Self::check_viewport(width, height)?;
        self.width = width;
        self.height = height;
        Ok(self.aspect())
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    fn check_viewport(width: f32, height: f32) -> Result<(), CompositorError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CompositorError::BadViewport { width, height });
        }
        Ok(())
    }
}

/// Depth slot per content panel plus the overlay/3D draw-order flag.
#[derive(Resource)]
pub struct OverlayBoard {
    depths: HashMap<PanelId, f32>,
    above_world: bool,
}

impl Default for OverlayBoard {
    fn default() -> Self {
        Self {
            depths: PanelId::ALL.iter().map(|&p| (p, Z_OFF)).collect(),
            above_world: false,
        }
    }
}

impl OverlayBoard {
    /// Brings `panel` on screen and parks every other panel off screen.
    pub fn show(&mut self, panel: PanelId) {
        for depth in self.depths.values_mut() {
            *depth = Z_OFF;
        }
        self.depths.insert(panel, Z_ON);
        self.above_world = true;
    }

    /// Parks every panel off screen and drops the overlay below the 3D pass.
    pub fn hide_all(&mut self) {
        for depth in self.depths.values_mut() {
            *depth = Z_OFF;
        }
        self.above_world = false;
    }

    /// The panel currently at the on-screen depth, if any.
    pub fn visible(&self) -> Option<PanelId> {
        self.depths
            .iter()
            .find(|(_, &depth)| depth == Z_ON)
            .map(|(&panel, _)| panel)
    }

    pub fn depth(&self, panel: PanelId) -> f32 {
        self.depths.get(&panel).copied().unwrap_or(Z_OFF)
    }

    pub fn is_above_world(&self) -> bool {
        self.above_world
    }
}

pub fn compositor_plugin(app: &mut App) {
    app.init_resource::<OverlayBoard>()
        .add_systems(Startup, setup_compositor);
}

fn setup_compositor(mut commands: Commands, windows: Query<&Window>) {
    let (width, height) = windows
        .get_single()
        .map(|w| (w.width(), w.height()))
        .unwrap_or(FALLBACK_VIEWPORT);

    let mut compositor = Compositor::default();
    if let Err(err) = compositor.initialize(width, height) {
        error!("undertow: compositor init failed: {err}");
    }

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect_ratio: compositor.aspect(),
        }),
        Transform::from_translation(CAMERA_POS).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(4., 8., 4.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
    });
    commands.insert_resource(compositor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_is_first_call_only() {
        let mut compositor = Compositor::default();
        assert!(compositor.initialize(1280.0, 720.0).is_ok());
        assert_eq!(
            compositor.initialize(800.0, 600.0),
            Err(CompositorError::AlreadyInitialized)
        );
    }

    #[test]
    fn rejects_malformed_viewport() {
        let mut compositor = Compositor::default();
        assert!(matches!(
            compositor.initialize(0.0, 720.0),
            Err(CompositorError::BadViewport { .. })
        ));
        compositor.initialize(1280.0, 720.0).unwrap();
        assert!(matches!(
            compositor.resize(1280.0, -1.0),
            Err(CompositorError::BadViewport { .. })
        ));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut compositor = Compositor::default();
        compositor.initialize(1280.0, 720.0).unwrap();
        let aspect = compositor.resize(800.0, 800.0).unwrap();
        assert_eq!(aspect, 1.0);
    }

    #[test]
    fn at_most_one_panel_on_screen() {
        let mut board = OverlayBoard::default();
        board.show(PanelId::About);
        board.show(PanelId::Contact);

        let on_screen: Vec<_> = PanelId::ALL
            .iter()
            .filter(|&&p| board.depth(p) == Z_ON)
            .collect();
        assert_eq!(on_screen, vec![&PanelId::Contact]);
        assert!(board.is_above_world());
    }

    #[test]
    fn hide_all_parks_everything() {
        let mut board = OverlayBoard::default();
        board.show(PanelId::Projects);
        board.hide_all();

        assert_eq!(board.visible(), None);
        assert!(!board.is_above_world());
        assert!(PanelId::ALL.iter().all(|&p| board.depth(p) == Z_OFF));
    }

    #[test]
    fn route_round_trip() {
        for panel in PanelId::ALL {
            assert_eq!(PanelId::from_route(&panel.route()), Some(panel));
        }
        assert_eq!(PanelId::from_route("/home"), None);
    }
}
