//! Water surface: a subdivided plane displaced by the heightfield each frame.
//!
//! If the simulator fails to construct, the surface stays flat and the app
//! keeps running (degraded mode).

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

use crate::sim::{HeightfieldSim, BOUNDS};
use crate::view::ViewState;

/// Marker for the displaced water mesh.
#[derive(Component)]
pub struct WaterMesh;

/// Simulation settings injected by the SDK builder.
#[derive(Resource)]
pub struct WaterSettings {
    pub grid_side: usize,
    pub noise_seed: u32,
    pub render: bool,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            grid_side: 128,
            noise_seed: 7,
            render: true,
        }
    }
}

/// Wrapper owning the simulator; `None` means degraded (static) mode.
#[derive(Resource, Default)]
pub struct WaterSim {
    sim: Option<HeightfieldSim>,
}

impl WaterSim {
    pub fn set_excitation(&mut self, point: Option<Vec2>) {
        if let Some(sim) = self.sim.as_mut() {
            sim.set_excitation(point);
        }
    }

    pub fn step(&mut self) {
        if let Some(sim) = self.sim.as_mut() {
            sim.step();
        }
    }

    pub fn sim(&self) -> Option<&HeightfieldSim> {
        self.sim.as_ref()
    }

    pub fn degraded(&self) -> bool {
        self.sim.is_none()
    }
}

pub fn water_plugin(app: &mut App) {
    app.init_resource::<WaterSettings>()
        .add_systems(Startup, setup_water)
        .add_systems(
            Update,
            (sync_water_visibility, step_water, apply_displacement)
                .chain()
                .in_set(crate::sets::HubSet::Simulate),
        );
}

fn setup_water(
    mut commands: Commands,
    settings: Res<WaterSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sim = match HeightfieldSim::new(settings.grid_side, BOUNDS, settings.noise_seed) {
        Ok(sim) => Some(sim),
        Err(err) => {
            error!("undertow: heightfield init failed, water is static: {err}");
            None
        }
    };
    commands.insert_resource(WaterSim { sim });

    if !settings.render {
        return;
    }

    let subdivisions = settings.grid_side.saturating_sub(2) as u32;
    let mesh = meshes.add(
        Plane3d::default()
            .mesh()
            .size(BOUNDS, BOUNDS)
            .subdivisions(subdivisions),
    );
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.02, 0.05, 0.08),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Visibility::Visible,
        WaterMesh,
    ));
}

/// Advances the ripple field once per frame while the hub is visible. The
/// field holds still under the landing cover and while a content panel is
/// open; ticking starts at the landing hand-off.
pub fn step_water(view: Res<ViewState>, mut water: ResMut<WaterSim>) {
    if view.is_landing() || !view.show_water() {
        return;
    }
    water.step();
}

/// Writes the current heightfield into the water mesh's vertex positions.
pub fn apply_displacement(
    view: Res<ViewState>,
    water: Res<WaterSim>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Mesh3d, With<WaterMesh>>,
) {
    if !view.show_water() {
        return;
    }
    let Some(sim) = water.sim() else {
        return;
    };
    let Ok(handle) = query.get_single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&handle.0) else {
        return;
    };

    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for position in positions.iter_mut() {
            position[1] = sim.sample_world(position[0], position[2]);
        }
    }
    mesh.compute_smooth_normals();
}

/// Shows or hides the water mesh on mode change.
pub fn sync_water_visibility(
    view: Res<ViewState>,
    mut query: Query<&mut Visibility, With<WaterMesh>>,
) {
    if !view.is_changed() {
        return;
    }
    for mut visibility in &mut query {
        *visibility = if view.show_water() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
