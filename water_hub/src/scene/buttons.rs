//! The five hub buttons: typed registry, layout table, and label/icon visual
//! state. Activation goes through an enum-keyed registry and an explicit
//! action table; no scene walking, no name matching.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use crate::scene::compositor::PanelId;
use crate::view::ViewState;

/// Label accent when resting in the hub (teal, 0x00fffc).
pub const LABEL_BASE: LinearRgba = LinearRgba {
    red: 0.0,
    green: 1.0,
    blue: 0.988,
    alpha: 1.0,
};
/// Label accent while the pointer is over the button (red, 0xff0042).
pub const LABEL_HOT: LinearRgba = LinearRgba {
    red: 1.0,
    green: 0.0,
    blue: 0.259,
    alpha: 1.0,
};

/// Depth of the button cluster, just in front of the camera's focus.
pub const BUTTON_Z: f32 = 215.0;

const ICON_HALF_EXTENT: Vec3 = Vec3::new(0.42, 0.42, 0.12);
const LABEL_OFFSET_Y: f32 = -0.62;
pub(crate) const LOGO_REST_SCALE: f32 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Logo,
    About,
    Contact,
    Projects,
    Client,
}

impl ButtonId {
    pub const ALL: [ButtonId; 5] = [
        ButtonId::Logo,
        ButtonId::About,
        ButtonId::Contact,
        ButtonId::Projects,
        ButtonId::Client,
    ];

    /// Activation dispatch table. The logo always routes to hide-all.
    pub fn action(&self) -> ButtonAction {
        match self {
            ButtonId::Logo => ButtonAction::HideAll,
            ButtonId::About => ButtonAction::ShowPanel(PanelId::About),
            ButtonId::Contact => ButtonAction::ShowPanel(PanelId::Contact),
            ButtonId::Projects => ButtonAction::ShowPanel(PanelId::Projects),
            ButtonId::Client => ButtonAction::ShowPanel(PanelId::Client),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    ShowPanel(PanelId),
    HideAll,
}

/// Cluster layout, switched on viewport aspect at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementDirection {
    Horizontal,
    Vertical,
}

pub fn placement_for_aspect(aspect: f32) -> PlacementDirection {
    if aspect < 1.0 {
        PlacementDirection::Vertical
    } else {
        PlacementDirection::Horizontal
    }
}

/// Per-button anchors for the two cluster layouts.
const LAYOUT: [(ButtonId, Vec2, Vec2); 5] = [
    (ButtonId::Logo, Vec2::new(-2.2, 0.0), Vec2::new(0.0, 1.8)),
    (ButtonId::About, Vec2::new(-0.97, 0.0), Vec2::new(0.0, 0.72)),
    (ButtonId::Contact, Vec2::new(0.0, 0.0), Vec2::new(0.0, -0.15)),
    (ButtonId::Projects, Vec2::new(0.97, 0.0), Vec2::new(0.0, -1.02)),
    (ButtonId::Client, Vec2::new(1.94, 0.0), Vec2::new(0.0, -1.89)),
];

pub fn anchor(id: ButtonId, direction: PlacementDirection) -> Vec2 {
    let (_, horizontal, vertical) = LAYOUT
        .iter()
        .find(|(layout_id, _, _)| *layout_id == id)
        .copied()
        .expect("every ButtonId has a layout row");
    match direction {
        PlacementDirection::Horizontal => horizontal,
        PlacementDirection::Vertical => vertical,
    }
}

/// Marker + identity on icon entities.
#[derive(Component)]
pub struct HubButton {
    pub id: ButtonId,
}

/// Marker + identity on label entities.
#[derive(Component)]
pub struct ButtonLabel {
    pub id: ButtonId,
}

pub struct ButtonEntry {
    pub icon: Entity,
    pub label: Entity,
    pub icon_material: Handle<StandardMaterial>,
    pub label_material: Handle<StandardMaterial>,
}

/// Typed registry of the five buttons. Entries appear once the scene is
/// spawned and are never removed; lookups before then come back `None` and
/// callers skip the dependent work for that tick.
#[derive(Resource, Default)]
pub struct ButtonRegistry {
    entries: HashMap<ButtonId, ButtonEntry>,
    pub hovered: Option<ButtonId>,
}

impl ButtonRegistry {
    pub fn insert(&mut self, id: ButtonId, entry: ButtonEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: ButtonId) -> Option<&ButtonEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ButtonId, &ButtonEntry)> {
        self.entries.iter()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == ButtonId::ALL.len()
    }
}

pub fn buttons_plugin(app: &mut App) {
    app.init_resource::<ButtonRegistry>()
        .add_systems(Startup, spawn_hub_buttons)
        .add_systems(Update, sync_button_visuals.in_set(crate::sets::HubSet::View));
}

fn spawn_hub_buttons(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<ButtonRegistry>,
    windows: Query<&Window>,
) {
    let aspect = windows
        .get_single()
        .map(|w| w.width() / w.height())
        .unwrap_or(16.0 / 9.0);
    let direction = placement_for_aspect(aspect);

    let icon_mesh = meshes.add(Cuboid::new(
        ICON_HALF_EXTENT.x * 2.0,
        ICON_HALF_EXTENT.y * 2.0,
        ICON_HALF_EXTENT.z * 2.0,
    ));
    let label_mesh = meshes.add(Cuboid::new(0.9, 0.18, 0.05));

    for id in ButtonId::ALL {
        let at = anchor(id, direction);
        let scale = if id == ButtonId::Logo {
            Vec3::splat(LOGO_REST_SCALE)
        } else {
            Vec3::ONE
        };

        let icon_material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.196, 0.224, 0.431, 1.0),
            emissive: LinearRgba::rgb(0.287, 0.299, 0.471),
            metallic: 1.0,
            perceptual_roughness: 0.5,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let label_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.016, 0.016, 0.016),
            emissive: LABEL_BASE,
            metallic: 1.0,
            perceptual_roughness: 0.2,
            ..default()
        });

        let icon = commands
            .spawn((
                Mesh3d(icon_mesh.clone()),
                MeshMaterial3d(icon_material.clone()),
                Transform::from_xyz(at.x, at.y, BUTTON_Z).with_scale(scale),
                Aabb::from_min_max(-ICON_HALF_EXTENT, ICON_HALF_EXTENT),
                Visibility::Visible,
                HubButton { id },
            ))
            .id();

        let label = commands
            .spawn((
                Mesh3d(label_mesh.clone()),
                MeshMaterial3d(label_material.clone()),
                Transform::from_xyz(at.x, at.y + LABEL_OFFSET_Y, BUTTON_Z),
                Visibility::Visible,
                ButtonLabel { id },
            ))
            .id();

        registry.insert(
            id,
            ButtonEntry {
                icon,
                label,
                icon_material,
                label_material,
            },
        );
    }

    info!("undertow: spawned hub buttons ({direction:?})");
}

fn set_label_emissive(
    materials: &mut Assets<StandardMaterial>,
    entry: &ButtonEntry,
    color: LinearRgba,
) {
    if let Some(material) = materials.get_mut(&entry.label_material) {
        material.emissive = color;
    }
}

fn set_icon_opacity(materials: &mut Assets<StandardMaterial>, entry: &ButtonEntry, alpha: f32) {
    if let Some(material) = materials.get_mut(&entry.icon_material) {
        material.base_color = material.base_color.with_alpha(alpha);
    }
}

/// Water-precedence reset: every label back to the base accent. Runs before
/// the button pass each frame so a button hit can override it.
pub fn reset_labels_to_base(registry: &ButtonRegistry, materials: &mut Assets<StandardMaterial>) {
    for (_, entry) in registry.iter() {
        set_label_emissive(materials, entry, LABEL_BASE);
    }
}

/// Applies the per-frame hover result for the current mode.
///
/// Hub: the nearest hit label goes hot, the rest return to base. Content:
/// icons are invisible by default; the hovered one is driven opaque and the
/// previous target is reset, keeping at most one icon visible.
pub fn apply_hover(
    view: &ViewState,
    registry: &mut ButtonRegistry,
    materials: &mut Assets<StandardMaterial>,
    hit: Option<ButtonId>,
) {
    match view {
        ViewState::Hub3D => {
            for (id, entry) in registry.entries.iter() {
                let color = if Some(*id) == hit { LABEL_HOT } else { LABEL_BASE };
                set_label_emissive(materials, entry, color);
            }
            registry.hovered = hit;
        }
        ViewState::Content(_) => {
            if registry.hovered != hit {
                if let Some(previous) = registry.hovered.and_then(|id| registry.entries.get(&id)) {
                    set_icon_opacity(materials, previous, 0.0);
                }
                registry.hovered = hit;
            }
            if let Some(entry) = hit.and_then(|id| registry.entries.get(&id)) {
                set_icon_opacity(materials, entry, 1.0);
            }
        }
        ViewState::Landing => {}
    }
}

/// Mode-change visual sync: icon opacity and label accent for the mode just
/// entered. Runs on `ViewState` change detection, including the first frame.
pub fn sync_button_visuals(
    view: Res<ViewState>,
    mut registry: ResMut<ButtonRegistry>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !view.is_changed() {
        return;
    }
    match *view {
        ViewState::Content(_) => {
            for (_, entry) in registry.iter() {
                set_icon_opacity(&mut materials, entry, 0.0);
                set_label_emissive(&mut materials, entry, LinearRgba::BLACK);
            }
        }
        ViewState::Hub3D => {
            for (_, entry) in registry.iter() {
                set_icon_opacity(&mut materials, entry, 1.0);
                set_label_emissive(&mut materials, entry, LABEL_BASE);
            }
        }
        ViewState::Landing => {}
    }
    registry.hovered = None;
}
