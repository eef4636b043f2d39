//! Pointer ray casting against the water plane and the button icons.
//!
//! Rays are built from the shared camera's transform and projection rather
//! than the render pipeline's computed matrices, so the same math runs
//! headless. AABB tests use the slab method; egui pointer capture suppresses
//! activation, matching how the overlay absorbs input when it is on top.

use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy_egui::EguiContexts;

use crate::input::PointerSample;
use crate::scene::buttons::{self, ButtonId, ButtonRegistry, HubButton};
use crate::scene::water::WaterSim;
use crate::scene::OverlayBoard;
use crate::sim::BOUNDS;
use crate::view::{self, NavBar, RouteHistory, ViewState};

pub fn picking_plugin(app: &mut App) {
    app.add_systems(
        Update,
        (hover_system, press_system).chain().in_set(crate::sets::HubSet::Pick),
    );
}

pub struct PointerRay {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Ray through the given NDC point for a perspective camera.
pub fn pointer_ray(camera: &Transform, projection: &PerspectiveProjection, ndc: Vec2) -> PointerRay {
    let half_v = (projection.fov * 0.5).tan();
    let local = Vec3::new(
        ndc.x * half_v * projection.aspect_ratio,
        ndc.y * half_v,
        -1.0,
    );
    PointerRay {
        origin: camera.translation,
        dir: (camera.rotation * local).normalize(),
    }
}

/// Slab-method ray/AABB intersection; returns the entry distance.
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let inv_dir = 1.0 / dir;
    let t1 = (aabb_min - origin) * inv_dir;
    let t2 = (aabb_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter <= t_exit && t_exit > 0.0 {
        Some(t_enter.max(0.0))
    } else {
        None
    }
}

/// Nearest intersection with the water-hit plane (y = 0, bounded), as plane
/// (x, z) coordinates.
pub fn water_plane_hit(ray: &PointerRay) -> Option<Vec2> {
    if ray.dir.y.abs() < 1e-6 {
        return None;
    }
    let t = -ray.origin.y / ray.dir.y;
    if t <= 0.0 {
        return None;
    }
    let point = ray.origin + ray.dir * t;
    let half = BOUNDS / 2.0;
    (point.x.abs() <= half && point.z.abs() <= half).then_some(Vec2::new(point.x, point.z))
}

fn scaled_aabb(transform: &GlobalTransform, aabb: &Aabb) -> (Vec3, Vec3) {
    let computed = transform.compute_transform();
    let center: Vec3 = Vec3::from(aabb.center) * computed.scale + computed.translation;
    let half: Vec3 = Vec3::from(aabb.half_extents) * computed.scale;
    (center - half, center + half)
}

/// Intersections with the registered buttons, nearest first.
pub fn button_hits(
    ray: &PointerRay,
    buttons: &[(ButtonId, Vec3, Vec3)],
) -> Vec<(ButtonId, f32)> {
    let mut hits: Vec<(ButtonId, f32)> = buttons
        .iter()
        .filter_map(|&(id, min, max)| {
            ray_aabb_intersect(ray.origin, ray.dir, min, max).map(|dist| (id, dist))
        })
        .collect();
    hits.sort_by(|a, b| a.1.total_cmp(&b.1));
    hits
}

fn gather_buttons(query: &Query<(&GlobalTransform, &Aabb, &HubButton)>) -> Vec<(ButtonId, Vec3, Vec3)> {
    query
        .iter()
        .map(|(transform, aabb, button)| {
            let (min, max) = scaled_aabb(transform, aabb);
            (button.id, min, max)
        })
        .collect()
}

/// Per-frame hover pass: recomputed only when the pointer moved since the
/// last sample; clears the moved flag. Water state is evaluated before the
/// button state so button hits can override the label reset.
pub fn hover_system(
    mut sample: ResMut<PointerSample>,
    cameras: Query<(&Transform, &Projection), With<Camera3d>>,
    view: Res<ViewState>,
    mut registry: ResMut<ButtonRegistry>,
    button_query: Query<(&GlobalTransform, &Aabb, &HubButton)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut water: ResMut<WaterSim>,
) {
    if view.is_landing() {
        return;
    }
    if !sample.take_moved() {
        return;
    }
    let Ok((camera, Projection::Perspective(projection))) = cameras.get_single() else {
        return;
    };
    if !registry.is_complete() {
        return;
    }

    let ray = pointer_ray(camera, projection, sample.ndc);

    match water_plane_hit(&ray) {
        Some(point) => {
            // water precedence over button highlight is a hub-mode rule;
            // labels stay dark while a content panel is open
            if matches!(*view, ViewState::Hub3D) {
                buttons::reset_labels_to_base(&registry, &mut materials);
            }
            water.set_excitation(Some(point));
        }
        None => water.set_excitation(None),
    }

    let hits = button_hits(&ray, &gather_buttons(&button_query));
    let nearest = hits.first().map(|&(id, _)| id);
    buttons::apply_hover(&view, &mut registry, &mut materials, nearest);
}

/// Button-press pass: the nearest intersected button's action dispatches
/// exactly once per press.
#[allow(clippy::too_many_arguments)]
pub fn press_system(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    sample: Res<PointerSample>,
    cameras: Query<(&Transform, &Projection), With<Camera3d>>,
    mut contexts: EguiContexts,
    registry: Res<ButtonRegistry>,
    button_query: Query<(&GlobalTransform, &Aabb, &HubButton)>,
    mut view: ResMut<ViewState>,
    mut overlay: ResMut<OverlayBoard>,
    mut navbar: ResMut<NavBar>,
    mut route: ResMut<RouteHistory>,
) {
    let pressed = mouse.just_pressed(MouseButton::Left) || touches.any_just_pressed();
    if !pressed || view.is_landing() {
        return;
    }
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }
    let Ok((camera, Projection::Perspective(projection))) = cameras.get_single() else {
        return;
    };
    if !registry.is_complete() {
        return;
    }

    let ray = pointer_ray(camera, projection, sample.ndc);
    let hits = button_hits(&ray, &gather_buttons(&button_query));
    if let Some(&(id, _)) = hits.first() {
        view::activate(id.action(), &mut view, &mut overlay, &mut navbar, &mut route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scene::buttons::{ButtonEntry, LABEL_BASE, LABEL_HOT};
    use crate::scene::PanelId;

    fn camera() -> (Transform, PerspectiveProjection) {
        (
            Transform::from_xyz(0.0, 30.0, 224.0).looking_at(Vec3::ZERO, Vec3::Y),
            PerspectiveProjection {
                fov: 30f32.to_radians(),
                near: 0.25,
                far: 4000.0,
                aspect_ratio: 16.0 / 9.0,
            },
        )
    }

    #[test]
    fn center_ray_points_at_origin() {
        let (transform, projection) = camera();
        let ray = pointer_ray(&transform, &projection, Vec2::ZERO);
        let to_origin = (Vec3::ZERO - ray.origin).normalize();
        assert!(ray.dir.dot(to_origin) > 0.9999);
    }

    #[test]
    fn center_ray_hits_water_plane() {
        let (transform, projection) = camera();
        let ray = pointer_ray(&transform, &projection, Vec2::ZERO);
        let hit = water_plane_hit(&ray).expect("center ray reaches the plane");
        // camera looks at the origin, so the hit lands on it
        assert!(hit.length() < 1e-3);
    }

    #[test]
    fn upward_ray_misses_water_plane() {
        let ray = PointerRay {
            origin: Vec3::new(0.0, 30.0, 224.0),
            dir: Vec3::new(0.0, 0.5, -0.5).normalize(),
        };
        assert_eq!(water_plane_hit(&ray), None);
    }

    #[test]
    fn aabb_hit_and_miss() {
        let origin = Vec3::new(0.0, 0.0, 10.0);
        let dir = Vec3::NEG_Z;
        assert!(ray_aabb_intersect(origin, dir, Vec3::splat(-1.0), Vec3::ONE).is_some());
        assert!(
            ray_aabb_intersect(origin, Vec3::Z, Vec3::splat(-1.0), Vec3::ONE).is_none(),
            "box behind the ray"
        );
    }

    /// Headless app with the camera, the five registered buttons, and the
    /// hover pass; labels start at `label_emissive`.
    fn hover_app(view: ViewState, label_emissive: LinearRgba) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<PointerSample>()
            .init_resource::<ButtonRegistry>()
            .insert_resource(view)
            .insert_resource(WaterSim::default())
            .add_systems(Update, hover_system);

        let (transform, projection) = camera();
        app.world_mut()
            .spawn((Camera3d::default(), Projection::Perspective(projection), transform));

        let mut handles = Vec::new();
        {
            let mut materials = app
                .world_mut()
                .resource_mut::<Assets<StandardMaterial>>();
            for _ in ButtonId::ALL {
                let icon = materials.add(StandardMaterial::default());
                let label = materials.add(StandardMaterial {
                    emissive: label_emissive,
                    ..default()
                });
                handles.push((icon, label));
            }
        }
        for (id, (icon_material, label_material)) in ButtonId::ALL.into_iter().zip(handles) {
            let at = buttons::anchor(id, buttons::PlacementDirection::Horizontal);
            let transform = Transform::from_xyz(at.x, at.y, 215.0);
            let icon = app
                .world_mut()
                .spawn((
                    HubButton { id },
                    transform,
                    GlobalTransform::from(transform),
                    Aabb::from_min_max(Vec3::splat(-0.42), Vec3::splat(0.42)),
                ))
                .id();
            app.world_mut().resource_mut::<ButtonRegistry>().insert(
                id,
                ButtonEntry {
                    icon,
                    label: Entity::PLACEHOLDER,
                    icon_material,
                    label_material,
                },
            );
        }
        app
    }

    /// Points the pointer below the button cluster, at open water.
    fn move_pointer_to_water(app: &mut App) {
        let mut sample = app.world_mut().resource_mut::<PointerSample>();
        sample.ndc = Vec2::new(0.0, -0.6);
        sample.moved = true;
    }

    fn label_colors(app: &App) -> Vec<LinearRgba> {
        let registry = app.world().resource::<ButtonRegistry>();
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        registry
            .iter()
            .map(|(_, entry)| materials.get(&entry.label_material).unwrap().emissive)
            .collect()
    }

    #[test]
    fn water_hover_resets_labels_in_hub_mode() {
        let mut app = hover_app(ViewState::Hub3D, LABEL_HOT);
        move_pointer_to_water(&mut app);
        app.update();
        assert!(label_colors(&app).iter().all(|&color| color == LABEL_BASE));
    }

    #[test]
    fn water_hover_keeps_labels_dark_behind_content() {
        let mut app = hover_app(ViewState::Content(PanelId::About), LinearRgba::BLACK);
        move_pointer_to_water(&mut app);
        app.update();
        assert!(
            label_colors(&app)
                .iter()
                .all(|&color| color == LinearRgba::BLACK),
            "a water hover lit the labels behind an open panel"
        );
    }

    #[test]
    fn nearest_button_sorts_first() {
        let ray = PointerRay {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::NEG_Z,
        };
        let boxes = vec![
            (
                ButtonId::About,
                Vec3::new(-0.5, -0.5, -3.0),
                Vec3::new(0.5, 0.5, -2.0),
            ),
            (
                ButtonId::Logo,
                Vec3::new(-0.5, -0.5, 4.0),
                Vec3::new(0.5, 0.5, 5.0),
            ),
        ];
        let hits = button_hits(&ray, &boxes);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, ButtonId::Logo);
    }
}
