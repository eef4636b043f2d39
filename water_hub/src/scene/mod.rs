//! 3D scene: shared camera, hub buttons, water surface, picking.

pub(crate) mod buttons;
pub(crate) mod compositor;
pub(crate) mod picking;
pub(crate) mod water;

pub use buttons::{
    buttons_plugin, placement_for_aspect, ButtonAction, ButtonEntry, ButtonId, ButtonLabel,
    ButtonRegistry, HubButton, PlacementDirection, LABEL_BASE, LABEL_HOT,
};
pub use compositor::{
    compositor_plugin, Compositor, CompositorError, OverlayBoard, PanelId, Z_OFF, Z_ON,
};
pub use picking::{
    button_hits, picking_plugin, pointer_ray, ray_aabb_intersect, water_plane_hit, PointerRay,
};
pub use water::{
    apply_displacement, step_water, sync_water_visibility, water_plugin, WaterMesh, WaterSettings,
    WaterSim,
};
