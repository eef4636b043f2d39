//! Input router: mouse, single-touch, and resize events folded into
//! device-independent shared state consumed on the next tick.

use bevy::input::touch::TouchPhase;
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use crate::scene::Compositor;
use crate::sets::HubSet;

/// Latest pointer position in normalized device coordinates ([-1,1]²,
/// +y up), plus a moved-since-last-sample flag the hit-test pass consumes.
#[derive(Resource, Default)]
pub struct PointerSample {
    pub ndc: Vec2,
    pub moved: bool,
}

impl PointerSample {
    /// Folds a screen-space position (origin top-left) into NDC.
    pub fn set_from_screen(&mut self, position: Vec2, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.ndc = Vec2::new(
            (position.x / width) * 2.0 - 1.0,
            -((position.y / height) * 2.0 - 1.0),
        );
        self.moved = true;
    }

    /// Reads and clears the moved flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}

pub fn input_plugin(app: &mut App) {
    app.init_resource::<PointerSample>()
        .add_systems(
            Update,
            (pointer_sample_system, viewport_resize_system).in_set(HubSet::Input),
        );
}

fn pointer_sample_system(
    mut cursor_events: EventReader<CursorMoved>,
    mut touch_events: EventReader<TouchInput>,
    windows: Query<&Window>,
    mut sample: ResMut<PointerSample>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());

    for event in cursor_events.read() {
        sample.set_from_screen(event.position, width, height);
    }
    for event in touch_events.read() {
        if matches!(event.phase, TouchPhase::Started | TouchPhase::Moved) {
            sample.set_from_screen(event.position, width, height);
        }
    }
}

fn viewport_resize_system(
    mut events: EventReader<WindowResized>,
    compositor: Option<ResMut<Compositor>>,
    mut cameras: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(mut compositor) = compositor else {
        return;
    };
    for event in events.read() {
        match compositor.resize(event.width, event.height) {
            Ok(aspect) => {
                for mut projection in &mut cameras {
                    if let Projection::Perspective(perspective) = projection.as_mut() {
                        perspective.aspect_ratio = aspect;
                    }
                }
            }
            Err(err) => warn!("undertow: ignoring resize: {err}"),
        }
    }
}
