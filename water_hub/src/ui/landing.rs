//! Landing cover: a full-screen intro that hands off to the hub on the first
//! click or touch, then disables its own input for the rest of the session.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::view::{LandingComplete, ViewState};

#[derive(Resource)]
pub struct LandingScreen {
    pub background: Color,
    input_enabled: bool,
}

impl LandingScreen {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            input_enabled: true,
        }
    }

    pub fn disable_input(&mut self) {
        self.input_enabled = false;
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

pub fn landing_plugin(app: &mut App) {
    app.init_resource::<LandingScreen>()
        .add_systems(Update, (landing_render_system, landing_click_system));
}

fn landing_render_system(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    landing: Res<LandingScreen>,
) {
    if !view.is_landing() {
        return;
    }
    let [r, g, b, _] = landing.background.to_srgba().to_u8_array();

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui::Color32::from_rgb(r, g, b)))
        .show(contexts.ctx_mut(), |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("undertow\n\nclick anywhere to enter")
                        .size(20.0)
                        .color(egui::Color32::from_rgb(40, 50, 70)),
                );
            });
        });
}

fn landing_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    view: Res<ViewState>,
    mut landing: ResMut<LandingScreen>,
    mut completions: EventWriter<LandingComplete>,
) {
    if !view.is_landing() || !landing.input_enabled() {
        return;
    }
    if mouse.just_pressed(MouseButton::Left) || touches.any_just_pressed() {
        landing.disable_input();
        completions.send(LandingComplete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_disables_once() {
        let mut landing = LandingScreen::new(Color::WHITE);
        assert!(landing.input_enabled());
        landing.disable_input();
        assert!(!landing.input_enabled());
    }
}
