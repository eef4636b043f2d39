//! Content panels rendered in the overlay pass.
//!
//! Panels are mounted lazily: a panel's UI is first built the frame its
//! overlay slot comes on screen, and the mount is remembered for the session.

use std::collections::HashSet;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::scene::{OverlayBoard, PanelId};

/// Panels that have been built at least once this session.
#[derive(Resource, Default)]
pub struct MountedPanels(HashSet<PanelId>);

impl MountedPanels {
    pub fn is_mounted(&self, panel: PanelId) -> bool {
        self.0.contains(&panel)
    }

    fn mount(&mut self, panel: PanelId) {
        self.0.insert(panel);
    }
}

pub fn panels_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .init_resource::<MountedPanels>()
        .add_systems(Update, content_panel_system);
}

fn content_panel_system(
    mut contexts: EguiContexts,
    overlay: Res<OverlayBoard>,
    mut mounted: ResMut<MountedPanels>,
) {
    if !overlay.is_above_world() {
        return;
    }
    let Some(panel) = overlay.visible() else {
        return;
    };
    if !mounted.is_mounted(panel) {
        mounted.mount(panel);
        info!("undertow: mounted {} panel", panel.as_str());
    }

    let ctx = contexts.ctx_mut();
    // leave the top strip clear so the raised navbar stays clickable
    let height = ctx.screen_rect().height() * 0.78;
    egui::TopBottomPanel::bottom("content")
        .exact_height(height)
        .show_separator_line(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 235))
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));
            match panel {
                PanelId::About => about_body(ui),
                PanelId::Contact => contact_body(ui),
                PanelId::Projects => projects_body(ui),
                PanelId::Client => client_body(ui),
            }
        });
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(22.0)
            .color(egui::Color32::from_rgb(100, 220, 180)),
    );
    ui.add_space(12.0);
}

fn about_body(ui: &mut egui::Ui) {
    heading(ui, "About");
    ui.label("Designer and developer building interactive things for the web.");
    ui.add_space(8.0);
    ui.label("Click the logo to return to the hub.");
}

fn contact_body(ui: &mut egui::Ui) {
    heading(ui, "Contact");
    ui.label("mail  hello@undertow.dev");
    ui.label("work  open to collaborations");
}

fn projects_body(ui: &mut egui::Ui) {
    heading(ui, "Projects");
    for (name, blurb) in [
        ("undertow", "this site: a hub floating on simulated water"),
        ("driftline", "generative shoreline sketches"),
        ("soundings", "audio-reactive depth maps"),
    ] {
        ui.label(
            egui::RichText::new(name).color(egui::Color32::from_rgb(100, 220, 180)),
        );
        ui.label(blurb);
        ui.add_space(6.0);
    }
}

fn client_body(ui: &mut egui::Ui) {
    heading(ui, "Client Work");
    ui.label("Selected commissions available on request.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_is_remembered_per_panel() {
        let mut mounted = MountedPanels::default();
        assert!(!mounted.is_mounted(PanelId::Projects));

        mounted.mount(PanelId::Projects);
        assert!(mounted.is_mounted(PanelId::Projects));
        assert!(!mounted.is_mounted(PanelId::About));
    }
}
