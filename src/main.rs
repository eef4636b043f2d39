//! Undertow — personal-site 3D hub. Runs the water_hub app.

use bevy::prelude::*;
use water_hub::prelude::*;

fn main() {
    let _ = dotenvy::dotenv();

    HubBuilder::new()
        .window_title("Undertow")
        .window_resolution(1280.0, 720.0)
        .clear_color(Color::srgb(0.925, 0.973, 1.0))
        .env_config()
        .build()
        .run();
}
