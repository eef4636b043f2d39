//! Env parsing and defaults for the hub.

const DEFAULT_ROUTE: &str = "/";
const DEFAULT_SEED: u32 = 7;
const DEFAULT_GRID: usize = 128;

/// Initial route the view state machine is mounted against.
/// `/` lands on the intro; `/home` skips to the hub; `/about` etc. open a panel.
pub fn initial_route() -> String {
    std::env::var("HUB_ROUTE").unwrap_or_else(|_| DEFAULT_ROUTE.to_string())
}

/// Seed for the heightfield's procedural resting surface.
pub fn noise_seed() -> u32 {
    match std::env::var("HUB_SEED") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("undertow: invalid HUB_SEED {raw:?}, using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
        Err(_) => DEFAULT_SEED,
    }
}

/// Heightfield side length in cells. Must be at least 4; smaller or
/// unparseable values fall back to the default.
pub fn grid_side() -> usize {
    match std::env::var("HUB_GRID") {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(side) if side >= 4 => side,
            _ => {
                eprintln!("undertow: invalid HUB_GRID {raw:?}, using {DEFAULT_GRID}");
                DEFAULT_GRID
            }
        },
        Err(_) => DEFAULT_GRID,
    }
}
