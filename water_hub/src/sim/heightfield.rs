//! Damped ripple heightfield over a square grid.
//!
//! Two ping-ponged buffers advance by a finite-difference relaxation once per
//! frame; a single excitation point injects energy where the pointer last hit
//! the water plane. The resting surface is seeded with 15 octaves of simplex
//! noise so the water never starts dead flat.

use std::fmt;

use bevy::math::Vec2;
use noise::{NoiseFn, Simplex};

/// World-space extent of the simulated square, centered on the origin.
pub const BOUNDS: f32 = 256.0;

/// Damping applied to every cell each step.
pub const VISCOSITY: f32 = 0.97;

/// Radius of the excitation bump, in grid units.
pub const EXCITATION_RADIUS: f32 = 3.0;

/// "No excitation" marker: far enough outside the domain that no cell is
/// within [`EXCITATION_RADIUS`] of it.
pub const SENTINEL: Vec2 = Vec2::new(10_000.0, 10_000.0);

const BUMP_HEIGHT: f32 = 0.28;
const NOISE_OCTAVES: usize = 15;

#[derive(Debug, PartialEq)]
pub enum HeightfieldError {
    GridTooSmall(usize),
    BadBounds(f32),
}

impl fmt::Display for HeightfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightfieldError::GridTooSmall(side) => {
                write!(f, "grid side {side} is below the 4-cell minimum")
            }
            HeightfieldError::BadBounds(bounds) => {
                write!(f, "world bounds {bounds} must be positive")
            }
        }
    }
}

impl std::error::Error for HeightfieldError {}

pub struct HeightfieldSim {
    side: usize,
    bounds: f32,
    current: Vec<f32>,
    previous: Vec<f32>,
    excitation: Vec2,
}

impl HeightfieldSim {
    /// Builds a simulator seeded with the procedural resting surface.
    /// Deterministic: the same `side` and `seed` always produce the same grid.
    pub fn new(side: usize, bounds: f32, seed: u32) -> Result<Self, HeightfieldError> {
        if side < 4 {
            return Err(HeightfieldError::GridTooSmall(side));
        }
        if bounds <= 0.0 {
            return Err(HeightfieldError::BadBounds(bounds));
        }
        let current = seed_surface(side, seed);
        let previous = current.clone();
        Ok(Self {
            side,
            bounds,
            current,
            previous,
            excitation: SENTINEL,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn heights(&self) -> &[f32] {
        &self.current
    }

    /// Sets the excitation point in plane (world x,z) coordinates.
    /// `None` parks it at the off-domain sentinel.
    pub fn set_excitation(&mut self, point: Option<Vec2>) {
        self.excitation = point.unwrap_or(SENTINEL);
    }

    /// Current excitation point, `None` while parked at the sentinel.
    pub fn excitation(&self) -> Option<Vec2> {
        (self.excitation != SENTINEL).then_some(self.excitation)
    }

    /// Advances the field by one tick and swaps the buffers.
    pub fn step(&mut self) {
        let side = self.side;
        let last = side - 1;
        let bump = self.excitation_grid_coords();

        for j in 0..side {
            for i in 0..side {
                let idx = j * side + i;
                // edge cells clamp to themselves
                let north = self.current[j.saturating_sub(1) * side + i];
                let south = self.current[(j + 1).min(last) * side + i];
                let west = self.current[j * side + i.saturating_sub(1)];
                let east = self.current[j * side + (i + 1).min(last)];

                let mut height =
                    ((north + south + east + west) * 0.5 - self.previous[idx]) * VISCOSITY;

                if let Some(center) = bump {
                    let dist = Vec2::new(i as f32, j as f32).distance(center);
                    if dist < EXCITATION_RADIUS {
                        let phase = (dist / EXCITATION_RADIUS) * std::f32::consts::PI;
                        height += (phase.cos() + 1.0) * BUMP_HEIGHT;
                    }
                }

                self.previous[idx] = height;
            }
        }

        std::mem::swap(&mut self.current, &mut self.previous);
    }

    /// Height at the cell nearest to world (x, z). Out-of-bounds points clamp
    /// to the edge cell.
    pub fn sample_world(&self, x: f32, z: f32) -> f32 {
        let last = (self.side - 1) as f32;
        let gx = ((x / self.bounds + 0.5) * last).round().clamp(0.0, last) as usize;
        let gz = ((z / self.bounds + 0.5) * last).round().clamp(0.0, last) as usize;
        self.current[gz * self.side + gx]
    }

    /// Excitation point mapped into grid coordinates, or `None` when the
    /// sentinel is so far out that no cell can be within the bump radius.
    fn excitation_grid_coords(&self) -> Option<Vec2> {
        if self.excitation == SENTINEL {
            return None;
        }
        let last = (self.side - 1) as f32;
        let gx = (self.excitation.x / self.bounds + 0.5) * last;
        let gz = (self.excitation.y / self.bounds + 0.5) * last;
        Some(Vec2::new(gx, gz))
    }

    #[cfg(test)]
    fn flat(side: usize, bounds: f32) -> Self {
        Self {
            side,
            bounds,
            current: vec![0.0; side * side],
            previous: vec![0.0; side * side],
            excitation: SENTINEL,
        }
    }
}

/// Multi-octave simplex fill: amplitude decays by `0.53 + 0.025*i` per octave,
/// frequency grows by 1.25x, starting at 0.025. Grid coordinates map into a
/// fixed 0..128 domain regardless of resolution.
fn seed_surface(side: usize, seed: u32) -> Vec<f32> {
    let simplex = Simplex::new(seed);
    let mut heights = Vec::with_capacity(side * side);
    for j in 0..side {
        for i in 0..side {
            let x = (i as f64 * 128.0) / side as f64;
            let y = (j as f64 * 128.0) / side as f64;
            heights.push(octave_noise(&simplex, x, y));
        }
    }
    heights
}

fn octave_noise(simplex: &Simplex, x: f64, y: f64) -> f32 {
    let mut amplitude = 1.0_f64;
    let mut frequency = 0.025_f64;
    let mut sum = 0.0_f64;
    for octave in 0..NOISE_OCTAVES {
        sum += amplitude * simplex.get([x * frequency, y * frequency]);
        amplitude *= 0.53 + 0.025 * octave as f64;
        frequency *= 1.25;
    }
    sum as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_grids() {
        assert_eq!(
            HeightfieldSim::new(2, BOUNDS, 7).err(),
            Some(HeightfieldError::GridTooSmall(2))
        );
        assert_eq!(
            HeightfieldSim::new(32, -1.0, 7).err(),
            Some(HeightfieldError::BadBounds(-1.0))
        );
    }

    #[test]
    fn seeding_is_deterministic() {
        let a = HeightfieldSim::new(32, BOUNDS, 7).unwrap();
        let b = HeightfieldSim::new(32, BOUNDS, 7).unwrap();
        assert_eq!(a.heights(), b.heights());
    }

    #[test]
    fn different_seeds_differ() {
        let a = HeightfieldSim::new(32, BOUNDS, 7).unwrap();
        let b = HeightfieldSim::new(32, BOUNDS, 8).unwrap();
        assert_ne!(a.heights(), b.heights());
    }

    #[test]
    fn sentinel_leaves_flat_field_flat() {
        let mut sim = HeightfieldSim::flat(16, BOUNDS);
        sim.set_excitation(None);
        for _ in 0..10 {
            sim.step();
        }
        assert!(sim.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn excitation_raises_height_near_point() {
        let mut sim = HeightfieldSim::flat(32, BOUNDS);
        sim.set_excitation(Some(Vec2::ZERO));
        sim.step();
        assert!(sim.sample_world(0.0, 0.0) > 0.0);
        // far corner untouched
        assert_eq!(sim.sample_world(-120.0, -120.0), 0.0);
    }

    #[test]
    fn ripples_decay_once_excitation_stops() {
        let mut sim = HeightfieldSim::flat(32, BOUNDS);
        sim.set_excitation(Some(Vec2::ZERO));
        sim.step();
        sim.set_excitation(None);
        for _ in 0..5 {
            sim.step();
        }
        let early: f32 = sim.heights().iter().map(|h| h.abs()).sum();
        for _ in 0..200 {
            sim.step();
        }
        let late: f32 = sim.heights().iter().map(|h| h.abs()).sum();
        assert!(late < early);
    }

    #[test]
    fn excitation_accessor_round_trips() {
        let mut sim = HeightfieldSim::flat(16, BOUNDS);
        assert_eq!(sim.excitation(), None);
        sim.set_excitation(Some(Vec2::new(3.0, -4.0)));
        assert_eq!(sim.excitation(), Some(Vec2::new(3.0, -4.0)));
        sim.set_excitation(None);
        assert_eq!(sim.excitation(), None);
    }
}
