//! Water simulation.

mod heightfield;

pub use heightfield::{
    HeightfieldError, HeightfieldSim, BOUNDS, EXCITATION_RADIUS, SENTINEL, VISCOSITY,
};
