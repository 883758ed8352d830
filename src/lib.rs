use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod solver;

// Public re-exports for clean API
pub use crate::config::SimParams;
pub use crate::core::{
    ContactSpring, GroundReference, Particle, ParticleSet, Plane, SoftBodyState, Spring,
};
pub use crate::error::InitError;

use crate::solver::{compute_forces, integrate_particles, reset_forces};

/// Registers the per-tick simulation pipeline.
///
/// Inserts an empty `SoftBodyState` (hosts replace it once mesh data is
/// available) and advances one fixed step per `Update` tick: reset forces,
/// accumulate gravity/spring/contact forces, then integrate.
pub struct SoftBodyPlugin;

impl Plugin for SoftBodyPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SoftBodyState::default()).add_systems(
            Update,
            (reset_forces, compute_forces, integrate_particles).chain(),
        );
    }
}
