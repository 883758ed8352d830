//! Time integration
//!
//! Semi-implicit (symplectic) Euler: velocity is advanced from the
//! accumulated force first, then position is advanced with the updated
//! velocity. Runs strictly after force accumulation each step.

use bevy::prelude::*;

use crate::core::{Particle, SoftBodyState};
use crate::math::{Real, inv_exact};

/// Advance velocity and position of every particle by one step of `dt`.
pub fn semi_implicit_euler(particles: &mut [Particle], dt: Real) {
    for particle in particles.iter_mut() {
        let acceleration = particle.force * inv_exact(particle.mass);
        particle.velocity += acceleration * dt;
        particle.position += particle.velocity * dt;
    }
}

/// Integration stage; runs last every tick.
pub fn integrate_particles(mut state: ResMut<SoftBodyState>) {
    let dt = state.params().timestep;
    semi_implicit_euler(state.particles_mut(), dt);
}
