use bevy::prelude::*;

use crate::config::constants;
use crate::math::{Real, Vector};

/// Simulation parameters controlling force generation and integration.
#[derive(Resource, Clone, Debug)]
pub struct SimParams {
    /// Apply `mass * gravity` to every particle each step
    pub use_gravity: bool,

    /// Gravity acceleration vector, world space
    pub gravity: Vector,

    /// Generate penalty-spring forces against the ground plane
    pub handle_plane_collisions: bool,

    /// Mass assigned to every particle at initialization
    pub particle_mass: Real,

    /// Ground contact penalty spring stiffness
    pub contact_ks: Real,

    /// Ground contact penalty spring damping
    pub contact_kd: Real,

    /// Default inter-particle spring stiffness
    pub spring_ks: Real,

    /// Default inter-particle spring damping
    pub spring_kd: Real,

    /// Fixed timestep advanced per simulation tick
    pub timestep: Real,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            use_gravity: false,
            gravity: constants::GRAVITY,
            handle_plane_collisions: false,
            particle_mass: constants::PARTICLE_MASS,
            contact_ks: constants::CONTACT_KS,
            contact_kd: constants::CONTACT_KD,
            spring_ks: constants::SPRING_KS,
            spring_kd: constants::SPRING_KD,
            timestep: constants::TIMESTEP,
        }
    }
}

impl SimParams {
    /// Enable gravity with the given acceleration vector
    pub fn with_gravity(mut self, gravity: Vector) -> Self {
        self.use_gravity = true;
        self.gravity = gravity;
        self
    }

    /// Enable penalty-spring collision against the ground plane
    pub fn with_plane_collisions(mut self) -> Self {
        self.handle_plane_collisions = true;
        self
    }

    pub fn with_particle_mass(mut self, mass: Real) -> Self {
        self.particle_mass = mass;
        self
    }

    /// Set default stiffness/damping for inter-particle springs
    pub fn with_spring_coefficients(mut self, ks: Real, kd: Real) -> Self {
        self.spring_ks = ks;
        self.spring_kd = kd;
        self
    }

    /// Set stiffness/damping for ground contact penalty springs
    pub fn with_contact_coefficients(mut self, ks: Real, kd: Real) -> Self {
        self.contact_ks = ks;
        self.contact_kd = kd;
        self
    }

    pub fn with_timestep(mut self, timestep: Real) -> Self {
        self.timestep = timestep;
        self
    }
}
