//! Point masses and the springs that connect them
//!
//! Particles carry position, velocity, mass, an accumulated force, and the
//! springs attached to them.

use crate::math::{Real, Vector, zero_vector};

/// Damped spring between two particles.
///
/// Each unordered pair of particles is materialized as exactly one spring,
/// stored on the lower-indexed endpoint; `attached_particle` is always the
/// higher index of the pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Damping coefficient
    pub kd: Real,
    /// Stiffness coefficient
    pub ks: Real,
    /// Length at which the spring exerts zero elastic force
    pub rest_length: Real,
    /// Index of the other endpoint particle
    pub attached_particle: usize,
}

/// Penalty spring activated while a particle penetrates the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactSpring {
    pub kd: Real,
    pub ks: Real,
    /// Unused by the current force law, kept with the contact state
    pub rest_length: Real,
    /// Contact point on the plane, updated on every contact event
    pub attach_point: Vector,
}

impl ContactSpring {
    pub fn new(ks: Real, kd: Real) -> Self {
        Self {
            kd,
            ks,
            rest_length: 0.0,
            attach_point: zero_vector(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: Real,
    pub contact_spring: ContactSpring,
    /// Currently penetrating the ground plane
    pub attached_to_contact: bool,
    /// Springs owned by this particle; never a self-reference or a
    /// duplicate neighbor, and every index is greater than this particle's
    pub springs: Vec<Spring>,
    /// Net force accumulated this step, cleared before every force pass
    pub force: Vector,
}

impl Particle {
    /// Particle at rest at `position` with no springs attached yet.
    pub fn at_rest(position: Vector, mass: Real, contact_spring: ContactSpring) -> Self {
        Self {
            position,
            velocity: zero_vector(),
            mass,
            contact_spring,
            attached_to_contact: false,
            springs: Vec::new(),
            force: zero_vector(),
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline(always)]
    pub fn apply_force(&mut self, force: Vector) {
        self.force += force;
    }

    #[inline(always)]
    pub fn clear_force(&mut self) {
        self.force = zero_vector();
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.force.is_finite()
            && self.mass.is_finite()
    }
}
