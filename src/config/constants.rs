// Physical constants for the mass-spring simulation
use bevy::prelude::*;

// Global physics
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
pub const PARTICLE_MASS: f32 = 1.0;
pub const TIMESTEP: f32 = 1.0 / 60.0;

// Inter-particle spring defaults
pub const SPRING_KS: f32 = 100.0;
pub const SPRING_KD: f32 = 1.0;

// Ground contact penalty spring defaults
pub const CONTACT_KS: f32 = 1000.0;
pub const CONTACT_KD: f32 = 20.0;
