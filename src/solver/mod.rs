pub mod forces;
pub mod integrate;

pub use forces::{
    accumulate_contact_forces, accumulate_gravity, accumulate_spring_forces, compute_forces,
    reset_forces,
};
pub use integrate::{integrate_particles, semi_implicit_euler};
