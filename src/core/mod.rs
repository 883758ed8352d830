pub mod network;
pub mod particle;
pub mod particle_set;
pub mod plane;
pub mod sim_state;

pub use network::connect_all_pairs;
pub use particle::{ContactSpring, Particle, Spring};
pub use particle_set::ParticleSet;
pub use plane::{GroundReference, Plane};
pub use sim_state::SoftBodyState;
