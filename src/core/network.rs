//! All-pairs spring network construction
//!
//! Every particle is connected to every other particle, not just mesh
//! neighbors. Each unordered pair gets exactly one spring, attached to the
//! lower-indexed endpoint, so the force pass evaluates each pair once.

use crate::core::{ParticleSet, Spring};
use crate::math::Real;

/// Connect every unordered pair of particles with a damped spring.
///
/// Rest lengths capture the distance between the endpoints' current
/// positions, so a network built at initialization encodes the mesh's
/// resting shape. Returns the number of springs created: n*(n-1)/2 for n
/// particles, zero for fewer than two.
pub fn connect_all_pairs(particles: &mut ParticleSet, ks: Real, kd: Real) -> usize {
    let slice = particles.particles_mut();
    let count = slice.len();
    let mut created = 0;

    for i in 0..count {
        // Attach to the lower index only; j starts past i so no pair is
        // visited twice and no particle connects to itself.
        for j in (i + 1)..count {
            let rest_length = (slice[i].position - slice[j].position).length();
            slice[i].springs.push(Spring {
                kd,
                ks,
                rest_length,
                attached_particle: j,
            });
            created += 1;
        }
    }

    created
}
