//! Force accumulation passes
//!
//! Gravity, inter-particle spring-damper forces, and ground-contact penalty
//! forces, accumulated into each particle's force field. Forces are
//! additive, so pass order only affects intermediate values.

use bevy::prelude::*;

use crate::core::{Particle, Plane, SoftBodyState};
use crate::math::{Vector, unit_and_length};

/// Add `mass * gravity` to every particle.
pub fn accumulate_gravity(particles: &mut [Particle], gravity: Vector) {
    for particle in particles.iter_mut() {
        let force = particle.mass * gravity;
        particle.apply_force(force);
    }
}

/// Spring-damper forces for every particle pair.
///
/// Each spring hangs off the lower-indexed endpoint, so walking the spring
/// lists visits every pair exactly once. The computed force is applied to
/// the owning particle and negated onto the far endpoint, keeping the pair
/// interaction equal and opposite. Coincident endpoints have no defined
/// direction and contribute zero force for the step.
pub fn accumulate_spring_forces(particles: &mut [Particle]) {
    for i in 0..particles.len() {
        for s in 0..particles[i].springs.len() {
            let spring = particles[i].springs[s];
            let j = spring.attached_particle;

            let delta = particles[i].position - particles[j].position;
            let Some((direction, distance)) = unit_and_length(delta) else {
                continue;
            };
            let relative_speed = (particles[i].velocity - particles[j].velocity).dot(direction);

            let force = spring.ks * (spring.rest_length - distance) * direction
                - spring.kd * relative_speed * direction;

            particles[i].apply_force(force);
            particles[j].apply_force(-force);
        }
    }
}

/// Ground-contact penalty forces.
///
/// A particle below the plane (negative signed distance) receives
/// `-ks * distance * normal - kd * velocity`, gets flagged as attached, and
/// records the plane position as its attach point. Contact is stateless per
/// step aside from the flag.
pub fn accumulate_contact_forces(particles: &mut [Particle], plane: &Plane) {
    for particle in particles.iter_mut() {
        let distance = plane.signed_distance(particle.position);
        if distance < 0.0 {
            let force = -particle.contact_spring.ks * distance * plane.normal
                - particle.contact_spring.kd * particle.velocity;
            particle.apply_force(force);
            particle.attached_to_contact = true;
            particle.contact_spring.attach_point = plane.position;
        } else {
            particle.attached_to_contact = false;
        }
    }
}

/// Force reset stage; runs first every tick.
pub fn reset_forces(mut state: ResMut<SoftBodyState>) {
    state.clear_forces();
}

/// Force accumulation stage (gravity, springs, ground contact).
pub fn compute_forces(mut state: ResMut<SoftBodyState>) {
    state.accumulate_forces();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContactSpring, ParticleSet, Spring, connect_all_pairs};
    use crate::math::Real;

    fn particle_at(position: Vector) -> Particle {
        Particle::at_rest(position, 1.0, ContactSpring::new(1000.0, 20.0))
    }

    fn pair(p0: Vector, p1: Vector, rest_length: Real, ks: Real, kd: Real) -> Vec<Particle> {
        let mut a = particle_at(p0);
        a.springs.push(Spring {
            kd,
            ks,
            rest_length,
            attached_particle: 1,
        });
        vec![a, particle_at(p1)]
    }

    #[test]
    fn gravity_scales_with_mass() {
        let mut particles = vec![particle_at(Vector::ZERO), particle_at(Vector::ZERO)];
        particles[1].mass = 3.0;
        let gravity = Vector::new(0.0, -9.81, 0.0);

        accumulate_gravity(&mut particles, gravity);

        assert!((particles[0].force - gravity).length() < 1e-6);
        assert!((particles[1].force - 3.0 * gravity).length() < 1e-6);
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        // Particles at distance 2 with rest length 1, ks = 100, kd = 0
        let mut particles = pair(
            Vector::ZERO,
            Vector::new(2.0, 0.0, 0.0),
            1.0,
            100.0,
            0.0,
        );
        accumulate_spring_forces(&mut particles);

        assert!((particles[0].force - Vector::new(100.0, 0.0, 0.0)).length() < 1e-4);
        // Equal and opposite on the far endpoint
        assert!((particles[1].force - Vector::new(-100.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn spring_at_rest_length_exerts_no_force() {
        let mut particles = pair(
            Vector::ZERO,
            Vector::new(1.0, 0.0, 0.0),
            1.0,
            100.0,
            1.0,
        );
        accumulate_spring_forces(&mut particles);

        assert!(particles[0].force.length() < 1e-5);
        assert!(particles[1].force.length() < 1e-5);
    }

    #[test]
    fn damping_opposes_relative_motion_along_spring() {
        // Rest length equals distance, so only the damper acts
        let mut particles = pair(
            Vector::ZERO,
            Vector::new(2.0, 0.0, 0.0),
            2.0,
            100.0,
            3.0,
        );
        particles[0].velocity = Vector::new(1.0, 0.0, 0.0);
        accumulate_spring_forces(&mut particles);

        assert!((particles[0].force - Vector::new(-3.0, 0.0, 0.0)).length() < 1e-5);
        assert!((particles[1].force - Vector::new(3.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn coincident_particles_contribute_zero_force() {
        let mut particles = pair(Vector::ZERO, Vector::ZERO, 1.0, 100.0, 1.0);
        accumulate_spring_forces(&mut particles);

        assert_eq!(particles[0].force, Vector::ZERO);
        assert_eq!(particles[1].force, Vector::ZERO);
        assert!(particles.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn symmetric_application_conserves_momentum() {
        let mut set = ParticleSet::new();
        let positions = [
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(1.3, 0.2, -0.4),
            Vector::new(-0.7, 2.1, 0.9),
            Vector::new(0.4, -1.5, 1.8),
        ];
        let velocities = [
            Vector::new(0.5, 0.0, -1.0),
            Vector::new(-0.2, 0.8, 0.0),
            Vector::new(1.1, -0.3, 0.6),
            Vector::new(0.0, 0.4, -0.9),
        ];
        for (position, velocity) in positions.iter().zip(&velocities) {
            set.push(particle_at(*position).with_velocity(*velocity));
        }
        connect_all_pairs(&mut set, 250.0, 2.5);

        accumulate_spring_forces(set.particles_mut());

        let net: Vector = set.iter().map(|p| p.force).sum();
        assert!(net.length() < 1e-3, "net spring force was {:?}", net);
    }

    #[test]
    fn penetrating_particle_receives_penalty_force() {
        // Plane at origin, normal +Y; particle one unit below at rest
        let plane = Plane::default();
        let mut particles = vec![particle_at(Vector::new(0.0, -1.0, 0.0))];

        accumulate_contact_forces(&mut particles, &plane);

        let particle = &particles[0];
        assert!((particle.force - Vector::new(0.0, 1000.0, 0.0)).length() < 1e-3);
        assert!(particle.attached_to_contact);
        assert_eq!(particle.contact_spring.attach_point, plane.position);
    }

    #[test]
    fn contact_damping_resists_velocity() {
        let plane = Plane::default();
        let mut particles = vec![particle_at(Vector::new(0.0, -0.5, 0.0))
            .with_velocity(Vector::new(0.0, -2.0, 0.0))];

        accumulate_contact_forces(&mut particles, &plane);

        // -1000 * (-0.5) * Y - 20 * (0, -2, 0) = (0, 540, 0)
        assert!((particles[0].force - Vector::new(0.0, 540.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn particle_above_plane_is_untouched_and_detached() {
        let plane = Plane::default();
        let mut particles = vec![particle_at(Vector::new(0.0, 0.5, 0.0))];
        particles[0].attached_to_contact = true;

        accumulate_contact_forces(&mut particles, &plane);

        assert_eq!(particles[0].force, Vector::ZERO);
        assert!(!particles[0].attached_to_contact);
    }
}
