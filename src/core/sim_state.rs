use bevy::prelude::*;

use crate::config::SimParams;
use crate::error::InitError;
use crate::math::{Point, Real, Vector, local_to_world, world_to_local};
use crate::solver::{forces, integrate};

use super::network::connect_all_pairs;
use super::particle::{ContactSpring, Particle};
use super::particle_set::ParticleSet;
use super::plane::{GroundReference, Plane};

/// Aggregate simulation state: particles, ground plane, and parameters.
///
/// Built once from a mesh's vertex list, then advanced one fixed step per
/// external tick. Positions live in world space; the host converts back to
/// the mesh's local frame for vertex write-back.
#[derive(Debug, Resource)]
pub struct SoftBodyState {
    particle_set: ParticleSet,
    plane: Plane,
    params: SimParams,
}

impl Default for SoftBodyState {
    fn default() -> Self {
        Self::new(SimParams::default())
    }
}

impl SoftBodyState {
    /// Empty state; particles are supplied later via `from_mesh_vertices`.
    pub fn new(params: SimParams) -> Self {
        Self {
            particle_set: ParticleSet::new(),
            plane: Plane::default(),
            params,
        }
    }

    /// Build the full simulation from a mesh's vertex list.
    ///
    /// One particle per vertex, converted from the mesh's local frame into
    /// world space, then connected all-pairs with springs whose rest lengths
    /// capture the mesh's resting shape. An empty vertex list is a valid
    /// configuration and produces an empty (but steppable) state.
    pub fn from_mesh_vertices(
        vertices: &[Point],
        transform: &Transform,
        ground: Option<&GroundReference>,
        params: SimParams,
    ) -> Result<Self, InitError> {
        if !(params.particle_mass.is_finite() && params.particle_mass > 0.0) {
            return Err(InitError::InvalidParticleMass(params.particle_mass));
        }
        let plane = Plane::from_ground_reference(ground)?;

        let mut particle_set = ParticleSet::with_capacity(vertices.len());
        for (index, vertex) in vertices.iter().enumerate() {
            if !vertex.is_finite() {
                return Err(InitError::NonFiniteVertex(index));
            }
            let position = local_to_world(transform, *vertex);
            particle_set.push(Particle::at_rest(
                position,
                params.particle_mass,
                ContactSpring::new(params.contact_ks, params.contact_kd),
            ));
        }

        let springs = connect_all_pairs(&mut particle_set, params.spring_ks, params.spring_kd);
        info!(
            "soft body initialized: {} particles, {} springs",
            particle_set.len(),
            springs
        );

        Ok(Self {
            particle_set,
            plane,
            params,
        })
    }

    pub fn particle_set(&self) -> &ParticleSet {
        &self.particle_set
    }

    pub fn particle_set_mut(&mut self) -> &mut ParticleSet {
        &mut self.particle_set
    }

    pub fn particles(&self) -> &[Particle] {
        self.particle_set.particles()
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.particle_set.particles_mut()
    }

    pub fn particle_count(&self) -> usize {
        self.particle_set.len()
    }

    pub fn spring_count(&self) -> usize {
        self.particle_set.spring_count()
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SimParams {
        &mut self.params
    }

    /// Zero all accumulated forces; start of every step.
    pub fn clear_forces(&mut self) {
        self.particle_set.clear_forces();
    }

    /// Run the gravity, spring, and ground-contact passes in order,
    /// accumulating onto each particle's force.
    pub fn accumulate_forces(&mut self) {
        let particles = self.particle_set.particles_mut();
        if self.params.use_gravity {
            forces::accumulate_gravity(particles, self.params.gravity);
        }
        forces::accumulate_spring_forces(particles);
        if self.params.handle_plane_collisions {
            forces::accumulate_contact_forces(particles, &self.plane);
        }
    }

    /// Advance one step of the configured fixed timestep.
    pub fn step(&mut self) {
        self.step_dt(self.params.timestep);
    }

    /// Advance one step of duration `dt`: reset forces, accumulate all
    /// force contributions, then integrate.
    pub fn step_dt(&mut self, dt: Real) {
        self.clear_forces();
        self.accumulate_forces();
        integrate::semi_implicit_euler(self.particle_set.particles_mut(), dt);
    }

    /// Current world-space particle positions, in vertex order.
    pub fn positions_world(&self) -> impl Iterator<Item = Point> + '_ {
        self.particle_set.iter().map(|p| p.position)
    }

    /// Write updated positions back into the mesh's local frame.
    pub fn write_positions_local(&self, transform: &Transform, out: &mut Vec<Point>) {
        out.clear();
        out.extend(
            self.particle_set
                .iter()
                .map(|p| world_to_local(transform, p.position)),
        );
    }

    /// Per-particle (position, accumulated force) pairs for external
    /// visualization; read-only.
    pub fn force_vectors(&self) -> impl Iterator<Item = (Point, Vector)> + '_ {
        self.particle_set.iter().map(|p| (p.position, p.force))
    }

    /// Spring connections as (endpoint, endpoint) index pairs for external
    /// visualization; read-only.
    pub fn spring_endpoints(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.particle_set
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.springs.iter().map(move |s| (i, s.attached_particle)))
    }
}
