use crate::core::Particle;

/// Arena of particles addressed by stable integer index.
///
/// Built once from the mesh vertex list; no particle is added or removed
/// while the simulation runs.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn push(&mut self, particle: Particle) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Zero every particle's accumulated force.
    ///
    /// Invoked exactly once at the start of each step, before any force
    /// contributor runs.
    pub fn clear_forces(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.clear_force();
        }
    }

    /// Total number of springs stored across all particles.
    pub fn spring_count(&self) -> usize {
        self.particles.iter().map(|p| p.springs.len()).sum()
    }
}
