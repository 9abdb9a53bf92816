use crate::api::config::FieldConfig;
use crate::components::particle::Particle;
use crate::core::rng::Rng;
use crate::core::surface::Surface;
use crate::systems::connectors::{collect_connectors, Connector};
use crate::systems::spawn::spawn;

/// Particle pool bound to a surface.
/// A flat Vec is plenty: populations stay in the tens.
pub struct ParticleField {
    config: FieldConfig,
    surface: Surface,
    target: usize,
    particles: Vec<Particle>,
    connectors: Vec<Connector>,
    rng: Rng,
}

impl ParticleField {
    /// Create an empty field. Nothing spawns until the first [`resize`](Self::resize).
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            surface: Surface::default(),
            target: 0,
            particles: Vec::with_capacity(64),
            connectors: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    /// Adopt new surface dimensions: recompute the target, drop the newest
    /// particles if the target shrank, then spawn up to the target.
    /// Returns the new target.
    pub fn resize(&mut self, width: f32, height: f32) -> usize {
        self.surface = Surface::new(width, height);
        let target = self.config.population.target_for_width(width);
        if target != self.target {
            log::debug!("population target {} -> {} at width {}", self.target, target, width);
        }
        self.target = target;
        self.particles.truncate(target);
        self.replenish();
        target
    }

    /// Move every particle one frame along its velocity.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
    }

    /// Drop particles that have fully left the surface. Returns how many.
    pub fn cull(&mut self) -> usize {
        let before = self.particles.len();
        let surface = self.surface;
        self.particles.retain(|p| !p.is_outside(&surface));
        before - self.particles.len()
    }

    /// Rebuild the connector list from current positions. Empty when
    /// connectors are disabled.
    pub fn link(&mut self) -> &[Connector] {
        if self.config.connectors.enabled {
            collect_connectors(&self.particles, self.config.connectors.max_distance, &mut self.connectors);
        } else {
            self.connectors.clear();
        }
        &self.connectors
    }

    /// Spawn edge particles until the population reaches the target.
    /// Returns how many were spawned.
    pub fn replenish(&mut self) -> usize {
        let missing = self.target.saturating_sub(self.particles.len());
        for _ in 0..missing {
            let particle = spawn(&self.surface, self.config.radius, &mut self.rng);
            self.particles.push(particle);
        }
        missing
    }

    /// One full simulation frame without drawing.
    pub fn step(&mut self) {
        self.advance();
        self.cull();
        self.link();
        self.replenish();
    }

    /// Add a particle directly, bypassing the spawn rule.
    pub fn insert(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Connectors from the most recent [`link`](Self::link).
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
