//! Smoke field: the fixed-capacity particle pool and its per-frame pass.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use smokescreen_core::config::BackdropConfig;
use smokescreen_core::error::{BackdropError, Result};
use smokescreen_core::state::ParticleView;
use smokescreen_core::surface::DrawingSurface;
use smokescreen_core::types::Viewport;

use crate::particle::SmokeParticle;
use crate::render;

/// Owns every smoke particle for the lifetime of the page view.
/// Particles are always processed in insertion order.
pub struct SmokeField {
    particles: Vec<SmokeParticle>,
    rng: ChaCha8Rng,
    viewport: Viewport,
    recycles: u64,
}

impl SmokeField {
    /// Build a pool of `config.particle_count` particles with staggered ages.
    pub fn create(config: &BackdropConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let particles = (0..config.particle_count)
            .map(|_| {
                let mut particle = SmokeParticle::spawn(&mut rng, config.viewport);
                particle.stagger(&mut rng);
                particle
            })
            .collect();

        log::info!(
            "smoke field created: {} particles, viewport {}x{}",
            config.particle_count,
            config.viewport.width,
            config.viewport.height
        );

        Self {
            particles,
            rng,
            viewport: config.viewport,
            recycles: 0,
        }
    }

    /// Build a field from explicit particles (no staggering).
    pub fn from_particles(seed: u64, viewport: Viewport, particles: Vec<SmokeParticle>) -> Self {
        Self {
            particles,
            rng: ChaCha8Rng::seed_from_u64(seed),
            viewport,
            recycles: 0,
        }
    }

    /// One frame: clear the surface, then update and draw each particle in order.
    pub fn tick(&mut self, surface: &mut impl DrawingSurface) -> Result<()> {
        surface.clear();
        self.update_and_draw(surface)
    }

    /// Update and draw each particle in order over whatever the surface
    /// already holds.
    ///
    /// Every particle is advanced even if one fails to draw; the first
    /// draw failure is returned.
    pub fn update_and_draw(&mut self, surface: &mut impl DrawingSurface) -> Result<()> {
        let mut first_error: Option<BackdropError> = None;
        for particle in &mut self.particles {
            if particle.update(&mut self.rng, self.viewport) {
                self.recycles += 1;
            }
            if let Err(e) = render::draw(particle, surface) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Track a new viewport. Particle fields are left untouched; only
    /// future resets use the new dimensions.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("smoke field viewport -> {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    /// Release the pool. Later ticks only clear the surface.
    pub fn shutdown(&mut self) {
        log::info!("smoke field shut down after {} recycles", self.recycles);
        self.particles.clear();
    }

    pub fn particles(&self) -> &[SmokeParticle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total recycles since creation.
    pub fn recycles(&self) -> u64 {
        self.recycles
    }

    pub fn views(&self) -> Vec<ParticleView> {
        self.particles.iter().map(SmokeParticle::view).collect()
    }
}
