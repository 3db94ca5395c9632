//! Smoke particle state and its per-frame update rule.
//!
//! Particles are pooled: when one dies (or drifts off the top edge) every
//! field is re-randomized in place instead of allocating a new particle.

use glam::DVec2;
use rand::Rng;

use smokescreen_core::constants::*;
use smokescreen_core::state::ParticleView;
use smokescreen_core::types::Viewport;

/// One recyclable smoke puff.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmokeParticle {
    /// Center in surface pixels. y grows downward.
    pub position: DVec2,
    /// Edge length of the drawn square (px).
    pub size: f64,
    /// Sideways drift per frame (px).
    pub speed_x: f64,
    /// Upward drift per frame (px).
    pub speed_y: f64,
    pub opacity: f64,
    pub max_opacity: f64,
    /// Frames lived since the last reset.
    pub life: u32,
    /// Lifetime in frames.
    pub max_life: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
}

impl SmokeParticle {
    /// A freshly randomized particle below the bottom edge of `viewport`.
    pub fn spawn(rng: &mut impl Rng, viewport: Viewport) -> Self {
        let mut particle = Self::default();
        particle.reset(rng, viewport);
        particle
    }

    /// Re-randomize every field in place.
    pub fn reset(&mut self, rng: &mut impl Rng, viewport: Viewport) {
        *self = Self {
            position: DVec2::new(
                rng.gen::<f64>() * viewport.width as f64,
                viewport.height as f64 + SMOKE_SPAWN_DEPTH,
            ),
            size: rng.gen::<f64>() * SMOKE_SIZE_SPAN + SMOKE_SIZE_MIN,
            speed_y: rng.gen::<f64>() * SMOKE_SPEED_Y_SPAN + SMOKE_SPEED_Y_MIN,
            speed_x: (rng.gen::<f64>() - 0.5) * SMOKE_SPEED_X_SPAN,
            opacity: 0.0,
            max_opacity: rng.gen::<f64>() * SMOKE_MAX_OPACITY_SPAN + SMOKE_MAX_OPACITY_MIN,
            life: 0,
            max_life: rng.gen::<f64>() * SMOKE_MAX_LIFE_SPAN + SMOKE_MAX_LIFE_MIN,
            rotation: rng.gen::<f64>() * std::f64::consts::TAU,
            rotation_speed: (rng.gen::<f64>() - 0.5) * SMOKE_ROTATION_SPEED_SPAN,
        };
    }

    /// Jump to a random point of the lifetime so a fresh pool doesn't fade in all at once.
    pub fn stagger(&mut self, rng: &mut impl Rng) {
        self.life = (rng.gen::<f64>() * self.max_life) as u32;
    }

    /// Advance one frame. Returns true if the particle was recycled.
    pub fn update(&mut self, rng: &mut impl Rng, viewport: Viewport) -> bool {
        self.position.y -= self.speed_y;
        self.position.x += self.speed_x;
        self.rotation += self.rotation_speed;
        self.life += 1;

        self.opacity = opacity_at(self.life as f64, self.max_life, self.max_opacity);

        if self.life as f64 >= self.max_life || self.position.y < -self.size {
            log::debug!(
                "recycling smoke particle at ({:.1}, {:.1}) after {} frames",
                self.position.x,
                self.position.y,
                self.life
            );
            self.reset(rng, viewport);
            return true;
        }
        false
    }

    /// Whether the particle has reached the end of its lifetime.
    pub fn is_expired(&self) -> bool {
        self.life as f64 >= self.max_life
    }

    pub fn view(&self) -> ParticleView {
        ParticleView {
            x: self.position.x,
            y: self.position.y,
            size: self.size,
            speed_x: self.speed_x,
            speed_y: self.speed_y,
            opacity: self.opacity,
            max_opacity: self.max_opacity,
            life: self.life,
            max_life: self.max_life,
            rotation: self.rotation,
            rotation_speed: self.rotation_speed,
        }
    }
}

/// Opacity envelope: linear fade-in over the first 20% of the lifetime,
/// hold, then linear fade-out over the last 30%.
///
/// Each ramp is measured against `life` directly, not a shared normalized
/// progress, so the fade edges land on the same frames as the page animation.
pub fn opacity_at(life: f64, max_life: f64, max_opacity: f64) -> f64 {
    if life < max_life * SMOKE_FADE_IN_FRACTION {
        (life / (max_life * SMOKE_FADE_IN_FRACTION)) * max_opacity
    } else if life > max_life * SMOKE_FADE_OUT_START {
        ((max_life - life) / (max_life * SMOKE_FADE_OUT_FRACTION)) * max_opacity
    } else {
        max_opacity
    }
}
