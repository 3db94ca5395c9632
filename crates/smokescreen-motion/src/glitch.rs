//! Logo hover glitch: a short burst of jitter toward a random offset.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use smokescreen_core::constants::{GLITCH_AMPLITUDE, GLITCH_REPEATS, GLITCH_STEP_SECS};

use crate::ease::Ease;

/// On hover the logo yo-yos between rest and one random offset for
/// `GLITCH_REPEATS + 1` half-cycles, then snaps back to rest.
#[derive(Debug, Clone)]
pub struct LogoGlitch {
    rng: ChaCha8Rng,
    target: DVec2,
    elapsed: f64,
    active: bool,
}

impl LogoGlitch {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            target: DVec2::ZERO,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) the burst with a fresh random offset.
    pub fn hover(&mut self) {
        let x = self.rng.gen::<f64>() * 2.0 * GLITCH_AMPLITUDE - GLITCH_AMPLITUDE;
        let y = self.rng.gen::<f64>() * 2.0 * GLITCH_AMPLITUDE - GLITCH_AMPLITUDE;
        self.target = DVec2::new(x, y);
        self.elapsed = 0.0;
        self.active = true;
        log::trace!("logo glitch toward ({x:.2}, {y:.2})");
    }

    /// Total burst length (s).
    pub fn duration() -> f64 {
        (GLITCH_REPEATS + 1) as f64 * GLITCH_STEP_SECS
    }

    /// Advance by `dt` seconds and return the logo offset (px).
    pub fn advance(&mut self, dt: f64) -> DVec2 {
        if !self.active {
            return DVec2::ZERO;
        }
        self.elapsed += dt;
        if self.elapsed >= Self::duration() {
            self.active = false;
            return DVec2::ZERO;
        }

        let cycle = (self.elapsed / GLITCH_STEP_SECS).floor() as u32;
        let t = (self.elapsed - cycle as f64 * GLITCH_STEP_SECS) / GLITCH_STEP_SECS;
        // Odd half-cycles run backwards toward rest.
        let local = if cycle % 2 == 0 { t } else { 1.0 - t };
        self.target * Ease::Power1Out.apply(local)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }
}
