//! Render step: draws one smoke particle onto the shared surface.

use smokescreen_core::constants::{SMOKE_BLUR_PX, SMOKE_GRADIENT};
use smokescreen_core::error::Result;
use smokescreen_core::surface::DrawingSurface;
use smokescreen_core::types::{GradientStop, RadialGradient};

use crate::particle::SmokeParticle;

/// Soft radial gradient for a puff of the given size, with every stop's
/// alpha scaled by the puff's opacity.
pub fn smoke_gradient(size: f64, opacity: f64) -> RadialGradient {
    RadialGradient {
        radius: size / 2.0,
        stops: SMOKE_GRADIENT
            .iter()
            .map(|&(offset, color, alpha_scale)| GradientStop {
                offset,
                color: color.with_alpha(opacity * alpha_scale),
            })
            .collect(),
    }
}

/// Draw a particle. Reads the particle only; the surface state stack is
/// restored before returning, even if the fill fails.
pub fn draw(particle: &SmokeParticle, surface: &mut impl DrawingSurface) -> Result<()> {
    let alpha = particle.opacity.max(0.0);
    let half = particle.size / 2.0;

    surface.save();
    surface.translate(particle.position.x, particle.position.y);
    surface.rotate(particle.rotation);
    surface.set_global_alpha(alpha);

    let gradient = smoke_gradient(particle.size, alpha);
    surface.set_blur(SMOKE_BLUR_PX);
    let filled = surface.fill_radial_rect(-half, -half, particle.size, particle.size, &gradient);

    surface.restore();
    filled
}
