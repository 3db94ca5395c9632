//! Tuning parameters for the backdrop and page effects.

use crate::types::Rgba;

/// Nominal display refresh rate (Hz). The real rate is environment-determined.
pub const NOMINAL_FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal refresh rate.
pub const NOMINAL_DT: f64 = 1.0 / NOMINAL_FRAME_RATE as f64;

// --- Smoke particles ---

/// Number of smoke particles in the pool.
pub const SMOKE_PARTICLE_COUNT: usize = 30;

/// Particle size (px): `SIZE_MIN + rand * SIZE_SPAN`.
pub const SMOKE_SIZE_MIN: f64 = 150.0;
pub const SMOKE_SIZE_SPAN: f64 = 250.0;

/// Upward drift per frame (px): `SPEED_Y_MIN + rand * SPEED_Y_SPAN`.
pub const SMOKE_SPEED_Y_MIN: f64 = 0.4;
pub const SMOKE_SPEED_Y_SPAN: f64 = 0.8;

/// Sideways drift per frame (px), centered on zero.
pub const SMOKE_SPEED_X_SPAN: f64 = 0.5;

/// Peak opacity: `MAX_OPACITY_MIN + rand * MAX_OPACITY_SPAN`.
pub const SMOKE_MAX_OPACITY_MIN: f64 = 0.04;
pub const SMOKE_MAX_OPACITY_SPAN: f64 = 0.12;

/// Lifetime in frames: `MAX_LIFE_MIN + rand * MAX_LIFE_SPAN`.
pub const SMOKE_MAX_LIFE_MIN: f64 = 400.0;
pub const SMOKE_MAX_LIFE_SPAN: f64 = 600.0;

/// Rotation speed (rad/frame), centered on zero.
pub const SMOKE_ROTATION_SPEED_SPAN: f64 = 0.01;

/// Particles spawn this far below the bottom edge of the viewport (px).
pub const SMOKE_SPAWN_DEPTH: f64 = 200.0;

/// Fraction of the lifetime spent fading in.
pub const SMOKE_FADE_IN_FRACTION: f64 = 0.2;

/// Fraction of the lifetime after which fading out begins.
pub const SMOKE_FADE_OUT_START: f64 = 0.7;

/// Fraction of the lifetime spent fading out.
pub const SMOKE_FADE_OUT_FRACTION: f64 = 0.3;

/// Blur applied to every smoke puff (px).
pub const SMOKE_BLUR_PX: f64 = 60.0;

/// Gradient stops as (offset, base color, alpha multiplier of the particle opacity).
/// The outermost stop is always fully transparent.
pub const SMOKE_GRADIENT: [(f64, Rgba, f64); 4] = [
    (0.0, Rgba::new(0, 217, 255, 1.0), 0.8),
    (0.4, Rgba::new(0, 180, 220, 1.0), 0.4),
    (0.7, Rgba::new(0, 120, 180, 1.0), 0.2),
    (1.0, Rgba::new(0, 80, 150, 1.0), 0.0),
];

// --- Rotating shapes ---

/// Number of wireframe shapes in the 3D background.
pub const SHAPE_COUNT: usize = 15;

/// Shapes are scattered in a cube of this edge length centered on the origin.
pub const SHAPE_SPREAD: f64 = 20.0;

/// Icosahedron subdivision level (1 splits every edge once).
pub const SHAPE_DETAIL: u32 = 1;

/// Circumradius of each shape (world units).
pub const SHAPE_RADIUS: f64 = 1.0;

/// Wireframe color: #00D9FF at 30% opacity.
pub const SHAPE_COLOR: Rgba = Rgba::new(0, 217, 255, 0.3);

/// Wireframe stroke width (px).
pub const SHAPE_LINE_WIDTH: f64 = 1.0;

/// Rotation applied per frame to each axis (rad).
pub const SHAPE_ROTATION_STEP: f64 = 0.001;

/// Camera vertical field of view (degrees).
pub const CAMERA_FOV_DEG: f64 = 75.0;

/// Camera distance from the origin along +z.
pub const CAMERA_DISTANCE: f64 = 10.0;

/// Camera near/far clip planes.
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;

// --- Scroll-triggered effects ---

/// Scroll triggers fire when an element's top crosses this fraction of the viewport height.
pub const SCROLL_TRIGGER_LINE: f64 = 0.8;

/// Channel cards slide up from this offset (px).
pub const CARD_REVEAL_OFFSET_Y: f64 = 50.0;

/// Channel card reveal duration (s).
pub const CARD_REVEAL_DURATION: f64 = 0.8;

/// Delay added per card index (s).
pub const CARD_REVEAL_STAGGER: f64 = 0.1;

/// Stat counters count up over this duration (s).
pub const COUNTER_DURATION: f64 = 2.0;

// --- Logo glitch ---

/// Glitch offsets are drawn from [-AMPLITUDE, AMPLITUDE) on each axis (px).
pub const GLITCH_AMPLITUDE: f64 = 5.0;

/// Duration of one half-cycle (s).
pub const GLITCH_STEP_SECS: f64 = 0.05;

/// Repeats after the first half-cycle.
pub const GLITCH_REPEATS: u32 = 10;
