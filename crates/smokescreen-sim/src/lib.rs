//! Backdrop simulation for smokescreen.
//!
//! Owns the smoke particle pool and the rotating wireframe shapes, advances
//! them once per display refresh, and renders onto any `DrawingSurface`.
//! Completely headless: frames are driven by an injectable scheduler.

pub mod driver;
pub mod field;
pub mod mesh;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod shapes;

pub use smokescreen_core as core;
pub use driver::FrameDriver;
