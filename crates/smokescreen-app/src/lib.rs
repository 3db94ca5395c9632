//! smokescreen application layer.
//!
//! Wires the backdrop simulation and page effects to a host: a headless
//! runner for native builds and tooling, and a browser binding on `wasm32`.

pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use smokescreen_core as core;
