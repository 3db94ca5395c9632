//! Core types and definitions for the smokescreen backdrop.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry and color types, the drawing-surface seam, tuning constants,
//! configuration, errors, and frame snapshots.
//! It has no dependency on a browser or any runtime framework.

pub mod config;
pub mod constants;
pub mod error;
pub mod state;
pub mod surface;
pub mod types;

pub use error::{BackdropError, Result};

#[cfg(test)]
mod tests;
