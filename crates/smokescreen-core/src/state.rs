//! Frame snapshot: the complete visible state of the backdrop after a frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::Viewport;

/// Complete backdrop state captured after a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub viewport: Viewport,
    pub particles: Vec<ParticleView>,
    pub shapes: Vec<ShapeView>,
}

/// One smoke particle, field for field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
    pub max_opacity: f64,
    pub life: u32,
    pub max_life: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
}

/// Pose of one wireframe shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeView {
    pub position: DVec3,
    pub rotation: DVec3,
}
