//! The drawing-surface seam.
//!
//! Everything that puts pixels on screen goes through `DrawingSurface`.
//! The browser binding implements it over a 2D canvas context; headless
//! runs and tests use `RecordingSurface`, which keeps a log of commands.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{LineSegment, RadialGradient, Rgba, Viewport};

/// A 2D raster surface with a save/restore state stack, in the style of a canvas context.
pub trait DrawingSurface {
    /// Current pixel dimensions.
    fn viewport(&self) -> Viewport;

    /// Resize the pixel buffer in place.
    fn resize(&mut self, viewport: Viewport);

    /// Clear every pixel.
    fn clear(&mut self);

    /// Push the transform, alpha and filter state.
    fn save(&mut self);

    /// Pop back to the state of the matching `save`.
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);

    fn rotate(&mut self, angle: f64);

    fn set_global_alpha(&mut self, alpha: f64);

    /// Gaussian blur filter applied to subsequent fills (px).
    fn set_blur(&mut self, radius_px: f64);

    /// Fill the rectangle (in current transformed coordinates) with a radial gradient.
    fn fill_radial_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: &RadialGradient,
    ) -> Result<()>;

    /// Stroke every segment as one path, in untransformed surface pixels.
    fn stroke_lines(&mut self, segments: &[LineSegment], color: Rgba, width: f64);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    Save,
    Restore,
    Translate {
        x: f64,
        y: f64,
    },
    Rotate {
        angle: f64,
    },
    GlobalAlpha {
        alpha: f64,
    },
    Blur {
        radius_px: f64,
    },
    FillRadialRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: RadialGradient,
    },
    StrokeLines {
        segments: Vec<LineSegment>,
        color: Rgba,
        width: f64,
    },
}

/// In-memory surface that records the commands issued since the last `clear()`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
    depth: usize,
    clears: u64,
    fills: u64,
    strokes: u64,
    unbalanced_restores: u64,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Commands issued since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current save/restore nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of clears over the surface's lifetime (one per frame).
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Number of gradient fills over the surface's lifetime.
    pub fn fills(&self) -> u64 {
        self.fills
    }

    /// Number of line strokes over the surface's lifetime.
    pub fn strokes(&self) -> u64 {
        self.strokes
    }

    /// `restore()` calls that had no matching `save()`.
    pub fn unbalanced_restores(&self) -> u64 {
        self.unbalanced_restores
    }
}

impl DrawingSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            self.unbalanced_restores += 1;
        } else {
            self.depth -= 1;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha { alpha });
    }

    fn set_blur(&mut self, radius_px: f64) {
        self.commands.push(DrawCommand::Blur { radius_px });
    }

    fn fill_radial_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: &RadialGradient,
    ) -> Result<()> {
        self.fills += 1;
        self.commands.push(DrawCommand::FillRadialRect {
            x,
            y,
            width,
            height,
            gradient: gradient.clone(),
        });
        Ok(())
    }

    fn stroke_lines(&mut self, segments: &[LineSegment], color: Rgba, width: f64) {
        self.strokes += 1;
        self.commands.push(DrawCommand::StrokeLines {
            segments: segments.to_vec(),
            color,
            width,
        });
    }
}
