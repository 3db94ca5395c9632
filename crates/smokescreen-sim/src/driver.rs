//! Frame driver: the top-level backdrop object.
//!
//! `FrameDriver` owns the smoke field, the shape field and the drawing
//! surface. Each frame clears the surface, spins and strokes the shapes,
//! then updates and draws every particle in insertion order on top.

use smokescreen_core::config::BackdropConfig;
use smokescreen_core::error::Result;
use smokescreen_core::state::FrameSnapshot;
use smokescreen_core::surface::DrawingSurface;
use smokescreen_core::types::Viewport;

use crate::field::SmokeField;
use crate::scheduler::{FrameEvent, FrameScheduler};
use crate::shapes::ShapeField;

pub struct FrameDriver<S> {
    smoke: SmokeField,
    shapes: ShapeField,
    surface: S,
    frame: u64,
    paused: bool,
}

impl<S: DrawingSurface> FrameDriver<S> {
    /// Validate `config`, size the surface to its viewport and build both fields.
    pub fn new(config: &BackdropConfig, mut surface: S) -> Result<Self> {
        config.validate()?;
        surface.resize(config.viewport);
        Ok(Self {
            smoke: SmokeField::create(config),
            shapes: ShapeField::create(config.shape_count, config.seed, config.viewport),
            surface,
            frame: 0,
            paused: false,
        })
    }

    /// Assemble a driver from prebuilt parts.
    pub fn from_parts(smoke: SmokeField, shapes: ShapeField, surface: S) -> Self {
        Self {
            smoke,
            shapes,
            surface,
            frame: 0,
            paused: false,
        }
    }

    /// Handle one display refresh. Returns false (and draws nothing) while paused.
    pub fn frame(&mut self) -> Result<bool> {
        if self.paused {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    /// Advance exactly one frame, even while paused.
    pub fn step(&mut self) -> Result<()> {
        self.advance()
    }

    fn advance(&mut self) -> Result<()> {
        self.frame += 1;
        self.surface.clear();
        self.shapes.tick();
        self.shapes.draw(&mut self.surface);
        self.smoke.update_and_draw(&mut self.surface)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Resize the surface and let both fields track the new viewport.
    /// No particle state changes.
    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        self.smoke.resize(viewport);
        self.shapes.resize(viewport);
    }

    /// Run until the scheduler runs dry. Returns the number of frames rendered.
    pub fn run(&mut self, scheduler: &mut impl FrameScheduler) -> Result<u64> {
        let mut rendered = 0;
        while let Some(event) = scheduler.next_event() {
            match event {
                FrameEvent::Refresh => {
                    if self.frame()? {
                        rendered += 1;
                    }
                }
                FrameEvent::Resize(viewport) => self.resize(viewport),
            }
        }
        Ok(rendered)
    }

    /// Release the particle pool. The driver keeps clearing the surface if ticked again.
    pub fn shutdown(&mut self) {
        self.smoke.shutdown();
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            viewport: self.surface.viewport(),
            particles: self.smoke.views(),
            shapes: self.shapes.views(),
        }
    }

    /// Frames advanced since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn smoke(&self) -> &SmokeField {
        &self.smoke
    }

    pub fn shapes(&self) -> &ShapeField {
        &self.shapes
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
