//! `DrawingSurface` over a 2D canvas context.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use smokescreen_core::error::{BackdropError, Result};
use smokescreen_core::surface::DrawingSurface;
use smokescreen_core::types::{LineSegment, RadialGradient, Rgba, Viewport};

use super::js_error;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| BackdropError::Surface("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::Surface("context is not a 2d context".into()))?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawingSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn clear(&mut self) {
        let viewport = self.viewport();
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        if let Err(e) = self.ctx.translate(x, y) {
            log::warn!("canvas translate failed: {e:?}");
        }
    }

    fn rotate(&mut self, angle: f64) {
        if let Err(e) = self.ctx.rotate(angle) {
            log::warn!("canvas rotate failed: {e:?}");
        }
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_blur(&mut self, radius_px: f64) {
        self.ctx.set_filter(&format!("blur({radius_px}px)"));
    }

    fn fill_radial_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: &RadialGradient,
    ) -> Result<()> {
        let fill = self
            .ctx
            .create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, gradient.radius)
            .map_err(js_error)?;
        for stop in &gradient.stops {
            fill.add_color_stop(stop.offset as f32, &stop.color.to_css())
                .map_err(js_error)?;
        }
        self.ctx.set_fill_style(&fill);
        self.ctx.fill_rect(x, y, width, height);
        Ok(())
    }

    fn stroke_lines(&mut self, segments: &[LineSegment], color: Rgba, width: f64) {
        self.ctx.begin_path();
        for segment in segments {
            self.ctx.move_to(segment.from.x, segment.from.y);
            self.ctx.line_to(segment.to.x, segment.to.y);
        }
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
