//! Canvas2D backend — draws the frame through `CanvasRenderingContext2d`.
//!
//! Gradients go through `createLinearGradient` / `createRadialGradient`
//! with CSS `rgba()` stop colors; the grain pass switches
//! `globalCompositeOperation` to `overlay` and restores `source-over`
//! before returning.

use bd_core::{BlendMode, Color, GradientStop};
use bd_render::Painter;
use kurbo::{Point, Rect};
use web_sys::CanvasRenderingContext2d;

/// Paints one frame through a borrowed 2D context.
///
/// The context is expected to carry the device-pixel-ratio transform;
/// all coordinates here are logical.
pub struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn fill_bounds(&self, bounds: Rect) {
        self.ctx
            .fill_rect(bounds.x0, bounds.y0, bounds.width(), bounds.height());
    }
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, bounds: Rect) {
        self.ctx
            .clear_rect(bounds.x0, bounds.y0, bounds.width(), bounds.height());
    }

    fn fill_linear_gradient(
        &mut self,
        bounds: Rect,
        from: Point,
        to: Point,
        stops: &[GradientStop],
    ) {
        let grad = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
        for stop in stops {
            let _ = grad.add_color_stop(stop.offset, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.fill_bounds(bounds);
    }

    fn fill_radial_gradient(
        &mut self,
        bounds: Rect,
        center: Point,
        core_radius: f64,
        radius: f64,
        stops: &[GradientStop],
    ) {
        match self
            .ctx
            .create_radial_gradient(center.x, center.y, core_radius, center.x, center.y, radius)
        {
            Ok(grad) => {
                for stop in stops {
                    let _ = grad.add_color_stop(stop.offset, &stop.color.to_css());
                }
                self.ctx.set_fill_style_canvas_gradient(&grad);
            }
            Err(_) => {
                // Degenerate radii; fall back to the core color.
                let fallback = stops
                    .first()
                    .map(|s| s.color.to_css())
                    .unwrap_or_else(|| "rgba(0,0,0,0)".to_string());
                self.ctx.set_fill_style_str(&fallback);
            }
        }
        self.fill_bounds(bounds);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color, blend: BlendMode) {
        if blend != BlendMode::SourceOver {
            let _ = self.ctx.set_global_composite_operation(blend.css_name());
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.fill_bounds(bounds);
        if blend != BlendMode::SourceOver {
            let _ = self
                .ctx
                .set_global_composite_operation(BlendMode::SourceOver.css_name());
        }
    }
}
