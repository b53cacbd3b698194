//! Vello backend — emits the frame as drawing commands on a `vello::Scene`.
//!
//! The caller presents the scene via wgpu; this backend stops at scene
//! building, exactly one frame per `Scene` reset.

use crate::painter::Painter;
use bd_core::{BlendMode, Color, GradientStop};
use kurbo::{Affine, Circle, Point, Rect};
use peniko::{Brush, Fill, Gradient, Mix};
use vello::Scene;

/// Paints one frame into a borrowed Vello scene.
pub struct ScenePainter<'a> {
    scene: &'a mut Scene,
}

impl<'a> ScenePainter<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

fn to_peniko(color: Color) -> peniko::Color {
    let [r, g, b, a] = color.to_rgba8();
    peniko::Color::from_rgba8(r, g, b, a)
}

fn to_peniko_stops(stops: &[GradientStop]) -> Vec<(f32, peniko::Color)> {
    stops
        .iter()
        .map(|s| (s.offset, to_peniko(s.color)))
        .collect()
}

impl Painter for ScenePainter<'_> {
    fn clear(&mut self, _bounds: Rect) {
        self.scene.reset();
    }

    fn fill_linear_gradient(
        &mut self,
        bounds: Rect,
        from: Point,
        to: Point,
        stops: &[GradientStop],
    ) {
        let gradient = Gradient::new_linear(from, to).with_stops(to_peniko_stops(stops).as_slice());
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Gradient(gradient),
            None,
            &bounds,
        );
    }

    fn fill_radial_gradient(
        &mut self,
        bounds: Rect,
        center: Point,
        core_radius: f64,
        radius: f64,
        stops: &[GradientStop],
    ) {
        let gradient =
            Gradient::new_two_point_radial(center, core_radius as f32, center, radius as f32)
                .with_stops(to_peniko_stops(stops).as_slice());
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Gradient(gradient),
            None,
            &bounds,
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &Circle::new(center, radius),
        );
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color, blend: BlendMode) {
        match blend {
            BlendMode::SourceOver => {
                self.scene
                    .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &bounds);
            }
            BlendMode::Overlay => {
                self.scene
                    .push_layer(Mix::Overlay, 1.0, Affine::IDENTITY, &bounds);
                self.scene
                    .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &bounds);
                self.scene.pop_layer();
            }
        }
    }
}
