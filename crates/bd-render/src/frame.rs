//! The per-frame paint pipeline.
//!
//! Layer order is fixed: clear, base gradient, drifting spotlight,
//! particles, grain overlay. The spotlight and the particle jitter are
//! pure functions of `t`, so an identical timestamp reproduces an
//! identical frame (modulo accumulated particle drift).

use crate::painter::Painter;
use bd_core::{BackdropTheme, BlendMode, GradientStop, GradientStops, ParticleField, motion};
use kurbo::{Point, Rect};

/// Paint one full frame at time `t` (ms), advancing the field in place.
///
/// Each particle is painted immediately after it moves, in index order.
pub fn paint_frame(
    painter: &mut impl Painter,
    theme: &BackdropTheme,
    field: &mut ParticleField,
    t: f64,
) {
    let bounds = field.bounds();
    let full = Rect::new(0.0, 0.0, bounds.width, bounds.height);

    painter.clear(full);

    // Base: corner-to-corner gradient, time-independent.
    painter.fill_linear_gradient(
        full,
        Point::new(0.0, 0.0),
        Point::new(bounds.width, bounds.height),
        &theme.base,
    );

    // Spotlight: soft radial layer drifting on a Lissajous-like path.
    let (cx, cy) = motion::spotlight_center(t, bounds);
    let radius = motion::spotlight_radius(bounds);
    let spotlight: GradientStops = GradientStops::from_slice(&[
        GradientStop::new(0.0, theme.spotlight_core),
        GradientStop::new(1.0, theme.spotlight_edge),
    ]);
    painter.fill_radial_gradient(
        full,
        Point::new(cx, cy),
        radius * motion::SPOTLIGHT_CORE_RATIO,
        radius,
        &spotlight,
    );

    // Particles: move, wrap, paint.
    field.advance_and_visit(t, |_, p| {
        painter.fill_circle(
            Point::new(p.x, p.y),
            p.radius,
            theme.particle.with_alpha(p.alpha as f32),
        );
    });

    // Grain: low-opacity overlay composite for subtle contrast.
    painter.fill_rect(full, theme.grain, BlendMode::Overlay);

    log::trace!("frame t={t} particles={}", field.len());
}
