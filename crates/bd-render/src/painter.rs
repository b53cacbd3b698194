//! The seam between the fixed paint pipeline and concrete backends.
//!
//! The same frame renders through Canvas2D in the browser, through Vello
//! natively, and through a recording stub under test; this trait names the
//! five operations all of them share.

use bd_core::{BlendMode, Color, GradientStop};
use kurbo::{Point, Rect};

/// One drawing backend.
///
/// Coordinates are logical (CSS) pixels — the backend owns the
/// device-pixel-ratio transform.
pub trait Painter {
    /// Erase the full surface.
    fn clear(&mut self, bounds: Rect);

    /// Fill `bounds` with a linear gradient running `from` → `to`.
    fn fill_linear_gradient(
        &mut self,
        bounds: Rect,
        from: Point,
        to: Point,
        stops: &[GradientStop],
    );

    /// Fill `bounds` with a radial gradient centered at `center`,
    /// ramping from `core_radius` out to `radius`.
    fn fill_radial_gradient(
        &mut self,
        bounds: Rect,
        center: Point,
        core_radius: f64,
        radius: f64,
        stops: &[GradientStop],
    );

    /// Fill a circle with a solid color.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Fill `bounds` with a solid color under the given blend mode.
    /// The backend restores `SourceOver` before returning.
    fn fill_rect(&mut self, bounds: Rect, color: Color, blend: BlendMode);
}
