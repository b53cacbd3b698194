//! Surface metrics: logical (CSS) size plus the device-pixel-ratio scale.
//!
//! Invariant: the backing buffer is `round(logical × dpr)` per axis, kept
//! in sync on every resize. Drawing commands stay in logical coordinates;
//! the backend applies the scale transform.

use serde::{Deserialize, Serialize};

/// A logical (CSS-pixel) size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The larger of the two dimensions.
    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Logical size and device-pixel-ratio of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    logical: Size,
    dpr: f64,
}

impl SurfaceMetrics {
    /// Build metrics from host measurements.
    ///
    /// The dpr is sanitized: hosts that report nothing, zero, or a
    /// sub-unit scale all resolve to 1.0.
    pub fn new(logical: Size, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        Self { logical, dpr }
    }

    pub fn logical(&self) -> Size {
        self.logical
    }

    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Backing-buffer pixel dimensions: `round(logical × dpr)` per axis.
    pub fn backing(&self) -> (u32, u32) {
        (
            (self.logical.width * self.dpr).round() as u32,
            (self.logical.height * self.dpr).round() as u32,
        )
    }
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            logical: Size::default(),
            dpr: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dpr_is_sanitized() {
        assert_eq!(SurfaceMetrics::new(Size::default(), 0.0).dpr(), 1.0);
        assert_eq!(SurfaceMetrics::new(Size::default(), 0.5).dpr(), 1.0);
        assert_eq!(SurfaceMetrics::new(Size::default(), f64::NAN).dpr(), 1.0);
        assert_eq!(SurfaceMetrics::new(Size::default(), 2.0).dpr(), 2.0);
    }

    #[test]
    fn backing_rounds_per_axis() {
        let m = SurfaceMetrics::new(Size::new(1024.0, 768.0), 1.5);
        assert_eq!(m.backing(), (1536, 1152));

        // 333 × 1.25 = 416.25 → 416; 207 × 1.25 = 258.75 → 259
        let m = SurfaceMetrics::new(Size::new(333.0, 207.0), 1.25);
        assert_eq!(m.backing(), (416, 259));
    }
}
