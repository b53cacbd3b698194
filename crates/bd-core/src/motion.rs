//! Time-driven motion curves: spotlight drift and particle jitter.
//!
//! All functions are pure in `t` so a frame can be reproduced exactly from
//! its timestamp. The spotlight's x and y oscillate with different
//! periods, which turns its path into a slow Lissajous-like drift rather
//! than a circle.

use crate::surface::Size;

/// Spotlight horizontal oscillation period, in ms.
pub const DRIFT_PERIOD_X_MS: f64 = 4000.0;
/// Spotlight vertical oscillation period, in ms.
pub const DRIFT_PERIOD_Y_MS: f64 = 5000.0;
/// Drift amplitude as a fraction of the corresponding dimension.
pub const DRIFT_AMPLITUDE: f64 = 0.12;
/// Spotlight outer radius as a fraction of the larger dimension.
pub const SPOTLIGHT_SCALE: f64 = 0.6;
/// Spotlight inner (core) radius as a fraction of the outer radius.
pub const SPOTLIGHT_CORE_RATIO: f64 = 0.05;

const JITTER_PHASE_X_MS: f64 = 1000.0;
const JITTER_PHASE_Y_MS: f64 = 1100.0;
const JITTER_PERIOD_X_MS: f64 = 6000.0;
const JITTER_PERIOD_Y_MS: f64 = 5600.0;
const JITTER_AMPLITUDE_X: f64 = 0.06;
const JITTER_AMPLITUDE_Y: f64 = 0.04;

/// Center of the spotlight at time `t` (ms), in logical coordinates.
pub fn spotlight_center(t: f64, bounds: Size) -> (f64, f64) {
    let x = ((t / DRIFT_PERIOD_X_MS).sin() * DRIFT_AMPLITUDE + 0.5) * bounds.width;
    let y = ((t / DRIFT_PERIOD_Y_MS).cos() * DRIFT_AMPLITUDE + 0.5) * bounds.height;
    (x, y)
}

/// Outer radius of the spotlight for the given bounds.
pub fn spotlight_radius(bounds: Size) -> f64 {
    bounds.max_dim() * SPOTLIGHT_SCALE
}

/// Per-particle sinusoidal displacement at time `t` (ms).
///
/// The phase offset derives from the particle's index so the field
/// desynchronizes visually instead of breathing in unison.
pub fn jitter(t: f64, index: usize) -> (f64, f64) {
    let i = index as f64;
    let dx = ((t + i * JITTER_PHASE_X_MS) / JITTER_PERIOD_X_MS).sin() * JITTER_AMPLITUDE_X;
    let dy = ((t + i * JITTER_PHASE_Y_MS) / JITTER_PERIOD_Y_MS).cos() * JITTER_AMPLITUDE_Y;
    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_center_stays_inside_drift_band() {
        let bounds = Size::new(1000.0, 500.0);
        let mut t = 0.0;
        while t < 60_000.0 {
            let (x, y) = spotlight_center(t, bounds);
            assert!((380.0..=620.0).contains(&x), "x drifted out of band: {x}");
            assert!((190.0..=310.0).contains(&y), "y drifted out of band: {y}");
            t += 16.0;
        }
    }

    #[test]
    fn jitter_desynchronizes_by_index() {
        let a = jitter(1234.0, 0);
        let b = jitter(1234.0, 7);
        assert!(
            (a.0 - b.0).abs() > 1e-9 || (a.1 - b.1).abs() > 1e-9,
            "indices 0 and 7 should not move in lockstep"
        );
    }

    #[test]
    fn jitter_is_bounded_by_amplitude() {
        for i in 0..50 {
            let (dx, dy) = jitter(i as f64 * 321.7, i);
            assert!(dx.abs() <= JITTER_AMPLITUDE_X + 1e-12);
            assert!(dy.abs() <= JITTER_AMPLITUDE_Y + 1e-12);
        }
    }
}
