//! Tunables for the particle field.

use serde::{Deserialize, Serialize};

/// Sampling ranges and densities for particle generation.
///
/// The defaults reproduce the production hero backdrop; embedders that
/// want a denser or calmer field override individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Particles per logical pixel of viewport width.
    pub density: f64,
    /// Lower clamp on the derived particle count.
    pub min_count: usize,
    /// Padding around the logical bounds; positions wrap at `-margin`
    /// and `extent + margin`.
    pub wrap_margin: f64,
    /// Smallest particle radius.
    pub radius_min: f64,
    /// Radius sampling spread above `radius_min`.
    pub radius_spread: f64,
    /// Full span of the per-axis drift velocity; sampled centered on zero.
    pub drift_span: f64,
    /// Smallest particle opacity.
    pub alpha_min: f64,
    /// Opacity sampling spread above `alpha_min`.
    pub alpha_spread: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: 0.02,
            min_count: 40,
            wrap_margin: 20.0,
            radius_min: 0.6,
            radius_spread: 2.6,
            drift_span: 0.25,
            alpha_min: 0.05,
            alpha_spread: 0.12,
        }
    }
}
