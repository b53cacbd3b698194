//! The particle field: generation, drift, and toroidal wrapping.
//!
//! Particles are ephemeral — the whole set is discarded and resampled
//! whenever the surface is resized. Nothing migrates across a resize and
//! no particle is ever destroyed mid-flight; one that leaves the padded
//! bounds reappears at the opposite edge.

use crate::config::FieldConfig;
use crate::motion;
use crate::surface::Size;
use serde::{Deserialize, Serialize};

/// Viewport width (logical px) above which the derived count is worth a
/// warning. The count formula has no upper clamp; see `particle_count`.
const COUNT_ADVISORY_WIDTH: f64 = 4000.0;

/// One drifting point of the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    /// Fixed opacity, sampled once at creation.
    pub alpha: f64,
}

/// Derive the particle count from the viewport width.
///
/// `max(min_count, floor(width × density))`. Only the lower bound is
/// clamped — an extremely wide viewport produces a proportionally large
/// count. That growth is deliberate and is logged rather than capped.
pub fn particle_count(viewport_width: f64, cfg: &FieldConfig) -> usize {
    let derived = if viewport_width.is_finite() && viewport_width > 0.0 {
        (viewport_width * cfg.density).floor() as usize
    } else {
        0
    };
    let count = derived.max(cfg.min_count);
    if viewport_width > COUNT_ADVISORY_WIDTH {
        log::warn!(
            "particle count {count} for viewport width {viewport_width}; \
             the count formula has no upper bound"
        );
    }
    count
}

/// The full particle set plus the bounds it wraps within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Size,
    margin: f64,
}

impl ParticleField {
    /// Sample a fresh field for the given bounds.
    pub fn generate(cfg: &FieldConfig, bounds: Size, rng: &mut fastrand::Rng) -> Self {
        let count = particle_count(bounds.width, cfg);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.f64() * bounds.width,
                y: rng.f64() * bounds.height,
                radius: cfg.radius_min + rng.f64() * cfg.radius_spread,
                vx: (rng.f64() - 0.5) * cfg.drift_span,
                vy: (rng.f64() - 0.5) * cfg.drift_span,
                alpha: cfg.alpha_min + rng.f64() * cfg.alpha_spread,
            })
            .collect();
        Self {
            particles,
            bounds,
            margin: cfg.wrap_margin,
        }
    }

    /// Discard every particle and resample for new bounds.
    ///
    /// The count is re-derived from the new width; old particles never
    /// survive a resize.
    pub fn regenerate(&mut self, cfg: &FieldConfig, bounds: Size, rng: &mut fastrand::Rng) {
        *self = Self::generate(cfg, bounds, rng);
    }

    /// Advance every particle one frame: drift velocity plus the
    /// index-phased jitter, then toroidal wrap into the padded bounds.
    pub fn advance(&mut self, t: f64) {
        self.advance_and_visit(t, |_, _| {});
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Advance then visit each particle in index order.
    ///
    /// The per-frame pipeline paints a particle immediately after moving
    /// it, so the visitor runs inside the advance loop rather than after
    /// it.
    pub fn advance_and_visit(&mut self, t: f64, mut visit: impl FnMut(usize, &Particle)) {
        let (w, h, m) = (self.bounds.width, self.bounds.height, self.margin);
        for (i, p) in self.particles.iter_mut().enumerate() {
            let (jx, jy) = motion::jitter(t, i);
            p.x += p.vx + jx;
            p.y += p.vy + jy;

            if p.x < -m {
                p.x = w + m;
            }
            if p.x > w + m {
                p.x = -m;
            }
            if p.y < -m {
                p.y = h + m;
            }
            if p.y > h + m {
                p.y = -m;
            }

            visit(i, p);
        }
    }
}
