//! The backdrop renderer: one value owning surface metrics, the particle
//! field, and the animation phase.
//!
//! All state lives here with explicit construction and teardown — there
//! are no module-level flags or cached arrays. The host bridge decides
//! *when* frames happen (RAF subscription, scheduler loop); this type
//! decides *what* a frame is and which phase transitions are legal.

use crate::frame::paint_frame;
use crate::painter::Painter;
use bd_core::{BackdropTheme, FieldConfig, ParticleField, SurfaceMetrics};

/// Animation phase. `StaticRendered` is terminal — a reduced-motion
/// renderer never subscribes to frames and never leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    StaticRendered,
}

pub struct BackdropRenderer {
    cfg: FieldConfig,
    theme: BackdropTheme,
    metrics: SurfaceMetrics,
    field: ParticleField,
    phase: Phase,
    rng: fastrand::Rng,
}

impl BackdropRenderer {
    /// Bind to a surface: derive the particle count from the current
    /// logical width and generate the field. The renderer starts `Idle`.
    pub fn new(cfg: FieldConfig, theme: BackdropTheme, metrics: SurfaceMetrics, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let field = ParticleField::generate(&cfg, metrics.logical(), &mut rng);
        log::debug!(
            "renderer bound: {}x{} @{}x, {} particles",
            metrics.logical().width,
            metrics.logical().height,
            metrics.dpr(),
            field.len()
        );
        Self {
            cfg,
            theme,
            metrics,
            field,
            phase: Phase::Idle,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Leave `Idle`. Reduced motion paints exactly one frame and parks in
    /// `StaticRendered`; otherwise the renderer is `Running` and expects
    /// the host to deliver frame ticks. Calling again is a no-op.
    pub fn start(&mut self, painter: &mut impl Painter, reduced_motion: bool, t: f64) -> Phase {
        if self.phase == Phase::Idle {
            if reduced_motion {
                paint_frame(painter, &self.theme, &mut self.field, t);
                self.phase = Phase::StaticRendered;
                log::debug!("reduced motion: single static pass at t={t}");
            } else {
                self.phase = Phase::Running;
            }
        }
        self.phase
    }

    /// Rescale for new host measurements and regenerate the field.
    ///
    /// Destructive on both counts: backing-buffer contents are not
    /// preserved and no particle survives. Does not paint — the next
    /// frame tick repaints a `Running` renderer.
    pub fn resize(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
        self.field
            .regenerate(&self.cfg, metrics.logical(), &mut self.rng);
        log::debug!(
            "resized to {}x{} @{}x, {} particles",
            metrics.logical().width,
            metrics.logical().height,
            metrics.dpr(),
            self.field.len()
        );
    }

    /// Paint one frame at time `t`. Only a `Running` renderer paints;
    /// returns whether it did.
    pub fn render_frame(&mut self, painter: &mut impl Painter, t: f64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        paint_frame(painter, &self.theme, &mut self.field, t);
        true
    }
}
