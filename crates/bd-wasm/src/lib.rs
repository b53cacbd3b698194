//! WASM bridge for Backdrop — binds the renderer to the hero `<canvas>`.
//!
//! Compiled via `wasm-pack build --target web`. The embedding page owns
//! event wiring and forwards the lifecycle signals:
//!
//! - document ready → [`HeroBackdrop::try_init`]
//! - `component:hero-ready` → [`HeroBackdrop::notify_section_ready`]
//! - window resize → [`HeroBackdrop::handle_resize`]
//! - pagehide → [`HeroBackdrop::teardown`]

mod canvas2d;

use bd_core::{BackdropTheme, FieldConfig, Size, SurfaceMetrics};
use bd_render::{BackdropRenderer, CancelToken, InitOutcome, Phase, SectionReady};
use canvas2d::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Default lookup key for the hero drawing surface.
const SURFACE_ID: &str = "hero-canvas";
/// Section whose readiness signal retriggers initialization.
const SECTION: &str = "hero";

struct Inner {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    renderer: BackdropRenderer,
    cancel: CancelToken,
    raf: Option<i32>,
}

/// The frame closure outlives any single call — it reschedules itself —
/// so it lives in a shared slot the callback can reach.
type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// The hero backdrop controller.
///
/// Owns the renderer, the bound canvas, and the animation-frame
/// subscription. All interaction from the page goes through this struct;
/// there is no module-level state.
#[wasm_bindgen]
pub struct HeroBackdrop {
    surface_id: String,
    inner: Option<Rc<RefCell<Inner>>>,
    tick: TickClosure,
}

#[wasm_bindgen]
impl HeroBackdrop {
    /// Create an unbound controller. `surface_id` defaults to
    /// `"hero-canvas"`.
    #[wasm_bindgen(constructor)]
    pub fn new(surface_id: Option<String>) -> Self {
        console_error_panic_hook_setup();
        Self {
            surface_id: surface_id.unwrap_or_else(|| SURFACE_ID.to_string()),
            inner: None,
            tick: Rc::new(RefCell::new(None)),
        }
    }

    /// Attempt to bind to the target canvas. Returns a JSON string:
    /// `{"outcome":"ready"|"not-ready"|"already-initialized"}`.
    ///
    /// An absent canvas is not an error — the caller retries from
    /// [`Self::notify_section_ready`] once the hero section loads.
    pub fn try_init(&mut self) -> String {
        outcome_json(self.init_once())
    }

    /// Readiness signal from the component loader. Retries initialization
    /// when the named section owns the surface (an unnamed signal matches
    /// any section).
    pub fn notify_section_ready(&mut self, section: Option<String>) -> String {
        if self.inner.is_some() {
            return outcome_json(InitOutcome::AlreadyInitialized);
        }
        let signal = match section {
            Some(name) => SectionReady::named(name),
            None => SectionReady::any(),
        };
        if signal.matches(SECTION) {
            outcome_json(self.init_once())
        } else {
            outcome_json(InitOutcome::NotReady)
        }
    }

    /// Viewport resize: remeasure, rescale the backing buffer, and
    /// regenerate the particle field. Contents are not preserved.
    pub fn handle_resize(&mut self) {
        if let Some(inner) = &self.inner {
            let mut st = inner.borrow_mut();
            let metrics = measure(&st.canvas);
            rescale(&st.canvas, &st.ctx, metrics);
            st.renderer.resize(metrics);
        }
    }

    /// Pagehide: cancel the frame subscription. The only cleanup needed —
    /// no timers, network, or storage are held.
    pub fn teardown(&mut self) {
        if let Some(inner) = &self.inner {
            let mut st = inner.borrow_mut();
            st.cancel.cancel();
            if let Some(id) = st.raf.take() {
                if let Some(w) = web_sys::window() {
                    let _ = w.cancel_animation_frame(id);
                }
            }
            log::debug!("backdrop torn down");
        }
    }

    /// Introspection for the page: phase, particle count, backing size.
    pub fn status(&self) -> String {
        match &self.inner {
            Some(inner) => {
                let st = inner.borrow();
                let (bw, bh) = st.renderer.metrics().backing();
                serde_json::json!({
                    "phase": phase_name(st.renderer.phase()),
                    "particles": st.renderer.field().len(),
                    "backing": [bw, bh],
                })
                .to_string()
            }
            None => serde_json::json!({ "phase": "unbound" }).to_string(),
        }
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl HeroBackdrop {
    fn init_once(&mut self) -> InitOutcome {
        if self.inner.is_some() {
            return InitOutcome::AlreadyInitialized;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return InitOutcome::NotReady;
        };
        let Some(canvas) = document
            .get_element_by_id(&self.surface_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return InitOutcome::NotReady;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return InitOutcome::NotReady;
        };

        let metrics = measure(&canvas);
        rescale(&canvas, &ctx, metrics);

        let mut renderer = BackdropRenderer::new(
            FieldConfig::default(),
            BackdropTheme::ember(),
            metrics,
            js_sys::Date::now() as u64,
        );

        let reduced = prefers_reduced_motion();
        let phase = {
            let mut painter = CanvasPainter::new(&ctx);
            renderer.start(&mut painter, reduced, now_ms())
        };

        let inner = Rc::new(RefCell::new(Inner {
            canvas,
            ctx,
            renderer,
            cancel: CancelToken::new(),
            raf: None,
        }));
        if phase == Phase::Running {
            start_loop(&inner, &self.tick);
        }
        self.inner = Some(inner);
        InitOutcome::Ready
    }
}

/// Install the self-rescheduling animation-frame callback and request the
/// first tick. The cancel token is checked at the top of every call.
fn start_loop(inner: &Rc<RefCell<Inner>>, tick: &TickClosure) {
    let state = inner.clone();
    let handle = tick.clone();
    *tick.borrow_mut() = Some(Closure::new(move |t: f64| {
        let mut st = state.borrow_mut();
        if st.cancel.is_cancelled() {
            st.raf = None;
            return;
        }
        let Inner { renderer, ctx, .. } = &mut *st;
        let mut painter = CanvasPainter::new(ctx);
        let painted = renderer.render_frame(&mut painter, t);
        st.raf = if painted { request_frame(&handle) } else { None };
    }));
    inner.borrow_mut().raf = request_frame(tick);
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    web_sys::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Current logical canvas size and device pixel ratio. Falls back to the
/// attribute size when the element reports no layout box.
fn measure(canvas: &HtmlCanvasElement) -> SurfaceMetrics {
    let cw = canvas.client_width();
    let ch = canvas.client_height();
    let logical = Size::new(
        if cw > 0 { cw as f64 } else { canvas.width() as f64 },
        if ch > 0 { ch as f64 } else { canvas.height() as f64 },
    );
    let dpr = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    SurfaceMetrics::new(logical, dpr)
}

/// Resize the backing buffer to `round(logical × dpr)`, pin the CSS size,
/// and set the scale transform so drawing stays in logical coordinates.
fn rescale(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, metrics: SurfaceMetrics) {
    let (bw, bh) = metrics.backing();
    canvas.set_width(bw);
    canvas.set_height(bh);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", metrics.logical().width));
    let _ = style.set_property("height", &format!("{}px", metrics.logical().height));
    let dpr = metrics.dpr();
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn outcome_json(outcome: InitOutcome) -> String {
    let name = match outcome {
        InitOutcome::Ready => "ready",
        InitOutcome::NotReady => "not-ready",
        InitOutcome::AlreadyInitialized => "already-initialized",
    };
    format!(r#"{{"outcome":"{name}"}}"#)
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Running => "running",
        Phase::StaticRendered => "static",
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Backdrop WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
