//! Cooperative frame loop: an explicit loop over a host-supplied yield
//! primitive, with a cancellation token checked at the top of every
//! iteration.
//!
//! The browser bridge realizes the same shape with a self-rescheduling
//! `requestAnimationFrame` closure; this driver is the testable form and
//! the one native embedders use.

use crate::painter::Painter;
use crate::renderer::BackdropRenderer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Host yield primitive: waits until the next frame tick.
///
/// Returns the tick's timestamp in ms, monotonically non-decreasing, or
/// `None` once the host shuts the loop down.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Cloneable cooperative cancellation flag.
///
/// Cancellation is observed only between frames — there is no mid-frame
/// cancellation point.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Drive the renderer until cancellation, host shutdown, or a phase that
/// does not paint (a static or idle renderer exits immediately).
///
/// Returns the number of frames painted.
pub fn run_loop(
    renderer: &mut BackdropRenderer,
    painter: &mut impl Painter,
    scheduler: &mut impl FrameScheduler,
    cancel: &CancelToken,
) -> usize {
    let mut frames = 0;
    loop {
        if cancel.is_cancelled() {
            log::debug!("frame loop cancelled after {frames} frames");
            break;
        }
        let Some(t) = scheduler.next_frame() else {
            break;
        };
        if !renderer.render_frame(painter, t) {
            break;
        }
        frames += 1;
    }
    frames
}
