//! Two-stage initialization protocol.
//!
//! The target surface may not exist yet when the page script runs — the
//! hero section loads as a component. Initialization therefore happens in
//! two stages: one eager attempt, then exactly one retry when the owning
//! section signals readiness. The signal travels over a one-shot channel,
//! not an event subscription.

use std::sync::mpsc;

/// Result of an initialization attempt. An absent surface is not an
/// error — it is the one expected, retryable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Surface found and bound.
    Ready,
    /// Surface absent; the caller may retry on a readiness signal.
    NotReady,
    /// A previous attempt already succeeded; nothing was re-bound.
    AlreadyInitialized,
}

/// Payload of the readiness signal: which section became ready.
/// An unnamed signal matches any section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReady {
    pub name: Option<String>,
}

impl SectionReady {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn any() -> Self {
        Self { name: None }
    }

    pub fn matches(&self, section: &str) -> bool {
        match &self.name {
            Some(name) => name == section,
            None => true,
        }
    }
}

/// Sending half of the one-shot readiness signal.
pub struct ReadyNotifier(mpsc::Sender<SectionReady>);

impl ReadyNotifier {
    /// Fire the signal. Dropped silently if the waiter is gone.
    pub fn notify(self, signal: SectionReady) {
        let _ = self.0.send(signal);
    }
}

/// Receiving half of the one-shot readiness signal.
pub struct ReadyWaiter(mpsc::Receiver<SectionReady>);

impl ReadyWaiter {
    /// Block until the signal fires. `None` if the notifier was dropped
    /// without firing.
    pub fn wait(self) -> Option<SectionReady> {
        self.0.recv().ok()
    }
}

/// Create the one-shot readiness channel.
pub fn ready_signal() -> (ReadyNotifier, ReadyWaiter) {
    let (tx, rx) = mpsc::channel();
    (ReadyNotifier(tx), ReadyWaiter(rx))
}

/// Run the two-stage protocol for `section`.
///
/// Tries once eagerly. On `NotReady`, waits for the one-shot signal and
/// retries exactly once if it matches `section`; a non-matching signal
/// (or a dropped notifier) consumes the retry and resolves `NotReady`.
pub fn supervise_init(
    section: &str,
    waiter: ReadyWaiter,
    mut try_init: impl FnMut() -> InitOutcome,
) -> InitOutcome {
    match try_init() {
        InitOutcome::NotReady => {}
        outcome => return outcome,
    }
    match waiter.wait() {
        Some(signal) if signal.matches(section) => try_init(),
        _ => InitOutcome::NotReady,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_signal_matches_any_section() {
        assert!(SectionReady::any().matches("hero"));
        assert!(SectionReady::named("hero").matches("hero"));
        assert!(!SectionReady::named("footer").matches("hero"));
    }
}
