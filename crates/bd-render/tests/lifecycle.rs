//! Integration tests: two-stage initialization protocol.

use bd_render::{InitOutcome, SectionReady, ready_signal, supervise_init};
use pretty_assertions::assert_eq;
use std::thread;

#[test]
fn eager_success_never_waits() {
    let (_notifier, waiter) = ready_signal();
    let mut attempts = 0;
    let outcome = supervise_init("hero", waiter, || {
        attempts += 1;
        InitOutcome::Ready
    });
    assert_eq!(outcome, InitOutcome::Ready);
    assert_eq!(attempts, 1);
}

#[test]
fn retries_exactly_once_on_matching_signal() {
    let (notifier, waiter) = ready_signal();
    notifier.notify(SectionReady::named("hero"));

    let mut attempts = 0;
    let outcome = supervise_init("hero", waiter, || {
        attempts += 1;
        if attempts == 1 {
            InitOutcome::NotReady
        } else {
            InitOutcome::Ready
        }
    });
    assert_eq!(outcome, InitOutcome::Ready);
    assert_eq!(attempts, 2);
}

#[test]
fn unnamed_signal_also_triggers_the_retry() {
    let (notifier, waiter) = ready_signal();
    notifier.notify(SectionReady::any());

    let mut attempts = 0;
    let outcome = supervise_init("hero", waiter, || {
        attempts += 1;
        if attempts == 1 {
            InitOutcome::NotReady
        } else {
            InitOutcome::Ready
        }
    });
    assert_eq!(outcome, InitOutcome::Ready);
    assert_eq!(attempts, 2);
}

#[test]
fn non_matching_signal_consumes_the_retry() {
    let (notifier, waiter) = ready_signal();
    notifier.notify(SectionReady::named("footer"));

    let mut attempts = 0;
    let outcome = supervise_init("hero", waiter, || {
        attempts += 1;
        InitOutcome::NotReady
    });
    assert_eq!(outcome, InitOutcome::NotReady);
    assert_eq!(attempts, 1, "a non-matching signal must not retry");
}

#[test]
fn dropped_notifier_resolves_not_ready() {
    let (notifier, waiter) = ready_signal();
    drop(notifier);

    let outcome = supervise_init("hero", waiter, || InitOutcome::NotReady);
    assert_eq!(outcome, InitOutcome::NotReady);
}

#[test]
fn waits_for_a_signal_fired_later() {
    let (notifier, waiter) = ready_signal();
    let handle = thread::spawn(move || {
        notifier.notify(SectionReady::named("hero"));
    });

    let mut attempts = 0;
    let outcome = supervise_init("hero", waiter, || {
        attempts += 1;
        if attempts == 1 {
            InitOutcome::NotReady
        } else {
            InitOutcome::Ready
        }
    });
    handle.join().unwrap();
    assert_eq!(outcome, InitOutcome::Ready);
    assert_eq!(attempts, 2);
}

#[test]
fn second_successful_init_reports_already_initialized() {
    // The renderer-side idempotence contract: once an attempt succeeded,
    // later attempts bind nothing.
    let mut initialized = false;
    let mut try_init = || {
        if initialized {
            InitOutcome::AlreadyInitialized
        } else {
            initialized = true;
            InitOutcome::Ready
        }
    };
    assert_eq!(try_init(), InitOutcome::Ready);
    assert_eq!(try_init(), InitOutcome::AlreadyInitialized);
}
