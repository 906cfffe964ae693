//! Capture verification: invocation spies and microtask flushing.
//!
//! The verification half of the protocol. A [`spy::Spy`] wraps a submission
//! callback before the component is mounted; after the harness triggers
//! submission (and, for async flows, after [`flush_microtasks`]), the test
//! asserts call count and structural payload equality.

pub mod spy;

use tokio::task::yield_now;

use crate::core::config::DEFAULT_FLUSH_TURNS;

/// Yield to the cooperative scheduler so pending asynchronous continuations
/// run before assertions execute.
///
/// Drains [`DEFAULT_FLUSH_TURNS`] zero-delay turns, enough for a spawned
/// submit task to run its create call, observe the settled outcome, and
/// perform its follow-up navigation.
pub async fn flush_microtasks() {
    flush_microtasks_with(DEFAULT_FLUSH_TURNS).await;
}

/// [`flush_microtasks`] with an explicit turn budget (see
/// [`crate::core::config::HarnessConfig::flush_turns`]).
pub async fn flush_microtasks_with(turns: usize) {
    for _ in 0..turns {
        yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[tokio::test]
    async fn flush_lets_a_spawned_continuation_run() {
        let done = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&done);
        tokio::spawn(async move {
            yield_now().await;
            flag.store(true, Ordering::SeqCst);
        });
        assert!(!done.load(Ordering::SeqCst), "task must not run eagerly");
        flush_microtasks().await;
        assert!(done.load(Ordering::SeqCst), "flush must drain the task");
    }
}
