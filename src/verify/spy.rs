//! Invocation spy: records call count and arguments without altering the
//! wrapped behavior.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

/// Records every argument a callback was invoked with.
///
/// Cloning a spy shares the underlying call log, so one handle can be turned
/// into a callback (via [`Spy::handler`]) and handed to a component while the
/// test keeps another handle for assertions.
#[derive(Debug)]
pub struct Spy<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for Spy<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Clone for Spy<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Spy<T> {
    /// Fresh spy with an empty call log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn record(&self, argument: T) {
        self.calls.lock().push(argument);
    }

    /// Number of recorded invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether at least one invocation was recorded.
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}

impl<T: Send + 'static> Spy<T> {
    /// Adapt this spy into a boxed callback suitable for injection as a
    /// component's submission handler.
    #[must_use]
    pub fn handler(&self) -> Box<dyn FnMut(T) + Send> {
        let spy = self.clone();
        Box::new(move |argument| spy.record(argument))
    }
}

impl<T: Clone> Spy<T> {
    /// Snapshot of all recorded arguments, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<T: Clone + Debug> Spy<T> {
    /// The argument of the single recorded invocation.
    ///
    /// Panics with the full call log when the count is not exactly one, so a
    /// double-submit bug shows both captured payloads.
    #[track_caller]
    #[must_use]
    pub fn single_call(&self) -> T {
        let calls = self.calls.lock();
        assert_eq!(
            calls.len(),
            1,
            "expected exactly one invocation, got {}: {calls:#?}",
            calls.len()
        );
        calls[0].clone()
    }

    /// Assert the exact number of recorded invocations.
    #[track_caller]
    pub fn assert_call_count(&self, expected: usize) {
        let calls = self.calls.lock();
        assert_eq!(
            calls.len(),
            expected,
            "expected {expected} invocation(s), got {}: {calls:#?}",
            calls.len()
        );
    }
}

impl<T: Clone + Debug + PartialEq + Serialize> Spy<T> {
    /// Assert exactly one invocation whose argument structurally equals
    /// `expected`, failing with a pretty-printed expected/actual diff.
    #[track_caller]
    pub fn assert_called_once_with(&self, expected: &T) {
        let actual = self.single_call();
        if actual != *expected {
            panic!(
                "captured payload differs from expected.\n--- expected ---\n{}\n--- actual ---\n{}",
                pretty(expected),
                pretty(&actual),
            );
        }
    }
}

fn pretty<T: Debug + Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{value:#?}"))
}
