//! Test lifecycle observation
//!
//! The harness reports each case's terminal state to a
//! [`LifecycleObserver`]. The default observer, [`OutcomeLogger`], turns
//! each signal into a timestamped [`OutcomeRecord`] and hands it to a sink.

use contrail_domain::OutcomeRecord;

use crate::ports::{Clock, LogSink};

/// Receives terminal-state signals for test cases.
///
/// Every case produces exactly one call. Observers cannot influence the
/// outcome and must not panic on missing detail.
pub trait LifecycleObserver: Send + Sync {
    /// The case ran and every expectation held.
    fn on_passed(&self, test_name: &str);

    /// The case failed. `cause` is the failure message, if one exists.
    fn on_failed(&self, test_name: &str, cause: Option<&str>);

    /// The case was disabled. `reason` is the skip reason, if one was given.
    fn on_skipped(&self, test_name: &str, reason: Option<&str>);
}

/// Logs one outcome record per lifecycle signal.
#[derive(Debug)]
pub struct OutcomeLogger<C: Clock, S: LogSink> {
    clock: C,
    sink: S,
}

impl<C: Clock, S: LogSink> OutcomeLogger<C, S> {
    /// Creates a logger stamping records with `clock` and writing to `sink`.
    #[must_use]
    pub const fn new(clock: C, sink: S) -> Self {
        Self { clock, sink }
    }

    /// Returns the sink records are written to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    fn emit(&self, record: &OutcomeRecord) {
        self.sink.emit(record);
    }
}

impl<C: Clock, S: LogSink> LifecycleObserver for OutcomeLogger<C, S> {
    fn on_passed(&self, test_name: &str) {
        self.emit(&OutcomeRecord::passed(
            test_name,
            self.clock.now().naive_local(),
        ));
    }

    fn on_failed(&self, test_name: &str, cause: Option<&str>) {
        self.emit(&OutcomeRecord::failed(
            test_name,
            self.clock.now().naive_local(),
            cause,
        ));
    }

    fn on_skipped(&self, test_name: &str, reason: Option<&str>) {
        self.emit(&OutcomeRecord::skipped(
            test_name,
            self.clock.now().naive_local(),
            reason,
        ));
    }
}
