//! Log sink port

use contrail_domain::OutcomeRecord;

/// Destination for outcome records.
///
/// Implementations must not fail: a sink that cannot write drops the record.
pub trait LogSink: Send + Sync {
    /// Emits one record.
    fn emit(&self, record: &OutcomeRecord);
}
