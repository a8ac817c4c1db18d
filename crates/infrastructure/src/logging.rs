//! Outcome logging through `tracing`

use contrail_application::ports::LogSink;
use contrail_domain::{OutcomeRecord, Severity};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Target outcome lines are logged under.
pub const LIFECYCLE_TARGET: &str = "contrail::lifecycle";

/// Writes outcome records as `tracing` events.
///
/// Failures are logged at `ERROR`, passes and skips at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &OutcomeRecord) {
        let timestamp = record.formatted_timestamp();
        let detail = record.detail.as_deref();
        match record.severity() {
            Severity::Severe => tracing::error!(
                target: LIFECYCLE_TARGET,
                test = %record.test_name,
                outcome = %record.kind,
                timestamp = %timestamp,
                detail = detail,
                "{record}"
            ),
            Severity::Info => tracing::info!(
                target: LIFECYCLE_TARGET,
                test = %record.test_name,
                outcome = %record.kind,
                timestamp = %timestamp,
                detail = detail,
                "{record}"
            ),
        }
    }
}

/// Installs the global subscriber for test output.
///
/// Reads `RUST_LOG`, falling back to `info`. Output goes through the test
/// writer so libtest captures it per test. Calling this more than once is
/// harmless; only the first call installs anything.
pub fn init_tracing() {
    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("tracing initialised");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(record: &OutcomeRecord) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || TracingSink.emit(record));
        captured.text()
    }

    fn at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_failure_logged_at_error() {
        let out = capture(&OutcomeRecord::failed("GET /posts/1", at(), Some("boom")));
        assert!(out.contains("ERROR"));
        assert!(out.contains("contrail::lifecycle"));
        assert!(out.contains("2025-06-01 08:00:00 - [FAILED]: GET /posts/1"));
        assert!(out.contains("Cause: boom"));
        assert!(out.contains("timestamp=2025-06-01 08:00:00"));
        assert!(out.contains("detail=\"boom\""));
    }

    #[test]
    fn test_pass_and_skip_logged_at_info() {
        let passed = capture(&OutcomeRecord::passed("GET /users", at()));
        assert!(passed.contains("INFO"));
        assert!(passed.contains("[PASSED]: GET /users"));

        let skipped = capture(&OutcomeRecord::skipped("PATCH /photos/1", at(), None));
        assert!(skipped.contains("INFO"));
        assert!(skipped.contains("Reason: No message provided"));
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
