//! Test outcome records.
//!
//! One [`OutcomeRecord`] is produced per finished test case and handed to a
//! log sink. Records are never kept after emission.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in rendered outcome lines (`yyyy-MM-dd HH:mm:ss`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Detail recorded for a failure that carries no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Detail recorded for a skip that carries no reason.
pub const NO_MESSAGE_PROVIDED: &str = "No message provided";

/// Terminal state of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutcomeKind {
    /// The case ran and every expectation held.
    Passed,
    /// The case ran and an expectation, transport or setup step failed.
    Failed,
    /// The case was disabled and did not run.
    Skipped,
}

impl OutcomeKind {
    /// Returns the tag printed in outcome lines.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
        }
    }

    /// Returns the log severity for this outcome.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Failed => Severity::Severe,
            Self::Passed | Self::Skipped => Severity::Info,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Log severity of an outcome line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational.
    Info,
    /// A failure.
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Severe => f.write_str("SEVERE"),
        }
    }
}

/// The logged result of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Display name of the test case.
    pub test_name: String,
    /// Local wall-clock time the outcome was recorded.
    pub timestamp: NaiveDateTime,
    /// Terminal state.
    pub kind: OutcomeKind,
    /// Failure cause or skip reason; `None` for passes.
    pub detail: Option<String>,
}

impl OutcomeRecord {
    /// Records a passed case.
    pub fn passed(test_name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            test_name: test_name.into(),
            timestamp,
            kind: OutcomeKind::Passed,
            detail: None,
        }
    }

    /// Records a failed case. A missing or blank cause becomes
    /// [`UNKNOWN_ERROR`].
    pub fn failed(
        test_name: impl Into<String>,
        timestamp: NaiveDateTime,
        cause: Option<&str>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            timestamp,
            kind: OutcomeKind::Failed,
            detail: Some(non_blank_or(cause, UNKNOWN_ERROR)),
        }
    }

    /// Records a skipped case. A missing or blank reason becomes
    /// [`NO_MESSAGE_PROVIDED`].
    pub fn skipped(
        test_name: impl Into<String>,
        timestamp: NaiveDateTime,
        reason: Option<&str>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            timestamp,
            kind: OutcomeKind::Skipped,
            detail: Some(non_blank_or(reason, NO_MESSAGE_PROVIDED)),
        }
    }

    /// Returns the severity the record is logged at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Returns the timestamp formatted with [`TIMESTAMP_FORMAT`].
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - [{}]: {}",
            self.formatted_timestamp(),
            self.kind,
            self.test_name
        )?;
        match (self.kind, &self.detail) {
            (OutcomeKind::Failed, Some(detail)) => write!(f, "\n Cause: {detail}"),
            (OutcomeKind::Skipped, Some(detail)) => write!(f, "\n Reason: {detail}"),
            _ => Ok(()),
        }
    }
}

fn non_blank_or(value: Option<&str>, placeholder: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap()
    }

    #[test]
    fn test_passed_line() {
        let record = OutcomeRecord::passed("GET /posts - should return all posts", at());
        assert_eq!(record.detail, None);
        assert_eq!(record.severity(), Severity::Info);
        assert_eq!(
            record.to_string(),
            "2025-03-07 09:05:01 - [PASSED]: GET /posts - should return all posts"
        );
    }

    #[test]
    fn test_failed_line_with_cause() {
        let record = OutcomeRecord::failed("POST /albums", at(), Some("Expected status = 201, got 500"));
        assert_eq!(record.severity(), Severity::Severe);
        assert_eq!(
            record.to_string(),
            "2025-03-07 09:05:01 - [FAILED]: POST /albums\n Cause: Expected status = 201, got 500"
        );
    }

    #[test]
    fn test_failed_without_message_uses_placeholder() {
        assert_eq!(
            OutcomeRecord::failed("t", at(), None).detail.as_deref(),
            Some(UNKNOWN_ERROR)
        );
        assert_eq!(
            OutcomeRecord::failed("t", at(), Some("  ")).detail.as_deref(),
            Some(UNKNOWN_ERROR)
        );
    }

    #[test]
    fn test_skipped_without_reason_uses_placeholder() {
        let record = OutcomeRecord::skipped("DELETE /users/1", at(), None);
        assert_eq!(record.detail.as_deref(), Some(NO_MESSAGE_PROVIDED));
        assert_eq!(
            record.to_string(),
            "2025-03-07 09:05:01 - [SKIPPED]: DELETE /users/1\n Reason: No message provided"
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(OutcomeKind::Passed.tag(), "PASSED");
        assert_eq!(OutcomeKind::Failed.to_string(), "FAILED");
        assert_eq!(Severity::Severe.to_string(), "SEVERE");
    }
}
