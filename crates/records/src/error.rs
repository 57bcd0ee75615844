//! Error types for the planificador-records crate.

use planificador_holidays::HolidayError;

/// Error type for loading records and releasing subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Returned when a record payload is not valid JSON for its shape.
    #[error("invalid {source_name} payload: {reason}")]
    Payload {
        /// Which backend shape was being decoded.
        source_name: &'static str,
        /// Description of the underlying decoding failure.
        reason: String,
    },

    /// Returned when a holiday or plan record lacks a usable date.
    #[error("{kind} '{id}' has no valid {field}")]
    MissingDate {
        /// Record kind, `holiday` or `plan`.
        kind: &'static str,
        /// Store identifier of the record.
        id: String,
        /// Name of the missing field in the backend shape.
        field: &'static str,
    },

    /// Returned when a plan record breaks the plan invariants.
    #[error("invalid plan record: {0}")]
    Plan(#[from] HolidayError),

    /// Returned when a subscription's release hook fails.
    #[error("failed to release subscription '{channel}': {reason}")]
    Release {
        /// Channel name of the subscription.
        channel: String,
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload() {
        let err = RecordError::Payload {
            source_name: "document",
            reason: "expected array".to_string(),
        };
        assert_eq!(err.to_string(), "invalid document payload: expected array");
    }

    #[test]
    fn error_release() {
        let err = RecordError::Release {
            channel: "festivos-changes".to_string(),
            reason: "socket closed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to release subscription 'festivos-changes': socket closed"
        );
    }

    #[test]
    fn error_missing_date() {
        let err = RecordError::MissingDate {
            kind: "plan",
            id: "p1".to_string(),
            field: "fecha_fin",
        };
        assert_eq!(err.to_string(), "plan 'p1' has no valid fecha_fin");
    }

    #[test]
    fn error_from_holiday_error() {
        let err: RecordError = HolidayError::EmptyName.into();
        assert_eq!(
            err.to_string(),
            "invalid plan record: plan name must not be empty"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<RecordError>();
    }
}
