//! Split domain errors

use core_kernel::ParticipantId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when calculating a split
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("Participant set is empty")]
    EmptyParticipants,

    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    #[error("Share for participant {0} is negative")]
    NegativeShare(ParticipantId),

    #[error("Percentages must sum to 100, got {0}")]
    PercentageSumOutOfTolerance(Decimal),

    #[error("Exact shares must sum to the expense amount: expected {expected}, got {actual}")]
    ExactSumMismatch { expected: i64, actual: i64 },
}
