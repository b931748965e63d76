//! Settlement domain errors

use core_kernel::{ExpenseId, ParticipantId};
use thiserror::Error;

/// Errors that can occur in the settlement domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("Participant set is empty")]
    EmptyParticipants,

    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    #[error("Expense {expense} splits total {split_total}, expected {amount}")]
    SplitTotalMismatch {
        expense: ExpenseId,
        amount: i64,
        split_total: i64,
    },

    #[error("Balances do not sum to zero (residual {residual})")]
    UnbalancedInput { residual: i64 },
}
