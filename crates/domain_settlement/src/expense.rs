//! Shared-group expenses

use chrono::{DateTime, Utc};
use core_kernel::{ExpenseId, Money, ParticipantId};
use domain_split::CalculatedSplit;
use serde::{Deserialize, Serialize};

use crate::error::SettlementError;

/// A shared expense with its resolved split
///
/// Immutable once created: settlement is always recomputed from the current
/// expense set, so editing an expense means replacing it. The constructor
/// revalidates that the carried split totals the expense amount, which keeps
/// unbalanced data out of the settlement path entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub paid_by: ParticipantId,
    pub splits: CalculatedSplit,
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Creates an expense, validating the split against the amount
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::SplitTotalMismatch`] if the split's owed
    /// amounts do not sum to `amount`.
    pub fn new(
        amount: Money,
        paid_by: ParticipantId,
        splits: CalculatedSplit,
        date: DateTime<Utc>,
    ) -> Result<Self, SettlementError> {
        let id = ExpenseId::new();
        let split_total = splits.total();
        if split_total != amount {
            return Err(SettlementError::SplitTotalMismatch {
                expense: id,
                amount: amount.units(),
                split_total: split_total.units(),
            });
        }

        Ok(Self {
            id,
            amount,
            paid_by,
            splits,
            date,
        })
    }
}
