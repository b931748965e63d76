//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{Money, ParticipantId};
use domain_settlement::Expense;
use domain_split::{calculate_split, SplitInput};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for test expenses over a fixed participant set
///
/// Defaults to the group's first participant paying a dinner split equally
/// among everyone.
pub struct ExpenseBuilder {
    participants: Vec<ParticipantId>,
    amount: Money,
    paid_by: ParticipantId,
    input: SplitInput,
    date: DateTime<Utc>,
}

impl ExpenseBuilder {
    /// Creates a new builder over a participant set
    ///
    /// # Panics
    ///
    /// Panics if `participants` is empty; tests always have a group.
    pub fn new(participants: &[ParticipantId]) -> Self {
        assert!(!participants.is_empty(), "test group must not be empty");
        Self {
            participants: participants.to_vec(),
            amount: MoneyFixtures::dinner(),
            paid_by: participants[0],
            input: SplitInput::Equal {
                participants: participants.to_vec(),
            },
            date: TemporalFixtures::expense_date(),
        }
    }

    /// Sets the expense amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payer
    pub fn with_paid_by(mut self, paid_by: ParticipantId) -> Self {
        self.paid_by = paid_by;
        self
    }

    /// Sets the split specification
    pub fn with_split(mut self, input: SplitInput) -> Self {
        self.input = input;
        self
    }

    /// Sets the expense date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds the expense, materializing the split
    ///
    /// # Panics
    ///
    /// Panics if the configured split is invalid; builders are for valid
    /// test data, invalid inputs belong in explicit error tests.
    pub fn build(self) -> Expense {
        let splits = calculate_split(self.amount, &self.input, &self.participants)
            .expect("ExpenseBuilder configured with an invalid split");
        Expense::new(self.amount, self.paid_by, splits, self.date)
            .expect("split total diverged from expense amount")
    }
}
