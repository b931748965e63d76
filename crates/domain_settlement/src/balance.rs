//! Net balances per participant

use std::collections::HashMap;

use core_kernel::{Money, ParticipantId};
use serde::{Deserialize, Serialize};

use crate::error::SettlementError;
use crate::expense::Expense;

/// One participant's net position: total paid minus total owed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub participant: ParticipantId,
    pub net: Money,
}

/// Net balances for a group, in participant-set order
///
/// The entry order is the order participants were supplied in; that order is
/// the deterministic tie-break for debt simplification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    entries: Vec<BalanceEntry>,
}

impl Balances {
    /// Creates zeroed balances for a participant set
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty or contains duplicates.
    pub fn new(participants: &[ParticipantId]) -> Result<Self, SettlementError> {
        let entries = participants
            .iter()
            .map(|&participant| BalanceEntry {
                participant,
                net: Money::ZERO,
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Creates balances from pre-computed entries
    ///
    /// # Errors
    ///
    /// Returns an error if the entries are empty or contain a duplicate
    /// participant.
    pub fn from_entries(entries: Vec<BalanceEntry>) -> Result<Self, SettlementError> {
        if entries.is_empty() {
            return Err(SettlementError::EmptyParticipants);
        }
        let mut seen = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if seen.insert(entry.participant, idx).is_some() {
                return Err(SettlementError::DuplicateParticipant(entry.participant));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the entries in participant-set order
    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    /// Returns a participant's net balance, if they are in the group
    pub fn net_for(&self, participant: &ParticipantId) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.participant == *participant)
            .map(|e| e.net)
    }

    /// Returns the sum of all net balances (zero for consistent input)
    pub fn residual(&self) -> Money {
        self.entries.iter().map(|e| e.net).sum()
    }

    /// Returns true if every participant's balance is exactly zero
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|e| e.net.is_zero())
    }

    /// Iterates over `(participant, net)` pairs in participant-set order
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, Money)> + '_ {
        self.entries.iter().map(|e| (e.participant, e.net))
    }
}

/// Folds a group's expenses into net balances
///
/// Each expense credits its payer with the full amount and debits every
/// split participant with their owed share. The payer may appear in their
/// own split; their credit and debit partially cancel. The result always
/// sums to zero because each expense's split totals its amount.
///
/// # Errors
///
/// Returns an error if the participant set is empty or duplicated, or if an
/// expense references a participant outside the set.
pub fn compute_balances(
    expenses: &[Expense],
    participants: &[ParticipantId],
) -> Result<Balances, SettlementError> {
    let mut balances = Balances::new(participants)?;
    let index: HashMap<ParticipantId, usize> = balances
        .entries
        .iter()
        .enumerate()
        .map(|(idx, e)| (e.participant, idx))
        .collect();

    for expense in expenses {
        let payer_idx = *index
            .get(&expense.paid_by)
            .ok_or(SettlementError::UnknownParticipant(expense.paid_by))?;
        balances.entries[payer_idx].net += expense.amount;

        for (participant, owed) in expense.splits.iter() {
            let idx = *index
                .get(&participant)
                .ok_or(SettlementError::UnknownParticipant(participant))?;
            balances.entries[idx].net -= owed;
        }
    }

    debug_assert!(balances.residual().is_zero());
    Ok(balances)
}
