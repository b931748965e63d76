//! Greedy debt simplification

use core_kernel::{Money, ParticipantId};
use serde::{Deserialize, Serialize};

use crate::balance::Balances;
use crate::error::SettlementError;

/// A single settlement transfer: `from` pays `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

/// One side of the matching: a participant and how much they still owe or
/// are owed
struct OpenPosition {
    participant: ParticipantId,
    remaining: Money,
}

/// Reduces net balances to a minimal list of settlement transfers
///
/// Debtors and creditors are each sorted descending by magnitude (stable, so
/// equal magnitudes keep participant-set order) and matched greedily: the
/// largest debtor pays the largest creditor `min` of their remainders, and
/// whoever reaches zero is advanced past. Every emitted amount is strictly
/// positive, no transfer is self-directed, and at most
/// `debtors + creditors - 1` transfers are produced. Replaying the transfers
/// against the input balances zeroes every participant.
///
/// # Errors
///
/// Returns [`SettlementError::UnbalancedInput`] if the balances do not sum
/// to zero. That can only arise from corrupted upstream data (an expense
/// whose split does not total its amount), so it is reported rather than
/// silently corrected.
pub fn simplify_debts(balances: &Balances) -> Result<Vec<Debt>, SettlementError> {
    let residual = balances.residual();
    if !residual.is_zero() {
        tracing::warn!(
            residual = residual.units(),
            "settlement input does not sum to zero"
        );
        return Err(SettlementError::UnbalancedInput {
            residual: residual.units(),
        });
    }

    let mut debtors: Vec<OpenPosition> = Vec::new();
    let mut creditors: Vec<OpenPosition> = Vec::new();
    for (participant, net) in balances.iter() {
        if net.is_negative() {
            debtors.push(OpenPosition {
                participant,
                remaining: net.abs(),
            });
        } else if net.is_positive() {
            creditors.push(OpenPosition {
                participant,
                remaining: net,
            });
        }
    }

    // Stable sorts keep participant-set order for equal magnitudes, making
    // the emitted transfer list reproducible.
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut debts = Vec::new();
    let mut d = 0;
    let mut c = 0;
    while d < debtors.len() && c < creditors.len() {
        let amount = debtors[d].remaining.min(creditors[c].remaining);
        debts.push(Debt {
            from: debtors[d].participant,
            to: creditors[c].participant,
            amount,
        });

        debtors[d].remaining -= amount;
        creditors[c].remaining -= amount;
        if debtors[d].remaining.is_zero() {
            d += 1;
        }
        if creditors[c].remaining.is_zero() {
            c += 1;
        }
    }

    // Zero-sum input exhausts both sides together
    debug_assert_eq!(d, debtors.len());
    debug_assert_eq!(c, creditors.len());

    tracing::debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transfers = debts.len(),
        "simplified debts"
    );

    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::BalanceEntry;

    fn balances_of(nets: &[(ParticipantId, i64)]) -> Balances {
        Balances::from_entries(
            nets.iter()
                .map(|&(participant, net)| BalanceEntry {
                    participant,
                    net: Money::new(net),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_pair_settlement() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let balances = balances_of(&[(a, 100), (b, -100)]);

        let debts = simplify_debts(&balances).unwrap();

        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].from, b);
        assert_eq!(debts[0].to, a);
        assert_eq!(debts[0].amount, Money::new(100));
    }

    #[test]
    fn test_settled_group_emits_no_debts() {
        let balances = balances_of(&[
            (ParticipantId::new(), 0),
            (ParticipantId::new(), 0),
        ]);

        assert_eq!(simplify_debts(&balances).unwrap(), vec![]);
    }

    #[test]
    fn test_largest_debtor_pays_largest_creditor_first() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let c = ParticipantId::new();
        let balances = balances_of(&[(a, 50000), (b, -10000), (c, -40000)]);

        let debts = simplify_debts(&balances).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].from, c);
        assert_eq!(debts[0].to, a);
        assert_eq!(debts[0].amount, Money::new(40000));
        assert_eq!(debts[1].from, b);
        assert_eq!(debts[1].to, a);
        assert_eq!(debts[1].amount, Money::new(10000));
    }

    #[test]
    fn test_one_debtor_two_creditors() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let c = ParticipantId::new();
        let balances = balances_of(&[(a, 70), (b, 30), (c, -100)]);

        let debts = simplify_debts(&balances).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].from, c);
        assert_eq!(debts[0].to, a);
        assert_eq!(debts[0].amount, Money::new(70));
        assert_eq!(debts[1].from, c);
        assert_eq!(debts[1].to, b);
        assert_eq!(debts[1].amount, Money::new(30));
    }

    #[test]
    fn test_equal_magnitudes_keep_participant_order() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let c = ParticipantId::new();
        let d = ParticipantId::new();
        let balances = balances_of(&[(a, 50), (b, 50), (c, -50), (d, -50)]);

        let debts = simplify_debts(&balances).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!((debts[0].from, debts[0].to), (c, a));
        assert_eq!((debts[1].from, debts[1].to), (d, b));
    }

    #[test]
    fn test_unbalanced_input_fails_fast() {
        let balances = balances_of(&[
            (ParticipantId::new(), 100),
            (ParticipantId::new(), -99),
        ]);

        assert_eq!(
            simplify_debts(&balances),
            Err(SettlementError::UnbalancedInput { residual: 1 })
        );
    }
}
