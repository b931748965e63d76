//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use core_kernel::{Money, ParticipantId};
use domain_settlement::{BalanceEntry, Balances};
use domain_split::{PercentageShare, SplitInput};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid positive expense amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(Money::new)
}

/// Strategy for generating net balance values (positive, negative, or zero)
pub fn net_balance_strategy() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

/// Strategy for generating zero-sum balances over 2 to `max_participants`
/// fresh participants
///
/// The final participant absorbs the negated sum of the others, so the
/// zero-sum invariant holds by construction.
pub fn zero_sum_balances_strategy(max_participants: usize) -> impl Strategy<Value = Balances> {
    proptest::collection::vec(net_balance_strategy(), 1..max_participants).prop_map(|nets| {
        let residual: i64 = nets.iter().sum();
        let mut entries: Vec<BalanceEntry> = nets
            .into_iter()
            .map(|net| BalanceEntry {
                participant: ParticipantId::new(),
                net: Money::new(net),
            })
            .collect();
        entries.push(BalanceEntry {
            participant: ParticipantId::new(),
            net: Money::new(-residual),
        });
        Balances::from_entries(entries).expect("generated entries are unique and non-empty")
    })
}

/// Strategy for generating an equal split over a fresh participant set
pub fn equal_split_strategy(
    max_participants: usize,
) -> impl Strategy<Value = (Vec<ParticipantId>, SplitInput)> {
    (1..max_participants).prop_map(|n| {
        let participants: Vec<ParticipantId> =
            (0..n).map(|_| ParticipantId::new()).collect();
        let input = SplitInput::Equal {
            participants: participants.clone(),
        };
        (participants, input)
    })
}

/// Strategy for generating two-decimal percentage shares that sum to
/// exactly 100 over a fresh participant set
pub fn percentage_split_strategy(
    max_participants: usize,
) -> impl Strategy<Value = (Vec<ParticipantId>, SplitInput)> {
    proptest::collection::vec(1u32..1000u32, 1..max_participants).prop_map(|weights| {
        let total: u64 = weights.iter().map(|&w| w as u64).sum();
        let mut basis_points: Vec<i64> = weights
            .iter()
            .map(|&w| (w as u64 * 10_000 / total) as i64)
            .collect();
        let assigned: i64 = basis_points.iter().sum();
        basis_points[0] += 10_000 - assigned;

        let participants: Vec<ParticipantId> = basis_points
            .iter()
            .map(|_| ParticipantId::new())
            .collect();
        let shares = participants
            .iter()
            .zip(basis_points)
            .map(|(&participant, bp)| PercentageShare {
                participant,
                percentage: Decimal::new(bp, 2),
            })
            .collect();
        (participants, SplitInput::Percentage { shares })
    })
}
