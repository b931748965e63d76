//! Split calculation
//!
//! Pure functions that resolve a [`SplitInput`] into a [`CalculatedSplit`]
//! whose entries sum exactly to the expense amount.

use std::collections::HashSet;

use core_kernel::{Money, ParticipantId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::SplitError;
use crate::split::{CalculatedSplit, ExactShare, PercentageShare, SplitEntry, SplitInput};
use crate::{PERCENT_SUM_TOLERANCE, PERCENT_TOTAL};

/// Resolves a split specification into per-participant owed amounts
///
/// `participants` is the group membership; every participant referenced by
/// `input` must belong to it. The result always satisfies
/// `result.total() == amount`, with each owed amount non-negative.
///
/// # Errors
///
/// Returns a [`SplitError`] if the amount is not positive, the participant
/// set is empty or contains duplicates, the input references an unknown
/// participant, or the shares fail their sum checks (percentages within
/// ±0.01 of 100, exact shares equal to the amount).
pub fn calculate_split(
    amount: Money,
    input: &SplitInput,
    participants: &[ParticipantId],
) -> Result<CalculatedSplit, SplitError> {
    if participants.is_empty() {
        return Err(SplitError::EmptyParticipants);
    }
    if !amount.is_positive() {
        return Err(SplitError::NonPositiveAmount(amount.units()));
    }

    let members = unique_members(participants)?;
    validate_references(input, &members)?;

    let split = match input {
        SplitInput::Equal { participants } => split_equal(amount, participants),
        SplitInput::Percentage { shares } => split_percentage(amount, shares)?,
        SplitInput::Exact { shares } => split_exact(amount, shares)?,
    };

    debug_assert_eq!(split.total(), amount);
    tracing::debug!(
        amount = amount.units(),
        split_type = ?input.split_type(),
        entries = split.len(),
        "calculated split"
    );

    Ok(split)
}

/// Builds the membership set, rejecting duplicate participants
fn unique_members(
    participants: &[ParticipantId],
) -> Result<HashSet<ParticipantId>, SplitError> {
    let mut members = HashSet::with_capacity(participants.len());
    for &participant in participants {
        if !members.insert(participant) {
            return Err(SplitError::DuplicateParticipant(participant));
        }
    }
    Ok(members)
}

/// Checks that every participant the input references is a group member and
/// appears at most once in the input
fn validate_references(
    input: &SplitInput,
    members: &HashSet<ParticipantId>,
) -> Result<(), SplitError> {
    let mut seen = HashSet::new();
    let mut any = false;
    for participant in input.participants() {
        any = true;
        if !members.contains(&participant) {
            return Err(SplitError::UnknownParticipant(participant));
        }
        if !seen.insert(participant) {
            return Err(SplitError::DuplicateParticipant(participant));
        }
    }
    if !any {
        return Err(SplitError::EmptyParticipants);
    }
    Ok(())
}

/// Equal split: floor division, with the leftover units going to the first
/// participants in input order
fn split_equal(amount: Money, participants: &[ParticipantId]) -> CalculatedSplit {
    let n = participants.len() as i64;
    let base = amount.units() / n;
    let remainder = (amount.units() % n) as usize;

    let entries = participants
        .iter()
        .enumerate()
        .map(|(idx, &participant)| SplitEntry {
            participant,
            owed: Money::new(if idx < remainder { base + 1 } else { base }),
        })
        .collect();

    CalculatedSplit::new(entries)
}

/// Percentage split using the largest-remainder method
///
/// Each share is floored to whole units; the leftover units are then handed
/// out one at a time to the shares with the largest fractional remainder,
/// ties resolving to the earlier share in input order.
fn split_percentage(
    amount: Money,
    shares: &[PercentageShare],
) -> Result<CalculatedSplit, SplitError> {
    let mut total_pct = Decimal::ZERO;
    for share in shares {
        if share.percentage.is_sign_negative() {
            return Err(SplitError::NegativeShare(share.participant));
        }
        total_pct += share.percentage;
    }
    if (total_pct - PERCENT_TOTAL).abs() > PERCENT_SUM_TOLERANCE {
        return Err(SplitError::PercentageSumOutOfTolerance(total_pct));
    }

    let total = Decimal::from(amount.units());
    let mut floors = Vec::with_capacity(shares.len());
    let mut fractions = Vec::with_capacity(shares.len());
    let mut floor_sum: i64 = 0;

    for share in shares {
        let exact = total * share.percentage / PERCENT_TOTAL;
        let floor = exact.floor();
        // The exact share is bounded by the expense amount, so this cannot fail
        let units = floor.to_i64().unwrap_or(0);
        floors.push(units);
        fractions.push(exact - floor);
        floor_sum += units;
    }

    // Indices sorted by descending fractional remainder; the sort is stable,
    // so equal remainders keep input order.
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| fractions[b].cmp(&fractions[a]));

    // The tolerance allows the floored total to drift from the amount by more
    // than one unit per share, so distribution cycles over the ordered shares.
    let mut leftover = amount.units() - floor_sum;
    if leftover > 0 {
        let mut cursor = 0;
        while leftover > 0 {
            floors[order[cursor % order.len()]] += 1;
            leftover -= 1;
            cursor += 1;
        }
    } else if leftover < 0 {
        // Percentages just under the tolerance ceiling can floor above the
        // amount; claw units back from the smallest remainders first.
        let mut cursor = 0;
        while leftover < 0 {
            let idx = order[order.len() - 1 - (cursor % order.len())];
            if floors[idx] > 0 {
                floors[idx] -= 1;
                leftover += 1;
            }
            cursor += 1;
        }
    }

    let entries = shares
        .iter()
        .zip(floors)
        .map(|(share, units)| SplitEntry {
            participant: share.participant,
            owed: Money::new(units),
        })
        .collect();

    Ok(CalculatedSplit::new(entries))
}

/// Exact split: shares pass through unchanged once validated
fn split_exact(amount: Money, shares: &[ExactShare]) -> Result<CalculatedSplit, SplitError> {
    let mut total = Money::ZERO;
    for share in shares {
        if share.amount.is_negative() {
            return Err(SplitError::NegativeShare(share.participant));
        }
        total += share.amount;
    }
    if total != amount {
        return Err(SplitError::ExactSumMismatch {
            expected: amount.units(),
            actual: total.units(),
        });
    }

    let entries = shares
        .iter()
        .map(|share| SplitEntry {
            participant: share.participant,
            owed: share.amount,
        })
        .collect();

    Ok(CalculatedSplit::new(entries))
}
