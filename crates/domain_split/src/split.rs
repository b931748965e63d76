//! Split specifications and calculated splits

use core_kernel::{Money, ParticipantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of split applied to an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Equal,
    Percentage,
    Exact,
}

/// One participant's percentage share of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentageShare {
    pub participant: ParticipantId,
    /// Percentage of the expense (0-100)
    pub percentage: Decimal,
}

/// One participant's exact share of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactShare {
    pub participant: ParticipantId,
    pub amount: Money,
}

/// Specification of how one expense is divided
///
/// Shares are kept as vectors rather than maps: the input order is the
/// deterministic tie-break order for rounding, so two calls with the same
/// input always produce the same split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SplitInput {
    /// Divide the amount equally among the listed participants
    Equal { participants: Vec<ParticipantId> },
    /// Divide the amount by percentage; percentages must sum to 100
    Percentage { shares: Vec<PercentageShare> },
    /// Divide the amount by exact shares; shares must sum to the amount
    Exact { shares: Vec<ExactShare> },
}

impl SplitInput {
    /// Returns the kind of this split
    pub fn split_type(&self) -> SplitType {
        match self {
            SplitInput::Equal { .. } => SplitType::Equal,
            SplitInput::Percentage { .. } => SplitType::Percentage,
            SplitInput::Exact { .. } => SplitType::Exact,
        }
    }

    /// Iterates over the participants referenced by this split, in input order
    pub fn participants(&self) -> Box<dyn Iterator<Item = ParticipantId> + '_> {
        match self {
            SplitInput::Equal { participants } => Box::new(participants.iter().copied()),
            SplitInput::Percentage { shares } => {
                Box::new(shares.iter().map(|s| s.participant))
            }
            SplitInput::Exact { shares } => Box::new(shares.iter().map(|s| s.participant)),
        }
    }
}

/// One participant's resolved owed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    pub participant: ParticipantId,
    pub owed: Money,
}

/// The resolved output of a split calculation
///
/// Entries are in the order the participants appeared in the input. The
/// central invariant is that the entries sum exactly to the expense amount;
/// `calculate_split` guarantees it for every valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedSplit {
    entries: Vec<SplitEntry>,
}

impl CalculatedSplit {
    /// Creates a calculated split from resolved entries
    pub fn new(entries: Vec<SplitEntry>) -> Self {
        Self { entries }
    }

    /// Returns the resolved entries in input order
    pub fn entries(&self) -> &[SplitEntry] {
        &self.entries
    }

    /// Returns the sum of all owed amounts
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.owed).sum()
    }

    /// Returns the owed amount for a participant, if they appear in the split
    pub fn owed_for(&self, participant: &ParticipantId) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.participant == *participant)
            .map(|e| e.owed)
    }

    /// Returns the number of participants in the split
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the split has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(participant, owed)` pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, Money)> + '_ {
        self.entries.iter().map(|e| (e.participant, e.owed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_split_type_discriminant() {
        let equal = SplitInput::Equal {
            participants: vec![ParticipantId::new()],
        };
        assert_eq!(equal.split_type(), SplitType::Equal);

        let pct = SplitInput::Percentage {
            shares: vec![PercentageShare {
                participant: ParticipantId::new(),
                percentage: dec!(100),
            }],
        };
        assert_eq!(pct.split_type(), SplitType::Percentage);
    }

    #[test]
    fn test_split_input_tagged_serde() {
        let p = ParticipantId::new();
        let input = SplitInput::Equal {
            participants: vec![p],
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "equal");

        let back: SplitInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_calculated_split_lookup() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let split = CalculatedSplit::new(vec![
            SplitEntry {
                participant: a,
                owed: Money::new(34),
            },
            SplitEntry {
                participant: b,
                owed: Money::new(66),
            },
        ]);

        assert_eq!(split.total(), Money::new(100));
        assert_eq!(split.owed_for(&a), Some(Money::new(34)));
        assert_eq!(split.owed_for(&ParticipantId::new()), None);
        assert_eq!(split.len(), 2);
    }
}
