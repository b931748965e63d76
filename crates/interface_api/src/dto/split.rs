//! Split DTOs

use core_kernel::{Money, ParticipantId};
use domain_split::{CalculatedSplit, SplitInput, SplitType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CalculateSplitRequest {
    /// Expense amount in integer currency units
    pub amount: Money,
    /// Group membership
    pub participants: Vec<ParticipantId>,
    /// How to divide the amount
    pub split: SplitInput,
}

#[derive(Debug, Serialize)]
pub struct SplitEntryResponse {
    pub participant: ParticipantId,
    pub owed: Money,
}

#[derive(Debug, Serialize)]
pub struct CalculatedSplitResponse {
    pub split_type: SplitType,
    pub total: Money,
    pub entries: Vec<SplitEntryResponse>,
}

impl CalculatedSplitResponse {
    pub fn from_split(split_type: SplitType, split: &CalculatedSplit) -> Self {
        Self {
            split_type,
            total: split.total(),
            entries: split
                .iter()
                .map(|(participant, owed)| SplitEntryResponse { participant, owed })
                .collect(),
        }
    }
}
