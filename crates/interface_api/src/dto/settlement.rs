//! Settlement DTOs

use chrono::{DateTime, Utc};
use core_kernel::{Money, ParticipantId};
use domain_settlement::{Balances, Debt};
use domain_split::SplitInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    /// Expense amount in integer currency units
    pub amount: Money,
    /// Who fronted the money
    pub paid_by: ParticipantId,
    /// How the amount is divided
    pub split: SplitInput,
    /// When the expense occurred; defaults to now
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct ComputeSettlementRequest {
    /// Group membership
    pub participants: Vec<ParticipantId>,
    /// The group's expenses
    pub expenses: Vec<ExpenseRequest>,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub participant: ParticipantId,
    pub net: Money,
}

#[derive(Debug, Serialize)]
pub struct DebtResponse {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub balances: Vec<BalanceResponse>,
    pub debts: Vec<DebtResponse>,
}

impl SettlementResponse {
    pub fn from_domain(balances: &Balances, debts: &[Debt]) -> Self {
        Self {
            balances: balances
                .iter()
                .map(|(participant, net)| BalanceResponse { participant, net })
                .collect(),
            debts: debts
                .iter()
                .map(|d| DebtResponse {
                    from: d.from,
                    to: d.to,
                    amount: d.amount,
                })
                .collect(),
        }
    }
}
