//! Settlement handlers

use axum::{extract::State, Json};
use chrono::Utc;

use crate::dto::settlement::{ComputeSettlementRequest, SettlementResponse};
use crate::{error::ApiError, AppState};
use domain_settlement::{compute_balances, simplify_debts, Expense};
use domain_split::calculate_split;

/// Computes net balances and settlement transfers for a group
///
/// Each expense arrives with its raw split specification; splits are
/// materialized first, so any malformed expense rejects the whole request
/// before settlement runs.
pub async fn compute(
    State(_state): State<AppState>,
    Json(request): Json<ComputeSettlementRequest>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let mut expenses = Vec::with_capacity(request.expenses.len());
    for expense in request.expenses {
        let splits = calculate_split(expense.amount, &expense.split, &request.participants)?;
        expenses.push(Expense::new(
            expense.amount,
            expense.paid_by,
            splits,
            expense.date.unwrap_or_else(Utc::now),
        )?);
    }

    let balances = compute_balances(&expenses, &request.participants)?;
    let debts = simplify_debts(&balances)?;

    tracing::info!(
        participants = request.participants.len(),
        expenses = expenses.len(),
        transfers = debts.len(),
        "computed settlement"
    );

    Ok(Json(SettlementResponse::from_domain(&balances, &debts)))
}
