//! Split handlers

use axum::{extract::State, Json};

use crate::dto::split::{CalculateSplitRequest, CalculatedSplitResponse};
use crate::{error::ApiError, AppState};
use domain_split::calculate_split;

/// Calculates a split for an expense amount
///
/// The surrounding application persists the returned breakdown as the
/// authoritative per-expense owed amounts.
pub async fn calculate(
    State(_state): State<AppState>,
    Json(request): Json<CalculateSplitRequest>,
) -> Result<Json<CalculatedSplitResponse>, ApiError> {
    let split = calculate_split(request.amount, &request.split, &request.participants)?;

    Ok(Json(CalculatedSplitResponse::from_split(
        request.split.split_type(),
        &split,
    )))
}
