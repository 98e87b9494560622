//! Axum route handlers for the monthly usage counter.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::usage::MonthKey;

#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub month: MonthKey,
    pub count: u64,
    pub warning_threshold: u64,
}

async fn usage_for(state: &AppState, month: MonthKey) -> Result<Json<UsageResponse>, AppError> {
    let count = state.usage.read(&month).await?;
    Ok(Json(UsageResponse {
        month,
        count,
        warning_threshold: state.config.usage_warning_threshold,
    }))
}

/// GET /api/v1/usage/:month
pub async fn handle_get_usage(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<UsageResponse>, AppError> {
    let month: MonthKey = month.parse()?;
    usage_for(&state, month).await
}

/// GET /api/v1/usage
///
/// Current calendar month (UTC).
pub async fn handle_current_usage(
    State(state): State<AppState>,
) -> Result<Json<UsageResponse>, AppError> {
    usage_for(&state, MonthKey::from_date(Utc::now().date_naive())).await
}
