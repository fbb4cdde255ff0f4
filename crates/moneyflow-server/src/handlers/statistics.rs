//! Statistics handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState};
use moneyflow_core::models::PeriodStatistics;

/// Query parameters for an explicit period
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query parameters for date-derived ranges (daily/weekly/monthly)
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

/// Query parameters for the summary endpoint
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /api/statistics/period - Statistics over an explicit date range
pub async fn statistics_period(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<PeriodStatistics>, AppError> {
    let stats = state
        .db
        .period_statistics(params.start_date, params.end_date)?;
    Ok(Json(stats))
}

/// GET /api/statistics/daily - Statistics for a single day
pub async fn statistics_daily(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateQuery>,
) -> Result<Json<PeriodStatistics>, AppError> {
    let stats = state.db.daily_statistics_for(params.date)?;
    Ok(Json(stats))
}

/// GET /api/statistics/weekly - Statistics for the Monday-to-Sunday week
/// containing the given date
pub async fn statistics_weekly(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateQuery>,
) -> Result<Json<PeriodStatistics>, AppError> {
    let stats = state.db.weekly_statistics_for(params.date)?;
    Ok(Json(stats))
}

/// GET /api/statistics/monthly - Statistics for the calendar month
/// containing the given date
pub async fn statistics_monthly(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateQuery>,
) -> Result<Json<PeriodStatistics>, AppError> {
    let stats = state.db.monthly_statistics_for(params.date)?;
    Ok(Json(stats))
}

/// GET /api/statistics/summary - Explicit range when both bounds are given,
/// otherwise the whole ledger (earliest to latest transaction date)
pub async fn statistics_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<PeriodStatistics>, AppError> {
    let stats = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => state.db.period_statistics(start, end)?,
        _ => state.db.summary_statistics()?,
    };
    Ok(Json(stats))
}
