//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use moneyflow_core::models::{NewTransaction, Transaction, TransactionType, UpdateTransaction};

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Inclusive lower date bound (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    /// Filter by transaction type
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

/// POST /api/transactions - Create a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let transaction = state.db.insert_transaction(&req)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /api/transactions - List transactions
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    // Input validation: clamp pagination parameters
    let limit = params.limit.max(1).min(MAX_PAGE_LIMIT);
    let skip = params.skip.max(0);

    let transactions = state.db.list_transactions(
        skip,
        limit,
        params.start_date,
        params.end_date,
        params.kind,
    )?;

    Ok(Json(transactions))
}

/// GET /api/transactions/:id - Get a single transaction
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = state
        .db
        .get_transaction(id)?
        .ok_or_else(|| AppError::not_found(&format!("Transaction {} not found", id)))?;

    Ok(Json(transaction))
}

/// PUT /api/transactions/:id - Partially update a transaction
///
/// Only the fields present in the body are applied; omitted fields retain
/// their prior values.
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = state
        .db
        .update_transaction(id, &req)?
        .ok_or_else(|| AppError::not_found(&format!("Transaction {} not found", id)))?;

    Ok(Json(transaction))
}

/// DELETE /api/transactions/:id - Delete a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.db.delete_transaction(id)? {
        return Err(AppError::not_found(&format!(
            "Transaction {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
