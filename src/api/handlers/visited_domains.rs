//! Handler for time-window domain queries.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::links::RangeParams;
use crate::api::dto::status::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

fn parse_score(name: &str, value: Option<String>) -> Result<f64, AppError> {
    let raw = value.ok_or_else(|| AppError::parse(format!("missing query parameter '{name}'")))?;

    raw.parse::<f64>().map_err(|_| {
        AppError::parse(format!("query parameter '{name}' is not a number: '{raw}'"))
    })
}

/// Lists domains recorded inside a time window.
///
/// # Endpoint
///
/// `GET /visited_domains?from=<epoch-seconds>&to=<epoch-seconds>`
///
/// Both bounds are inclusive. An inverted window (`from > to`) yields an
/// empty domain list, not an error.
///
/// # Errors
///
/// Returns [`AppError::Parse`] if either bound is missing or non-numeric.
/// Returns [`AppError::Store`] if the store read fails.
pub async fn visited_domains_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<StatusResponse>, AppError> {
    let from = parse_score("from", params.from)?;
    let to = parse_score("to", params.to)?;

    let domains = state.visit_service.query(from, to).await?;

    Ok(Json(StatusResponse::with_domains(domains)))
}
