//! Handler for recording visited links.

use axum::{Json, extract::State};

use crate::api::dto::links::LinksRequest;
use crate::api::dto::status::StatusResponse;
use crate::application::services::IngestOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Records the domains of a batch of raw links.
///
/// # Endpoint
///
/// `POST /visited_links` with body `{"links": ["...", ...]}`
///
/// One timestamp is taken for the whole batch. Links that fail extraction or
/// validation are named in the failure status while the resolved subset is
/// still written, so a failure status does not imply a rolled-back write.
///
/// # Errors
///
/// Returns [`AppError::Store`] if the store write fails; rendered as a
/// failure envelope like every other error.
pub async fn visited_links_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinksRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    match state.visit_service.ingest(&payload.links).await? {
        IngestOutcome::Recorded => Ok(Json(StatusResponse::ok())),
        IngestOutcome::Rejected { failed } => Ok(Json(StatusResponse::failed(format!(
            "domain extract failed for : {}",
            failed.join(", ")
        )))),
    }
}
