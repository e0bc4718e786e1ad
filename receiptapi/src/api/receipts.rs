use crate::{api::error::ApiError, core::prelude::*, domain::prelude::*};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{PointsResponse, ProcessResponse};
use tracing::warn;

/// Module for the response bodies of the receipts API.
///
pub mod models {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug)]
    pub struct ProcessResponse {
        pub id: String,
    }

    #[derive(Deserialize, Serialize, Debug)]
    pub struct PointsResponse {
        pub points: u64,
    }
}

/// The endpoint for submitting a receipt.
///
/// Scores the receipt, stores the points under a freshly generated id and
/// returns that id. Bodies that are not a receipt and receipts that fail to
/// score are both rejected with `400 Bad Request`.
///
pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected receipt body");
        ApiError::InvalidReceipt
    })?;

    let record = state.process(&receipt).map_err(|err| {
        warn!(%err, "rejected receipt");
        ApiError::from(err)
    })?;

    Ok(Json(ProcessResponse { id: record.id }))
}

/// The endpoint for looking up the points of a processed receipt.
///
pub async fn points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    match state.points(&id) {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => Err(ApiError::NotFound(id)),
    }
}
