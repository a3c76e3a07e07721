//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::claim::*;
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Creates a new claim; status defaults to Pending
pub async fn create_claim(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let record = state.service.create_claim(request.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let records = state.service.list_claims().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Gets a claim by id
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let record = state.service.get_claim(&id).await?;
    Ok(Json(record.into()))
}

/// Applies a partial update to a claim
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let record = state.service.update_claim(&id, request.into()).await?;
    Ok(Json(record.into()))
}

/// Deletes a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete_claim(&id).await?;
    Ok(Json(MessageResponse::new("Claim deleted successfully")))
}
