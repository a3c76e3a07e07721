//! Policyholder handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::policyholder::*;
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Creates a new policyholder
pub async fn create_policyholder(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePolicyholderRequest>,
) -> Result<(StatusCode, Json<PolicyholderResponse>), ApiError> {
    let record = state.service.create_policyholder(request.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists policyholders
pub async fn list_policyholders(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicyholderResponse>>, ApiError> {
    let records = state.service.list_policyholders().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Gets a policyholder by id
pub async fn get_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyholderResponse>, ApiError> {
    let record = state.service.get_policyholder(&id).await?;
    Ok(Json(record.into()))
}

/// Applies a partial update to a policyholder
pub async fn update_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdatePolicyholderRequest>,
) -> Result<Json<PolicyholderResponse>, ApiError> {
    let record = state
        .service
        .update_policyholder(&id, request.into())
        .await?;
    Ok(Json(record.into()))
}

/// Deletes a policyholder; blocked while it still owns policies
pub async fn delete_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete_policyholder(&id).await?;
    Ok(Json(MessageResponse::new(
        "Policyholder deleted successfully",
    )))
}
