//! Policy handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::policy::*;
use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Creates a new policy
pub async fn create_policy(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    let record = state.service.create_policy(request.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists policies
pub async fn list_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let records = state.service.list_policies().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Gets a policy by id
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let record = state.service.get_policy(&id).await?;
    Ok(Json(record.into()))
}

/// Applies a partial update to a policy
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdatePolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let record = state.service.update_policy(&id, request.into()).await?;
    Ok(Json(record.into()))
}

/// Deletes a policy; blocked while claims are filed against it
pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete_policy(&id).await?;
    Ok(Json(MessageResponse::new("Policy deleted successfully")))
}
