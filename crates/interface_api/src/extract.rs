//! Request extractors
//!
//! Axum's stock `Json` rejection produces a plain-text 422. This API
//! reports every malformed payload - bad JSON, wrong-typed fields,
//! unknown fields - as a 400 with the `{error, message}` envelope, so
//! handlers use this wrapper instead.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON extractor whose rejection maps onto the API error envelope
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
