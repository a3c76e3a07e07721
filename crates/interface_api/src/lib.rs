//! HTTP API Layer
//!
//! This crate provides the REST API for the claims system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers per entity plus health checks
//! - **DTOs**: request/response data transfer objects with strict
//!   unknown-field rejection
//! - **Error Handling**: the `{error, message}` envelope with
//!   400/404/409/500 status mapping
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(service, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_records::RecordService;

use crate::config::ApiConfig;
use crate::handlers::{claim, health, policy, policyholder};

/// Application state shared across handlers
///
/// Carries an explicit service handle rather than globals, so tests can
/// spin up isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub service: RecordService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The record service backing all handlers
/// * `config` - API configuration
pub fn create_router(service: RecordService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policyholder_routes = Router::new()
        .route(
            "/",
            post(policyholder::create_policyholder).get(policyholder::list_policyholders),
        )
        .route("/:id", get(policyholder::get_policyholder))
        .route("/:id", put(policyholder::update_policyholder))
        .route("/:id", delete(policyholder::delete_policyholder));

    let policy_routes = Router::new()
        .route("/", post(policy::create_policy).get(policy::list_policies))
        .route("/:id", get(policy::get_policy))
        .route("/:id", put(policy::update_policy))
        .route("/:id", delete(policy::delete_policy));

    let claim_routes = Router::new()
        .route("/", post(claim::create_claim).get(claim::list_claims))
        .route("/:id", get(claim::get_claim))
        .route("/:id", put(claim::update_claim))
        .route("/:id", delete(claim::delete_claim));

    Router::new()
        .merge(health_routes)
        .nest("/policyholders", policyholder_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claim_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
