//! HTTP API Layer
//!
//! This crate exposes the inference engines and workflow services as JSON
//! endpoints using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **Middleware**: Request logging with request ids
//! - **DTOs**: Validated request bodies
//! - **Error Handling**: Consistent error responses
//!
//! Engine endpoints (`risk-score`, `fraud-checks`, `sentiment`, ...) are pure
//! and never touch the store. Workflow endpoints always answer 200 with an
//! outcome body carrying `success`, `warnings` and `error`.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(store, describer, ids, config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod describer;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use core_kernel::{DescriptionService, IdentifierService, RecordStore};
use domain_claims::ClaimsProcessor;
use domain_customer::CustomerAssistant;
use domain_underwriting::UnderwritingAnalyzer;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, customer, documents, health, underwriting};
use crate::middleware::request_logging;

pub use crate::describer::UnconfiguredDescriptionService;
pub use crate::error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub underwriting: Arc<UnderwritingAnalyzer>,
    pub claims: Arc<ClaimsProcessor>,
    pub customer: Arc<CustomerAssistant>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds every workflow service over the same collaborators
    pub fn new(
        store: Arc<dyn RecordStore>,
        describer: Arc<dyn DescriptionService>,
        ids: Arc<dyn IdentifierService>,
        config: ApiConfig,
    ) -> Self {
        Self {
            underwriting: Arc::new(UnderwritingAnalyzer::new(
                store.clone(),
                describer.clone(),
                ids.clone(),
            )),
            claims: Arc::new(ClaimsProcessor::new(store.clone(), describer, ids.clone())),
            customer: Arc::new(CustomerAssistant::new(store.clone(), ids)),
            store,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let document_routes = Router::new().route("/analyze", post(documents::analyze_document));

    let underwriting_routes = Router::new()
        .route("/risk-score", post(underwriting::risk_score))
        .route("/analyses", post(underwriting::analyze_risk))
        .route("/policies", post(underwriting::issue_policy));

    let policy_routes = Router::new()
        .route("/:policy_number", get(underwriting::get_policy))
        .route("/:policy_number/coverage", get(underwriting::get_coverage));

    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/fraud-checks", post(claims::fraud_check))
        .route("/:claim_number", get(claims::get_claim));

    let customer_routes = Router::new()
        .route("/sentiment", post(customer::sentiment))
        .route("/intent", post(customer::intent))
        .route("/queries", post(customer::handle_query))
        .route("/escalations", post(customer::escalate));

    let api_routes = Router::new()
        .nest("/documents", document_routes)
        .nest("/underwriting", underwriting_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claims_routes)
        .nest("/customer", customer_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
