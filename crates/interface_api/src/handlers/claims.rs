//! Claims handlers

use axum::{
    extract::{Path, State},
    Json,
};
use core_kernel::{ClaimRecord, RecordStoreExt};
use domain_claims::{detect_fraud, ClaimProcessingOutcome, FraudAssessment};
use validator::Validate;

use crate::dto::claims::{FraudCheckRequest, SubmitClaimRequest};
use crate::{error::ApiError, AppState};

/// Scores a claim for fraud without recording anything
pub async fn fraud_check(
    Json(request): Json<FraudCheckRequest>,
) -> Result<Json<FraudAssessment>, ApiError> {
    request.validate()?;
    let (claim, policy, history) = request.into_inputs();
    Ok(Json(detect_fraud(&claim, &policy, &history)))
}

/// Runs the claim processing workflow
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<Json<ClaimProcessingOutcome>, ApiError> {
    request.validate()?;
    Ok(Json(state.claims.process_claim(request.into()).await))
}

/// Gets a claim by number
pub async fn get_claim(
    State(state): State<AppState>,
    Path(claim_number): Path<String>,
) -> Result<Json<ClaimRecord>, ApiError> {
    state
        .store
        .fetch_claim(&claim_number)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Claim {claim_number} not found")))
}
