//! Underwriting handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use core_kernel::{PolicyRecord, RecordStoreExt};
use domain_underwriting::{
    assess_risk, summarize_coverage, CoverageSummary, PolicyIssuanceOutcome,
    RiskAnalysisOutcome, RiskAssessment,
};
use validator::Validate;

use crate::dto::underwriting::{IssuePolicyRequest, RiskAnalysisBody, RiskScoreRequest};
use crate::{error::ApiError, AppState};

/// Scores an item inventory and location factors
pub async fn risk_score(
    Json(request): Json<RiskScoreRequest>,
) -> Result<Json<RiskAssessment>, ApiError> {
    request.validate()?;
    let (items, location_factors) = request.into_inputs();
    Ok(Json(assess_risk(&items, &location_factors)))
}

/// Runs the risk analysis workflow
pub async fn analyze_risk(
    State(state): State<AppState>,
    Json(request): Json<RiskAnalysisBody>,
) -> Result<Json<RiskAnalysisOutcome>, ApiError> {
    request.validate()?;
    Ok(Json(state.underwriting.analyze_risk(request.into()).await))
}

/// Issues a policy from a risk assessment
pub async fn issue_policy(
    State(state): State<AppState>,
    Json(request): Json<IssuePolicyRequest>,
) -> Result<Json<PolicyIssuanceOutcome>, ApiError> {
    request.validate()?;
    Ok(Json(state.underwriting.issue_policy(request.into()).await))
}

/// Gets a policy by number
pub async fn get_policy(
    State(state): State<AppState>,
    Path(policy_number): Path<String>,
) -> Result<Json<PolicyRecord>, ApiError> {
    state
        .store
        .fetch_policy(&policy_number)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Policy {policy_number} not found")))
}

/// Gets a policy's coverage summary with days remaining as of today
pub async fn get_coverage(
    State(state): State<AppState>,
    Path(policy_number): Path<String>,
) -> Result<Json<CoverageSummary>, ApiError> {
    let policy = state
        .store
        .fetch_policy(&policy_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Policy {policy_number} not found")))?;
    Ok(Json(summarize_coverage(&policy, Utc::now().date_naive())))
}
