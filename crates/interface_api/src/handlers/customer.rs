//! Customer handlers

use axum::{extract::State, Json};
use domain_customer::{
    analyze_sentiment, categorize_intent, EscalationOutcome, QueryOutcome, SentimentResult,
};
use validator::Validate;

use crate::dto::customer::{EscalationBody, IntentResponse, QueryRequest, TextRequest};
use crate::{error::ApiError, AppState};

pub async fn sentiment(Json(request): Json<TextRequest>) -> Result<Json<SentimentResult>, ApiError> {
    request.validate()?;
    Ok(Json(analyze_sentiment(&request.text)))
}

pub async fn intent(Json(request): Json<TextRequest>) -> Result<Json<IntentResponse>, ApiError> {
    request.validate()?;
    Ok(Json(IntentResponse {
        intent: categorize_intent(&request.text),
    }))
}

/// Answers a customer query
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryOutcome>, ApiError> {
    request.validate()?;
    Ok(Json(state.customer.handle_query(request.into()).await))
}

/// Hands a query to a human agent
pub async fn escalate(
    State(state): State<AppState>,
    Json(request): Json<EscalationBody>,
) -> Result<Json<EscalationOutcome>, ApiError> {
    request.validate()?;
    Ok(Json(state.customer.escalate(request.into()).await))
}
