//! Customer DTOs

use domain_customer::{CustomerQuery, EscalationRequest, IntentCategory, SentimentResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of the sentiment and intent endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct TextRequest {
    #[validate(length(max = 100_000))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntentResponse {
    pub intent: IntentCategory,
}

#[derive(Debug, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(length(min = 1, max = 100_000))]
    pub query: String,
    #[serde(default)]
    pub policy_number: Option<String>,
}

impl From<QueryRequest> for CustomerQuery {
    fn from(request: QueryRequest) -> Self {
        CustomerQuery {
            query: request.query,
            policy_number: request.policy_number,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EscalationBody {
    #[validate(length(min = 1, max = 100_000))]
    pub query: String,
    #[serde(default)]
    pub sentiment: Option<SentimentResult>,
    #[serde(default)]
    pub policy_number: Option<String>,
}

impl From<EscalationBody> for EscalationRequest {
    fn from(body: EscalationBody) -> Self {
        EscalationRequest {
            query: body.query,
            sentiment: body.sentiment,
            policy_number: body.policy_number,
        }
    }
}
