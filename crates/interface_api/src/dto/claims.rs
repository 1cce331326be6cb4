//! Claims DTOs

use chrono::Utc;
use core_kernel::{parse_date, ImageRef};
use domain_claims::{
    mentions_police_report, ClaimContext, ClaimSubmission, CustomerClaimHistory, PolicySnapshot,
};
use serde::Deserialize;
use validator::Validate;

/// Direct input to the fraud scoring engine
#[derive(Debug, Deserialize, Validate)]
pub struct FraudCheckRequest {
    #[validate(length(max = 100_000))]
    pub description: String,
    /// Raw date text; missing means today
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub image_summary: String,
    /// Inferred from the description when absent
    #[serde(default)]
    pub has_police_report: Option<bool>,
    /// Standard coverage and deductible with an unknown start date when absent
    #[serde(default)]
    pub policy: Option<PolicySnapshot>,
    #[serde(default)]
    pub history: CustomerClaimHistory,
}

impl FraudCheckRequest {
    pub fn into_inputs(self) -> (ClaimContext, PolicySnapshot, CustomerClaimHistory) {
        let report_date = match self.report_date.as_deref() {
            Some(raw) => parse_date(raw),
            None => Some(Utc::now().date_naive()),
        };
        let has_police_report = self
            .has_police_report
            .unwrap_or_else(|| mentions_police_report(&self.description));
        let claim = ClaimContext {
            description: self.description,
            report_date,
            items: self.items,
            image_summary: self.image_summary,
            has_police_report,
        };
        (
            claim,
            self.policy.unwrap_or_else(PolicySnapshot::fallback),
            self.history,
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    #[validate(length(min = 1, max = 64))]
    pub policy_number: String,
    #[validate(length(max = 100_000))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 100_000))]
    pub narrative: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub has_police_report: Option<bool>,
    #[serde(default)]
    pub history: CustomerClaimHistory,
}

impl From<SubmitClaimRequest> for ClaimSubmission {
    fn from(request: SubmitClaimRequest) -> Self {
        ClaimSubmission {
            policy_number: request.policy_number,
            description: request.description,
            narrative: request.narrative,
            image: request.image.map(ImageRef),
            report_date: request.report_date,
            items: request.items,
            has_police_report: request.has_police_report,
            history: request.history,
        }
    }
}
