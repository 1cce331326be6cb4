//! Underwriting DTOs

use chrono::NaiveDate;
use core_kernel::{ImageRef, Policyholder};
use domain_underwriting::{
    ItemInventory, LocationFactors, PolicyApplication, RiskAnalysisRequest, RiskAssessment,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// Direct input to the risk scoring engine
#[derive(Debug, Deserialize, Validate)]
pub struct RiskScoreRequest {
    /// Item counts by category; negative counts are treated as zero
    #[serde(default)]
    pub items: BTreeMap<String, i64>,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub location_factors: Vec<String>,
}

impl RiskScoreRequest {
    pub fn into_inputs(self) -> (ItemInventory, LocationFactors) {
        (
            ItemInventory::from_counts(self.items),
            LocationFactors::from_tags(self.location_factors),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RiskAnalysisBody {
    #[serde(default)]
    #[validate(length(max = 100_000))]
    pub narrative: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
}

impl From<RiskAnalysisBody> for RiskAnalysisRequest {
    fn from(body: RiskAnalysisBody) -> Self {
        RiskAnalysisRequest {
            image: body.image.map(ImageRef),
            narrative: body.narrative,
            location: body.location,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PolicyholderBody {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<PolicyholderBody> for Policyholder {
    fn from(body: PolicyholderBody) -> Self {
        Policyholder {
            name: body.name,
            email: body.email,
            phone: body.phone,
            address: body.address,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_deductible"))]
pub struct IssuePolicyRequest {
    #[validate(nested)]
    pub policyholder: PolicyholderBody,
    #[serde(default)]
    pub policy_type: Option<String>,
    pub assessment: RiskAssessment,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub deductible: Option<Decimal>,
}

fn validate_deductible(request: &IssuePolicyRequest) -> Result<(), ValidationError> {
    match request.deductible {
        Some(deductible) if deductible < Decimal::ZERO => {
            Err(ValidationError::new("negative_deductible"))
        }
        _ => Ok(()),
    }
}

impl From<IssuePolicyRequest> for PolicyApplication {
    fn from(request: IssuePolicyRequest) -> Self {
        PolicyApplication {
            policyholder: request.policyholder.into(),
            policy_type: request.policy_type,
            assessment: request.assessment,
            start_date: request.start_date,
            deductible: request.deductible,
        }
    }
}
