//! Underwriting service
//!
//! Runs the risk analysis workflow (narrative → inventory + location factors →
//! risk assessment) and issues policies from a finished assessment. Both
//! operations return an outcome object rather than an error so one bad
//! application cannot disturb others.

use chrono::{Days, Months, NaiveDate, Utc};
use core_kernel::{
    ActivityRecord, Component, CoreError, DescriptionService, DocumentKind, IdentifierService,
    ImageRef, PolicyRecord, PolicyStatus, Policyholder, Record, RecordStore, RecordStoreExt,
};
use domain_documents::summarize_narrative;
use pattern_library::claims::DEFAULT_POLICY_DEDUCTIBLE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::UnderwritingError;
use crate::inventory::{extract_item_inventory, ItemInventory};
use crate::location::{classify_location, LocationFactors};
use crate::risk::{assess_risk, RiskAssessment};

const DEFAULT_POLICY_TYPE: &str = "Home Insurance";

/// Input to the risk analysis workflow
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskAnalysisRequest {
    /// Image to describe when no narrative is given
    pub image: Option<ImageRef>,
    /// Narrative text, used as-is when present
    pub narrative: Option<String>,
    pub location: String,
}

/// Result of the risk analysis workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysisOutcome {
    pub success: bool,
    pub items: ItemInventory,
    pub location_factors: LocationFactors,
    pub assessment: Option<RiskAssessment>,
    pub narrative_summary: String,
    pub warnings: Vec<String>,
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

/// Request to issue a policy from a completed risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyApplication {
    pub policyholder: Policyholder,
    pub policy_type: Option<String>,
    pub assessment: RiskAssessment,
    /// Defaults to today
    pub start_date: Option<NaiveDate>,
    /// Defaults to the standard deductible
    pub deductible: Option<Decimal>,
}

/// Result of policy issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyIssuanceOutcome {
    pub success: bool,
    pub policy: Option<PolicyRecord>,
    pub warnings: Vec<String>,
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

struct Analysis {
    items: ItemInventory,
    location_factors: LocationFactors,
    assessment: RiskAssessment,
    narrative_summary: String,
}

/// Underwriting workflow over injected collaborators
pub struct UnderwritingAnalyzer {
    store: Arc<dyn RecordStore>,
    describer: Arc<dyn DescriptionService>,
    ids: Arc<dyn IdentifierService>,
}

impl UnderwritingAnalyzer {
    pub fn new(
        store: Arc<dyn RecordStore>,
        describer: Arc<dyn DescriptionService>,
        ids: Arc<dyn IdentifierService>,
    ) -> Self {
        Self {
            store,
            describer,
            ids,
        }
    }

    /// Scores the property described by a narrative or image at a location
    pub async fn analyze_risk(&self, request: RiskAnalysisRequest) -> RiskAnalysisOutcome {
        let started = Instant::now();
        let mut warnings = Vec::new();
        let result = self.run_analysis(&request, &mut warnings).await;
        let execution_time_ms = elapsed_ms(started);

        let activity = ActivityRecord::new(Component::UnderwritingAnalyzer, "analyze_risk")
            .with_subject(request.location.clone())
            .with_timing(execution_time_ms);

        match result {
            Ok(analysis) => {
                info!(
                    location = %request.location,
                    risk_score = %analysis.assessment.risk_score,
                    category = %analysis.assessment.risk_category,
                    "Risk analysis completed"
                );
                let summary = format!(
                    "{} risk, score {}, {} items",
                    analysis.assessment.risk_category,
                    analysis.assessment.risk_score,
                    analysis.items.total()
                );
                self.store.log_activity(activity.with_summary(summary)).await;

                RiskAnalysisOutcome {
                    success: true,
                    items: analysis.items,
                    location_factors: analysis.location_factors,
                    assessment: Some(analysis.assessment),
                    narrative_summary: analysis.narrative_summary,
                    warnings,
                    error: None,
                    execution_time_ms,
                }
            }
            Err(e) => {
                warn!(location = %request.location, error = %e, "Risk analysis failed");
                self.store.log_activity(activity.failed(e.to_string())).await;

                RiskAnalysisOutcome {
                    success: false,
                    items: ItemInventory::new(),
                    location_factors: LocationFactors::new(),
                    assessment: None,
                    narrative_summary: String::new(),
                    warnings,
                    error: Some(e.to_string()),
                    execution_time_ms,
                }
            }
        }
    }

    async fn run_analysis(
        &self,
        request: &RiskAnalysisRequest,
        warnings: &mut Vec<String>,
    ) -> Result<Analysis, UnderwritingError> {
        let narrative = self.narrative_text(request, warnings).await?;
        let items = extract_item_inventory(&narrative);
        let location_factors = classify_location(&request.location);
        let assessment = assess_risk(&items, &location_factors);

        Ok(Analysis {
            narrative_summary: summarize_narrative(&narrative),
            items,
            location_factors,
            assessment,
        })
    }

    async fn narrative_text(
        &self,
        request: &RiskAnalysisRequest,
        warnings: &mut Vec<String>,
    ) -> Result<String, UnderwritingError> {
        if let Some(narrative) = request.narrative.as_deref().filter(|n| !n.trim().is_empty()) {
            return Ok(narrative.to_string());
        }
        let image = request.image.as_ref().ok_or(UnderwritingError::MissingNarrative)?;
        match self.describer.describe(image).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(image = %image, error = %e, "Image description failed");
                warnings.push(format!("Image description unavailable: {e}"));
                Ok(String::new())
            }
        }
    }

    /// Issues a policy priced from the given assessment
    pub async fn issue_policy(&self, application: PolicyApplication) -> PolicyIssuanceOutcome {
        let started = Instant::now();
        let mut warnings = Vec::new();
        let result = self.run_issuance(&application, &mut warnings).await;
        let execution_time_ms = elapsed_ms(started);

        let activity = ActivityRecord::new(Component::UnderwritingAnalyzer, "issue_policy")
            .with_timing(execution_time_ms);

        match result {
            Ok(policy) => {
                info!(
                    policy_number = %policy.policy_number,
                    coverage = %policy.coverage_amount,
                    "Policy issued"
                );
                let summary = format!(
                    "Issued {} for {}, annual premium {}",
                    policy.policy_type, policy.policyholder.name, policy.annual_premium
                );
                self.store
                    .log_activity(
                        activity
                            .with_subject(policy.policy_number.clone())
                            .with_summary(summary),
                    )
                    .await;

                PolicyIssuanceOutcome {
                    success: true,
                    policy: Some(policy),
                    warnings,
                    error: None,
                    execution_time_ms,
                }
            }
            Err(e) => {
                warn!(
                    policyholder = %application.policyholder.name,
                    error = %e,
                    "Policy issuance failed"
                );
                self.store.log_activity(activity.failed(e.to_string())).await;

                PolicyIssuanceOutcome {
                    success: false,
                    policy: None,
                    warnings,
                    error: Some(e.to_string()),
                    execution_time_ms,
                }
            }
        }
    }

    async fn run_issuance(
        &self,
        application: &PolicyApplication,
        warnings: &mut Vec<String>,
    ) -> Result<PolicyRecord, UnderwritingError> {
        if application.policyholder.name.trim().is_empty() {
            return Err(CoreError::validation("policyholder name is required").into());
        }
        let assessment = &application.assessment;
        if assessment.recommended_coverage <= Decimal::ZERO {
            return Err(UnderwritingError::NothingToInsure);
        }
        let deductible = application
            .deductible
            .unwrap_or_else(|| Decimal::from(DEFAULT_POLICY_DEDUCTIBLE));
        if deductible < Decimal::ZERO {
            return Err(CoreError::validation("deductible cannot be negative").into());
        }

        let today = Utc::now().date_naive();
        let start_date = application.start_date.unwrap_or(today);
        let end_date = start_date
            .checked_add_months(Months::new(12))
            .or_else(|| start_date.checked_add_days(Days::new(365)))
            .ok_or_else(|| CoreError::validation("start date out of range"))?;

        let allocated = self
            .store
            .allocate_number(self.ids.as_ref(), DocumentKind::Policy, today)
            .await?;
        if !allocated.verified {
            warnings.push(format!(
                "Policy number {} could not be checked for uniqueness",
                allocated.number
            ));
        }

        let policy = PolicyRecord {
            policy_number: allocated.number,
            policy_type: application
                .policy_type
                .clone()
                .unwrap_or_else(|| DEFAULT_POLICY_TYPE.to_string()),
            policyholder: application.policyholder.clone(),
            coverage_amount: assessment.recommended_coverage,
            annual_premium: assessment.annual_premium,
            monthly_premium: assessment.monthly_premium,
            deductible,
            start_date,
            end_date,
            status: PolicyStatus::Active,
            risk_score: assessment.risk_score,
        };

        self.store.store(Record::Policy(policy.clone())).await?;
        Ok(policy)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
