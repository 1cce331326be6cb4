//! Claim Decision Orchestrator
//!
//! Sequences narrative extraction, policy lookup, fraud scoring and the claim
//! decision for one submission, then records the claim. Collaborator failures
//! degrade the result and add a warning; only a missing policy fails the
//! submission outright.

use chrono::{NaiveDate, Utc};
use core_kernel::{
    parse_date, ActivityRecord, ClaimRecord, Component, DecisionStatus, DescriptionService,
    DocumentKind, IdentifierService, ImageRef, Record, RecordStore, RecordStoreExt,
};
use domain_documents::{
    classify_and_extract, extract_claimed_items, summarize_narrative, DocumentAnalysis,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::decision::{decide_claim, ClaimDecision};
use crate::error::ClaimError;
use crate::fraud::{
    detect_fraud, mentions_police_report, ClaimContext, CustomerClaimHistory, PolicySnapshot,
};

/// A claim as submitted by the customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub policy_number: String,
    pub description: String,
    /// Narrative text, used as-is when present
    #[serde(default)]
    pub narrative: Option<String>,
    /// Image to describe when no narrative is given
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Raw date text; missing means today
    #[serde(default)]
    pub report_date: Option<String>,
    /// Items named by the caller, listed before narrative items
    #[serde(default)]
    pub items: Vec<String>,
    /// Inferred from the description when absent
    #[serde(default)]
    pub has_police_report: Option<bool>,
    #[serde(default)]
    pub history: CustomerClaimHistory,
}

/// Result of processing one claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimProcessingOutcome {
    pub success: bool,
    pub policy_number: String,
    pub claim_number: Option<String>,
    pub decision: Option<ClaimDecision>,
    pub items_claimed: Vec<String>,
    pub document: Option<DocumentAnalysis>,
    pub narrative_summary: String,
    pub warnings: Vec<String>,
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

struct ProcessedClaim {
    claim_number: String,
    decision: ClaimDecision,
    items: Vec<String>,
    document: DocumentAnalysis,
    narrative_summary: String,
}

/// Claim workflow over injected collaborators
pub struct ClaimsProcessor {
    store: Arc<dyn RecordStore>,
    describer: Arc<dyn DescriptionService>,
    ids: Arc<dyn IdentifierService>,
}

impl ClaimsProcessor {
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

    /// Scores and decides a claim; never fails outward
    pub async fn process_claim(&self, submission: ClaimSubmission) -> ClaimProcessingOutcome {
        let started = Instant::now();
        let mut warnings = Vec::new();
        let result = self.run(&submission, &mut warnings).await;
        let execution_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let activity = ActivityRecord::new(Component::ClaimsProcessor, "process_claim")
            .with_subject(submission.policy_number.clone())
            .with_timing(execution_time_ms);

        match result {
            Ok(processed) => {
                let decision = &processed.decision;
                info!(
                    claim_number = %processed.claim_number,
                    policy_number = %submission.policy_number,
                    status = %decision.status,
                    fraud_score = %decision.fraud_assessment.fraud_score,
                    "Claim processed"
                );
                let summary = format!(
                    "{} {}, fraud score {}, amount {}",
                    processed.claim_number,
                    decision.status,
                    decision.fraud_assessment.fraud_score,
                    decision.claim_amount
                );
                self.store.log_activity(activity.with_summary(summary)).await;

                ClaimProcessingOutcome {
                    success: true,
                    policy_number: submission.policy_number,
                    claim_number: Some(processed.claim_number),
                    decision: Some(processed.decision),
                    items_claimed: processed.items,
                    document: Some(processed.document),
                    narrative_summary: processed.narrative_summary,
                    warnings,
                    error: None,
                    execution_time_ms,
                }
            }
            Err(e) => {
                warn!(policy_number = %submission.policy_number, error = %e, "Claim processing failed");
                self.store.log_activity(activity.failed(e.to_string())).await;

                ClaimProcessingOutcome {
                    success: false,
                    policy_number: submission.policy_number,
                    claim_number: None,
                    decision: None,
                    items_claimed: Vec::new(),
                    document: None,
                    narrative_summary: String::new(),
                    warnings,
                    error: Some(e.to_string()),
                    execution_time_ms,
                }
            }
        }
    }

    async fn run(
        &self,
        submission: &ClaimSubmission,
        warnings: &mut Vec<String>,
    ) -> Result<ProcessedClaim, ClaimError> {
        let policy_number = submission.policy_number.trim();
        if policy_number.is_empty() {
            return Err(ClaimError::MissingPolicyNumber);
        }

        let narrative = self.narrative_text(submission, warnings).await;
        let document_text = if narrative.trim().is_empty() {
            submission.description.as_str()
        } else {
            narrative.as_str()
        };
        let document = classify_and_extract(document_text);

        let mut items = submission.items.clone();
        items.extend(extract_claimed_items(&narrative));

        let policy = self.policy_snapshot(policy_number, warnings).await?;

        let today = Utc::now().date_naive();
        let report_date = self.report_date(submission, today, warnings);
        let has_police_report = submission
            .has_police_report
            .unwrap_or_else(|| mentions_police_report(&submission.description));

        let context = ClaimContext {
            description: submission.description.clone(),
            report_date,
            items: items.clone(),
            image_summary: summarize_narrative(&narrative),
            has_police_report,
        };
        let fraud = detect_fraud(&context, &policy, &submission.history);
        let decision = decide_claim(fraud, &items, &policy)?;

        let allocated = self
            .store
            .allocate_number(self.ids.as_ref(), DocumentKind::Claim, today)
            .await?;
        if !allocated.verified {
            warnings.push(format!(
                "Claim number {} could not be checked for uniqueness",
                allocated.number
            ));
        }

        let record = ClaimRecord {
            claim_number: allocated.number.clone(),
            policy_number: policy_number.to_string(),
            report_date,
            description: submission.description.clone(),
            status: decision.status,
            amount_requested: decision.claim_amount,
            amount_approved: if decision.status == DecisionStatus::Approved {
                decision.claim_amount
            } else {
                Decimal::ZERO
            },
            fraud_score: decision.fraud_assessment.fraud_score,
            fraud_indicators: decision.fraud_assessment.indicators_found.clone(),
        };
        if let Err(e) = self.store.store(Record::Claim(record)).await {
            warn!(claim_number = %allocated.number, error = %e, "Failed to store claim");
            warnings.push(format!("Claim {} was not saved: {e}", allocated.number));
        }

        Ok(ProcessedClaim {
            claim_number: allocated.number,
            narrative_summary: context.image_summary,
            decision,
            items,
            document,
        })
    }

    async fn narrative_text(&self, submission: &ClaimSubmission, warnings: &mut Vec<String>) -> String {
        if let Some(narrative) = submission
            .narrative
            .as_deref()
            .filter(|n| !n.trim().is_empty())
        {
            return narrative.to_string();
        }
        let Some(image) = submission.image.as_ref() else {
            return String::new();
        };
        match self.describer.describe(image).await {
            Ok(text) => text,
            Err(e) => {
                warn!(image = %image, error = %e, "Image description failed");
                warnings.push(format!("Image description unavailable: {e}"));
                String::new()
            }
        }
    }

    async fn policy_snapshot(
        &self,
        policy_number: &str,
        warnings: &mut Vec<String>,
    ) -> Result<PolicySnapshot, ClaimError> {
        match self.store.fetch_policy(policy_number).await {
            Ok(Some(policy)) => Ok(PolicySnapshot::from(&policy)),
            Ok(None) => Err(ClaimError::PolicyNotFound(policy_number.to_string())),
            Err(e) => {
                warn!(policy_number, error = %e, "Policy lookup failed, using default terms");
                warnings.push(format!("Policy details unavailable, default terms applied: {e}"));
                Ok(PolicySnapshot::fallback())
            }
        }
    }

    fn report_date(
        &self,
        submission: &ClaimSubmission,
        today: NaiveDate,
        warnings: &mut Vec<String>,
    ) -> Option<NaiveDate> {
        match submission.report_date.as_deref() {
            None => Some(today),
            Some(text) => {
                let parsed = parse_date(text);
                if parsed.is_none() {
                    warnings.push(format!("Report date '{text}' not recognised"));
                }
                parsed
            }
        }
    }
}
