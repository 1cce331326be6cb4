//! Customer assistant service
//!
//! Answers customer queries with a templated response and hands difficult
//! ones to a person by recording an escalation.

use chrono::Utc;
use core_kernel::{
    ActivityRecord, Component, DocumentKind, EscalationPriority, EscalationRecord,
    IdentifierService, PolicyRecord, Record, RecordStore, RecordStoreExt,
};
use pattern_library::IntentCategory;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::CustomerError;
use crate::intent::categorize_intent;
use crate::response::{compose_response, escalation_notice};
use crate::sentiment::{analyze_sentiment, Sentiment, SentimentResult};

const PENDING: &str = "Pending";

/// Priority of a human follow-up given the customer's sentiment
///
/// Strongly negative queries are High and strongly positive ones Low.
pub fn escalation_priority(sentiment: &SentimentResult) -> EscalationPriority {
    match sentiment.sentiment {
        Sentiment::Negative if sentiment.sentiment_score < -0.5 => EscalationPriority::High,
        Sentiment::Positive if sentiment.sentiment_score > 0.5 => EscalationPriority::Low,
        _ => EscalationPriority::Medium,
    }
}

/// A customer's question
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerQuery {
    pub query: String,
    #[serde(default)]
    pub policy_number: Option<String>,
}

/// Result of handling a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub success: bool,
    pub response: String,
    pub sentiment: Option<SentimentResult>,
    pub intent: Option<IntentCategory>,
    pub policy_found: bool,
    pub warnings: Vec<String>,
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

/// Request to hand a query to a person
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EscalationRequest {
    pub query: String,
    /// Analyzed from the query when absent
    #[serde(default)]
    pub sentiment: Option<SentimentResult>,
    #[serde(default)]
    pub policy_number: Option<String>,
}

/// Result of an escalation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationOutcome {
    pub success: bool,
    pub escalation_id: Option<String>,
    pub priority: Option<EscalationPriority>,
    pub response: String,
    pub warnings: Vec<String>,
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

struct Answer {
    response: String,
    sentiment: SentimentResult,
    intent: IntentCategory,
    policy_found: bool,
}

/// Customer workflows over injected collaborators
pub struct CustomerAssistant {
    store: Arc<dyn RecordStore>,
    ids: Arc<dyn IdentifierService>,
}

impl CustomerAssistant {
    pub fn new(store: Arc<dyn RecordStore>, ids: Arc<dyn IdentifierService>) -> Self {
        Self { store, ids }
    }

    /// Classifies a query and composes a reply
    pub async fn handle_query(&self, query: CustomerQuery) -> QueryOutcome {
        let started = Instant::now();
        let mut warnings = Vec::new();
        let result = self.answer(&query, &mut warnings).await;
        let execution_time_ms = elapsed_ms(started);

        let mut activity = ActivityRecord::new(Component::CustomerAssistant, "handle_query")
            .with_timing(execution_time_ms);
        if let Some(policy_number) = &query.policy_number {
            activity = activity.with_subject(policy_number.clone());
        }

        match result {
            Ok(answer) => {
                info!(
                    intent = %answer.intent,
                    sentiment = %answer.sentiment.sentiment,
                    policy_found = answer.policy_found,
                    "Customer query handled"
                );
                let summary = format!("{} query, {} sentiment", answer.intent, answer.sentiment.sentiment);
                self.store.log_activity(activity.with_summary(summary)).await;

                QueryOutcome {
                    success: true,
                    response: answer.response,
                    sentiment: Some(answer.sentiment),
                    intent: Some(answer.intent),
                    policy_found: answer.policy_found,
                    warnings,
                    error: None,
                    execution_time_ms,
                }
            }
            Err(e) => {
                warn!(error = %e, "Customer query failed");
                self.store.log_activity(activity.failed(e.to_string())).await;

                QueryOutcome {
                    success: false,
                    response: String::new(),
                    sentiment: None,
                    intent: None,
                    policy_found: false,
                    warnings,
                    error: Some(e.to_string()),
                    execution_time_ms,
                }
            }
        }
    }

    async fn answer(
        &self,
        query: &CustomerQuery,
        warnings: &mut Vec<String>,
    ) -> Result<Answer, CustomerError> {
        if query.query.trim().is_empty() {
            return Err(CustomerError::EmptyQuery);
        }

        let sentiment = analyze_sentiment(&query.query);
        let intent = categorize_intent(&query.query);
        let policy = match query.policy_number.as_deref() {
            Some(number) => self.policy_details(number, warnings).await,
            None => None,
        };

        Ok(Answer {
            response: compose_response(intent, sentiment.sentiment, policy.as_ref()),
            policy_found: policy.is_some(),
            sentiment,
            intent,
        })
    }

    async fn policy_details(
        &self,
        policy_number: &str,
        warnings: &mut Vec<String>,
    ) -> Option<PolicyRecord> {
        match self.store.fetch_policy(policy_number).await {
            Ok(Some(policy)) => Some(policy),
            Ok(None) => {
                warnings.push(format!("Policy {policy_number} not found"));
                None
            }
            Err(e) => {
                warn!(policy_number, error = %e, "Policy lookup failed");
                warnings.push(format!("Policy details unavailable: {e}"));
                None
            }
        }
    }

    /// Records an escalation for a human agent
    pub async fn escalate(&self, request: EscalationRequest) -> EscalationOutcome {
        let started = Instant::now();
        let mut warnings = Vec::new();
        let result = self.record_escalation(&request, &mut warnings).await;
        let execution_time_ms = elapsed_ms(started);

        let activity = ActivityRecord::new(Component::CustomerAssistant, "escalate")
            .with_timing(execution_time_ms);

        match result {
            Ok((escalation_id, priority)) => {
                info!(escalation_id = %escalation_id, priority = ?priority, "Query escalated");
                self.store
                    .log_activity(
                        activity
                            .with_subject(escalation_id.clone())
                            .with_summary(format!("{priority:?} priority escalation")),
                    )
                    .await;

                EscalationOutcome {
                    success: true,
                    response: escalation_notice(&escalation_id, priority),
                    escalation_id: Some(escalation_id),
                    priority: Some(priority),
                    warnings,
                    error: None,
                    execution_time_ms,
                }
            }
            Err(e) => {
                warn!(error = %e, "Escalation failed");
                self.store.log_activity(activity.failed(e.to_string())).await;

                EscalationOutcome {
                    success: false,
                    escalation_id: None,
                    priority: None,
                    response: String::new(),
                    warnings,
                    error: Some(e.to_string()),
                    execution_time_ms,
                }
            }
        }
    }

    async fn record_escalation(
        &self,
        request: &EscalationRequest,
        warnings: &mut Vec<String>,
    ) -> Result<(String, EscalationPriority), CustomerError> {
        if request.query.trim().is_empty() {
            return Err(CustomerError::EmptyQuery);
        }
        let sentiment = request
            .sentiment
            .clone()
            .unwrap_or_else(|| analyze_sentiment(&request.query));
        let priority = escalation_priority(&sentiment);

        let now = Utc::now();
        let allocated = self
            .store
            .allocate_number(self.ids.as_ref(), DocumentKind::Escalation, now.date_naive())
            .await?;
        if !allocated.verified {
            warnings.push(format!(
                "Escalation id {} could not be checked for uniqueness",
                allocated.number
            ));
        }

        let record = EscalationRecord {
            escalation_id: allocated.number.clone(),
            query: request.query.clone(),
            policy_number: request.policy_number.clone(),
            priority,
            sentiment: sentiment.sentiment.as_str().to_string(),
            sentiment_score: sentiment.sentiment_score,
            status: PENDING.to_string(),
            created_at: now,
        };
        if let Err(e) = self.store.store(Record::Escalation(record)).await {
            warn!(escalation_id = %allocated.number, error = %e, "Failed to store escalation");
            warnings.push(format!("Escalation {} was not saved: {e}", allocated.number));
        }

        Ok((allocated.number, priority))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
