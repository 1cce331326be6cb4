//! Tagged records exchanged with the record store
//!
//! Each table has one record type. The store only sees the [`Record`] enum,
//! which serializes with a `table` tag so adapters can persist payloads as
//! JSON without knowing the individual shapes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::identifiers::RecordId;

/// Logical tables of the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Policies,
    Claims,
    ActivityLog,
    Escalations,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Policies,
        Table::Claims,
        Table::ActivityLog,
        Table::Escalations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Policies => "policies",
            Table::Claims => "claims",
            Table::ActivityLog => "activity_log",
            Table::Escalations => "escalations",
        }
    }

    /// Looks a table up by its stored name
    pub fn from_name(name: &str) -> Option<Table> {
        Table::ALL.into_iter().find(|table| table.as_str() == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details of the insured party
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Policyholder {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Cancelled,
    Expired,
}

/// An issued policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_number: String,
    pub policy_type: String,
    pub policyholder: Policyholder,
    pub coverage_amount: Decimal,
    pub annual_premium: Decimal,
    pub monthly_premium: Decimal,
    pub deductible: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PolicyStatus,
    pub risk_score: Decimal,
}

/// Final status of a claim decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionStatus {
    Approved,
    #[serde(rename = "Under Review")]
    UnderReview,
    Rejected,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Approved => "Approved",
            DecisionStatus::UnderReview => "Under Review",
            DecisionStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decided claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub claim_number: String,
    pub policy_number: String,
    pub report_date: Option<NaiveDate>,
    pub description: String,
    pub status: DecisionStatus,
    pub amount_requested: Decimal,
    pub amount_approved: Decimal,
    pub fraud_score: Decimal,
    pub fraud_indicators: Vec<String>,
}

/// Service that produced an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    UnderwritingAnalyzer,
    ClaimsProcessor,
    CustomerAssistant,
}

/// One entry of the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_id: Uuid,
    pub component: Component,
    pub action: String,
    /// Policy number, claim number or other subject of the action
    pub subject: Option<String>,
    pub success: bool,
    pub summary: String,
    pub error: Option<String>,
    pub execution_time_ms: u64,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(component: Component, action: impl Into<String>) -> Self {
        Self {
            activity_id: Uuid::now_v7(),
            component,
            action: action.into(),
            subject: None,
            success: true,
            summary: String::new(),
            error: None,
            execution_time_ms: 0,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_timing(mut self, execution_time_ms: u64) -> Self {
        self.execution_time_ms = execution_time_ms;
        self
    }

    /// Marks the activity as failed
    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.success = false;
        self.error = Some(error.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EscalationPriority {
    High,
    Medium,
    Low,
}

/// A customer query handed to a human agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationRecord {
    pub escalation_id: String,
    pub query: String,
    pub policy_number: Option<String>,
    pub priority: EscalationPriority,
    pub sentiment: String,
    pub sentiment_score: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Any record accepted by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum Record {
    Policy(PolicyRecord),
    Claim(ClaimRecord),
    Activity(ActivityRecord),
    Escalation(EscalationRecord),
}

impl Record {
    pub fn table(&self) -> Table {
        match self {
            Record::Policy(_) => Table::Policies,
            Record::Claim(_) => Table::Claims,
            Record::Activity(_) => Table::ActivityLog,
            Record::Escalation(_) => Table::Escalations,
        }
    }

    /// Lookup key within the record's table
    pub fn key(&self) -> String {
        match self {
            Record::Policy(policy) => policy.policy_number.clone(),
            Record::Claim(claim) => claim.claim_number.clone(),
            Record::Activity(activity) => activity.activity_id.to_string(),
            Record::Escalation(escalation) => escalation.escalation_id.clone(),
        }
    }
}

/// A record as returned by the store, with its assigned identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub stored_at: DateTime<Utc>,
    pub record: Record,
}

impl StoredRecord {
    pub fn new(record: Record) -> Self {
        Self {
            id: RecordId::new_v7(),
            stored_at: Utc::now(),
            record,
        }
    }
}
