//! Coverage summaries for issued policies

use chrono::NaiveDate;
use core_kernel::{days_between, PolicyRecord, PolicyStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a policy covers and how long it has left to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub policy_number: String,
    pub policy_type: String,
    pub status: PolicyStatus,
    pub total_coverage: Decimal,
    pub annual_premium: Decimal,
    pub monthly_premium: Decimal,
    pub deductible: Decimal,
    pub end_date: NaiveDate,
    /// Negative once the term has ended
    pub days_remaining: i64,
}

impl CoverageSummary {
    pub fn is_in_force(&self) -> bool {
        self.status == PolicyStatus::Active && self.days_remaining >= 0
    }
}

/// Summarizes a policy's coverage as of `today`
pub fn summarize_coverage(policy: &PolicyRecord, today: NaiveDate) -> CoverageSummary {
    CoverageSummary {
        policy_number: policy.policy_number.clone(),
        policy_type: policy.policy_type.clone(),
        status: policy.status,
        total_coverage: policy.coverage_amount,
        annual_premium: policy.annual_premium,
        monthly_premium: policy.monthly_premium,
        deductible: policy.deductible,
        end_date: policy.end_date,
        days_remaining: days_between(today, policy.end_date),
    }
}
