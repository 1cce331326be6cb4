//! Customer query intent keywords

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query intent buckets; declaration order breaks ties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    PolicyInfo,
    ClaimStatus,
    Billing,
    TechnicalSupport,
    CoverageQuestion,
    Complaint,
    GeneralInquiry,
}

impl IntentCategory {
    /// Categories scored by keyword, in tie-break order
    pub const SCORED: [IntentCategory; 6] = [
        IntentCategory::PolicyInfo,
        IntentCategory::ClaimStatus,
        IntentCategory::Billing,
        IntentCategory::TechnicalSupport,
        IntentCategory::CoverageQuestion,
        IntentCategory::Complaint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::PolicyInfo => "policy_info",
            IntentCategory::ClaimStatus => "claim_status",
            IntentCategory::Billing => "billing",
            IntentCategory::TechnicalSupport => "technical_support",
            IntentCategory::CoverageQuestion => "coverage_question",
            IntentCategory::Complaint => "complaint",
            IntentCategory::GeneralInquiry => "general_inquiry",
        }
    }

    /// Substrings searched for in the lower-cased query
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            IntentCategory::PolicyInfo => {
                &["policy", "coverage", "covered", "insured", "premium", "deductible"]
            }
            IntentCategory::ClaimStatus => &[
                "claim",
                "status",
                "payment",
                "reimbursement",
                "approved",
                "denied",
                "process",
            ],
            IntentCategory::Billing => &[
                "bill", "payment", "pay", "invoice", "charge", "fee", "cost", "price", "expensive",
            ],
            IntentCategory::TechnicalSupport => &[
                "website", "app", "login", "password", "reset", "account", "access", "error",
            ],
            IntentCategory::CoverageQuestion => &[
                "cover", "covered", "include", "protect", "damage", "loss", "theft", "accident",
            ],
            IntentCategory::Complaint => &[
                "unhappy",
                "dissatisfied",
                "disappointed",
                "problem",
                "issue",
                "wrong",
                "mistake",
                "error",
                "complaint",
            ],
            IntentCategory::GeneralInquiry => &[],
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
