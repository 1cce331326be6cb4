//! Claims Domain
//!
//! This crate scores claims for fraud and decides them.
//!
//! # Claim Flow
//!
//! ```text
//! narrative -> extraction -> policy lookup -> fraud scoring -> decision -> stored claim
//! ```

pub mod decision;
pub mod error;
pub mod fraud;
pub mod processor;

pub use decision::{
    calculate_claim_amount, decide_claim, item_value_estimate, next_steps, ClaimDecision,
    ClaimState,
};
pub use error::ClaimError;
pub use fraud::{
    detect_fraud, mentions_police_report, ClaimContext, CustomerClaimHistory, FraudAssessment,
    PolicySnapshot, PriorClaim, RecommendedAction,
};
pub use processor::{ClaimProcessingOutcome, ClaimSubmission, ClaimsProcessor};
