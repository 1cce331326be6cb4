//! Underwriting Domain - property and location risk
//!
//! This crate provides:
//! - Item inventory extraction from vision narratives
//! - Location risk-factor classification
//! - The Risk Scoring Engine (`assess_risk`)
//! - The underwriting service: risk analysis and policy issuance
//! - Coverage summaries for issued policies

pub mod coverage;
pub mod error;
pub mod inventory;
pub mod location;
pub mod risk;
pub mod service;

pub use coverage::{summarize_coverage, CoverageSummary};
pub use error::UnderwritingError;
pub use inventory::{extract_item_inventory, ItemInventory};
pub use location::{classify_location, LocationFactors};
pub use risk::{assess_risk, RiskAssessment};
pub use service::{
    PolicyApplication, PolicyIssuanceOutcome, RiskAnalysisOutcome, RiskAnalysisRequest,
    UnderwritingAnalyzer,
};
