//! Risk Scoring Engine
//!
//! Combines an item inventory and a set of location factors into a single
//! multiplicative risk score:
//!
//! ```text
//! item_risk     = Σ weight(category) × count / total_count   (0 when empty)
//! location_risk = Π weight(factor)                            (1 when none)
//! overall_risk  = base_risk × item_risk × location_risk
//! ```
//!
//! The overall risk scales the recommended coverage, and the premium is a
//! fixed share of that coverage.

use core_kernel::RiskCategory;
use pattern_library::risk::{
    base_coverage, base_risk, coverage_per_item, high_risk_floor, low_risk_ceiling,
    premium_rate, unknown_category_weight,
};
use pattern_library::ItemCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inventory::ItemInventory;
use crate::location::LocationFactors;

const MONEY_DP: u32 = 2;
const SCORE_DP: u32 = 4;

/// Risk score with coverage and premium recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: Decimal,
    pub risk_category: RiskCategory,
    pub recommended_coverage: Decimal,
    pub annual_premium: Decimal,
    pub monthly_premium: Decimal,
    pub item_risk_contribution: Decimal,
    pub location_risk_contribution: Decimal,
}

/// Maps an overall risk onto a category; both boundaries belong to Medium
pub fn categorize_risk(overall_risk: Decimal) -> RiskCategory {
    if overall_risk < low_risk_ceiling() {
        RiskCategory::Low
    } else if overall_risk > high_risk_floor() {
        RiskCategory::High
    } else {
        RiskCategory::Medium
    }
}

fn item_risk(items: &ItemInventory) -> Decimal {
    let total = items.total();
    if total == 0 {
        return Decimal::ZERO;
    }
    let weighted: Decimal = items
        .iter()
        .map(|(name, count)| {
            let weight = ItemCategory::from_name(name)
                .map(|category| category.weight())
                .unwrap_or_else(unknown_category_weight);
            weight * Decimal::from(count)
        })
        .sum();
    weighted / Decimal::from(total)
}

fn location_risk(factors: &LocationFactors) -> Decimal {
    factors
        .recognized()
        .fold(Decimal::ONE, |risk, factor| risk * factor.weight())
}

/// Scores an inventory against a location
///
/// An empty inventory scores zero item risk, so the overall risk is zero and
/// the category Low regardless of location.
pub fn assess_risk(items: &ItemInventory, location_factors: &LocationFactors) -> RiskAssessment {
    let item_risk = item_risk(items);
    let location_risk = location_risk(location_factors);
    let overall_risk = base_risk() * item_risk * location_risk;
    let risk_category = categorize_risk(overall_risk);

    let recommended_coverage =
        (base_coverage() + Decimal::from(items.total()) * coverage_per_item()) * overall_risk;
    let annual_premium = recommended_coverage * premium_rate();
    let monthly_premium = annual_premium / Decimal::from(12);

    debug!(
        overall_risk = %overall_risk,
        category = %risk_category,
        items = items.total(),
        factors = location_factors.len(),
        "Risk assessed"
    );

    RiskAssessment {
        risk_score: overall_risk.round_dp(SCORE_DP),
        risk_category,
        recommended_coverage: recommended_coverage.round_dp(MONEY_DP),
        annual_premium: annual_premium.round_dp(MONEY_DP),
        monthly_premium: monthly_premium.round_dp(MONEY_DP),
        item_risk_contribution: item_risk.round_dp(SCORE_DP),
        location_risk_contribution: location_risk.round_dp(SCORE_DP),
    }
}
