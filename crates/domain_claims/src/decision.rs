//! Claim decisions
//!
//! A claim moves through a small state machine:
//!
//! ```text
//! Submitted -> Scored -> Approved     (fraud_score <= 0.5)
//!                     -> UnderReview  (0.5 < fraud_score <= 0.7)
//!                     -> Rejected     (fraud_score > 0.7)
//! ```

use core_kernel::{CoreError, DecisionStatus};
use pattern_library::claims::{BASE_CLAIM_AMOUNT, DEFAULT_ITEM_VALUE, ITEM_VALUES};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::fraud::{FraudAssessment, PolicySnapshot};

/// Scores at or below this are approved
pub fn approval_ceiling() -> Decimal {
    dec!(0.5)
}

/// Scores at or below this (and above the approval ceiling) go to review
pub fn review_ceiling() -> Decimal {
    dec!(0.7)
}

/// Lifecycle state of a claim within one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    Submitted,
    Scored,
    Approved,
    UnderReview,
    Rejected,
}

impl ClaimState {
    pub fn can_transition_to(&self, target: ClaimState) -> bool {
        use ClaimState::*;
        matches!(
            (self, target),
            (Submitted, Scored) | (Scored, Approved) | (Scored, UnderReview) | (Scored, Rejected)
        )
    }

    pub fn transition(self, target: ClaimState) -> Result<ClaimState, CoreError> {
        if !self.can_transition_to(target) {
            return Err(CoreError::invalid_state(format!(
                "claim cannot move from {:?} to {:?}",
                self, target
            )));
        }
        Ok(target)
    }

    pub fn is_final(&self) -> bool {
        self.decision_status().is_some()
    }

    /// Status recorded for a final state
    pub fn decision_status(&self) -> Option<DecisionStatus> {
        match self {
            ClaimState::Approved => Some(DecisionStatus::Approved),
            ClaimState::UnderReview => Some(DecisionStatus::UnderReview),
            ClaimState::Rejected => Some(DecisionStatus::Rejected),
            ClaimState::Submitted | ClaimState::Scored => None,
        }
    }
}

/// Final state for a normalized fraud score
pub fn state_for_score(fraud_score: Decimal) -> ClaimState {
    if fraud_score <= approval_ceiling() {
        ClaimState::Approved
    } else if fraud_score <= review_ceiling() {
        ClaimState::UnderReview
    } else {
        ClaimState::Rejected
    }
}

/// Estimated value of a claimed item; the first matching keyword row wins
pub fn item_value_estimate(item: &str) -> Decimal {
    let item = item.to_lowercase();
    let value = ITEM_VALUES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| item.contains(keyword)))
        .map(|(_, value)| *value)
        .unwrap_or(DEFAULT_ITEM_VALUE);
    Decimal::from(value)
}

/// Payout for the claimed items, capped by coverage and net of deductible
///
/// ```text
/// max(0, min(Σ item_value + 1000, coverage) - deductible)
/// ```
pub fn calculate_claim_amount(items: &[String], policy: &PolicySnapshot) -> Decimal {
    let items_value: Decimal = items.iter().map(|item| item_value_estimate(item)).sum();
    let capped = (items_value + Decimal::from(BASE_CLAIM_AMOUNT)).min(policy.coverage_amount);
    (capped - policy.deductible).max(Decimal::ZERO)
}

/// Guidance for the claimant by status
pub fn next_steps(status: DecisionStatus) -> Vec<String> {
    let steps: &[&str] = match status {
        DecisionStatus::Approved => &[
            "Claim has been approved",
            "Payment will be processed within 5-7 business days",
            "You will receive an email confirmation once payment is sent",
            "Contact customer support if you have any questions",
        ],
        DecisionStatus::UnderReview => &[
            "Claim requires additional review",
            "A claims adjuster will contact you within 48 hours",
            "Please have any supporting documentation ready",
            "You may be asked to provide additional information",
        ],
        DecisionStatus::Rejected => &[
            "Claim has been rejected",
            "Please review the rejection reasons provided",
            "You may appeal this decision within 30 days",
            "Contact customer support for assistance with the appeal process",
        ],
    };
    steps.iter().map(|step| step.to_string()).collect()
}

/// Outcome of deciding one claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDecision {
    pub status: DecisionStatus,
    pub claim_amount: Decimal,
    pub fraud_assessment: FraudAssessment,
    pub next_steps: Vec<String>,
}

/// Runs a scored claim through the state machine
pub fn decide_claim(
    fraud_assessment: FraudAssessment,
    items: &[String],
    policy: &PolicySnapshot,
) -> Result<ClaimDecision, CoreError> {
    let state = ClaimState::Submitted
        .transition(ClaimState::Scored)?
        .transition(state_for_score(fraud_assessment.fraud_score))?;
    let status = state
        .decision_status()
        .ok_or_else(|| CoreError::invalid_state(format!("{:?} is not a final state", state)))?;

    Ok(ClaimDecision {
        status,
        claim_amount: calculate_claim_amount(items, policy),
        next_steps: next_steps(status),
        fraud_assessment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::RiskCategory;
    use crate::fraud::RecommendedAction;

    fn assessment(score: Decimal) -> FraudAssessment {
        FraudAssessment {
            fraud_score: score,
            risk_category: RiskCategory::Low,
            indicators_found: Vec::new(),
            recommended_action: RecommendedAction::ProcessNormally,
        }
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_valid_transitions() {
        assert!(ClaimState::Submitted.can_transition_to(ClaimState::Scored));
        assert!(ClaimState::Scored.can_transition_to(ClaimState::Rejected));
        assert!(!ClaimState::Submitted.can_transition_to(ClaimState::Approved));
        assert!(!ClaimState::Approved.can_transition_to(ClaimState::Rejected));
    }

    #[test]
    fn test_invalid_transition_is_error() {
        let result = ClaimState::Approved.transition(ClaimState::Scored);
        assert!(matches!(result, Err(CoreError::InvalidStateTransition(_))));
    }

    #[test]
    fn test_score_boundaries() {
        assert_eq!(state_for_score(dec!(0.5)), ClaimState::Approved);
        assert_eq!(state_for_score(dec!(0.56)), ClaimState::UnderReview);
        assert_eq!(state_for_score(dec!(0.7)), ClaimState::UnderReview);
        assert_eq!(state_for_score(dec!(0.72)), ClaimState::Rejected);
    }

    #[test]
    fn test_item_values() {
        assert_eq!(item_value_estimate("Samsung TV"), dec!(500));
        assert_eq!(item_value_estimate("gaming laptop"), dec!(1000));
        assert_eq!(item_value_estimate("Gold JEWELRY box"), dec!(2000));
        assert_eq!(item_value_estimate("garden gnome"), dec!(500));
    }

    #[test]
    fn test_claim_amount() {
        let policy = PolicySnapshot {
            start_date: None,
            coverage_amount: dec!(50000),
            deductible: dec!(500),
        };
        // 1000 + 2000 + 1000 base - 500 deductible
        let amount = calculate_claim_amount(&items(&["laptop", "jewelry"]), &policy);
        assert_eq!(amount, dec!(3500));
    }

    #[test]
    fn test_claim_amount_capped_by_coverage() {
        let policy = PolicySnapshot {
            start_date: None,
            coverage_amount: dec!(2000),
            deductible: dec!(500),
        };
        let amount = calculate_claim_amount(&items(&["jewelry", "jewelry"]), &policy);
        assert_eq!(amount, dec!(1500));
    }

    #[test]
    fn test_claim_amount_never_negative() {
        let policy = PolicySnapshot {
            start_date: None,
            coverage_amount: dec!(50000),
            deductible: dec!(5000),
        };
        assert_eq!(calculate_claim_amount(&[], &policy), Decimal::ZERO);
    }

    #[test]
    fn test_decide_claim() {
        let policy = PolicySnapshot::fallback();
        let decision = decide_claim(assessment(dec!(0.56)), &items(&["tv"]), &policy).unwrap();

        assert_eq!(decision.status, DecisionStatus::UnderReview);
        assert_eq!(decision.claim_amount, dec!(1000));
        assert_eq!(decision.next_steps[0], "Claim requires additional review");
        assert_eq!(decision.next_steps.len(), 4);
    }
}
