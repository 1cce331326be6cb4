//! Fraud Scoring Engine
//!
//! Seven independent boolean rules are evaluated in a fixed order. Each rule
//! that fires adds its weight to a raw score and its label to the indicator
//! list. The raw score is normalized into `[0, 1]`:
//!
//! ```text
//! fraud_score = min(raw_score / 5.0, 1.0)
//! ```
//!
//! High above 0.7, Medium above 0.3, Low otherwise.

use chrono::NaiveDate;
use core_kernel::{days_between, is_weekend, PolicyRecord, RiskCategory};
use pattern_library::claims::{FALLBACK_COVERAGE, FALLBACK_DEDUCTIBLE};
use pattern_library::fraud::{
    high_fraud_floor, is_negation, medium_fraud_floor, score_divisor, EXCESSIVE_ITEM_COUNT,
    FLOOD_PREFIXES, MULTIPLE_CLAIMS_COUNT, RECENT_POLICY_DAYS, THEFT_PREFIXES,
    VAGUE_DESCRIPTION_WORDS, WEATHER_PREFIXES,
};
use pattern_library::FraudIndicator;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Claim facts the rules look at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimContext {
    pub description: String,
    /// `None` when the caller's date could not be parsed
    pub report_date: Option<NaiveDate>,
    pub items: Vec<String>,
    pub image_summary: String,
    pub has_police_report: bool,
}

/// Read-only view of the policy a claim is made against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    /// `None` when unknown; date rules then do not fire
    pub start_date: Option<NaiveDate>,
    pub coverage_amount: Decimal,
    pub deductible: Decimal,
}

impl PolicySnapshot {
    /// Snapshot used when the policy store cannot be reached
    pub fn fallback() -> Self {
        Self {
            start_date: None,
            coverage_amount: Decimal::from(FALLBACK_COVERAGE),
            deductible: Decimal::from(FALLBACK_DEDUCTIBLE),
        }
    }
}

impl From<&PolicyRecord> for PolicySnapshot {
    fn from(policy: &PolicyRecord) -> Self {
        Self {
            start_date: Some(policy.start_date),
            coverage_amount: policy.coverage_amount,
            deductible: policy.deductible,
        }
    }
}

/// A previous claim by the same customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorClaim {
    pub amount: Decimal,
    pub status: String,
}

/// Read-only view of a customer's claim history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerClaimHistory {
    pub recent_claims_count: u32,
    #[serde(default)]
    pub prior_claims: Vec<PriorClaim>,
}

/// What to do with a claim given its fraud risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendedAction {
    #[serde(rename = "Process claim normally")]
    ProcessNormally,
    #[serde(rename = "Request additional documentation")]
    RequestDocumentation,
    #[serde(rename = "Escalate for investigation")]
    EscalateForInvestigation,
}

impl RecommendedAction {
    pub fn for_category(category: RiskCategory) -> Self {
        match category {
            RiskCategory::Low => RecommendedAction::ProcessNormally,
            RiskCategory::Medium => RecommendedAction::RequestDocumentation,
            RiskCategory::High => RecommendedAction::EscalateForInvestigation,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::ProcessNormally => "Process claim normally",
            RecommendedAction::RequestDocumentation => "Request additional documentation",
            RecommendedAction::EscalateForInvestigation => "Escalate for investigation",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of fraud scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Normalized score in `[0, 1]`
    pub fraud_score: Decimal,
    pub risk_category: RiskCategory,
    /// Labels of the rules that fired, in evaluation order
    pub indicators_found: Vec<String>,
    pub recommended_action: RecommendedAction,
}

impl FraudAssessment {
    /// Rules that fired, as typed indicators
    pub fn indicators(&self) -> impl Iterator<Item = FraudIndicator> + '_ {
        self.indicators_found
            .iter()
            .filter_map(|label| FraudIndicator::from_label(label))
    }
}

const SENTENCE_BREAKS: [char; 5] = ['.', '!', '?', ';', '\n'];

/// Lower-cased words with surrounding quotes trimmed, keeping inner apostrophes
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|word| word.replace('\u{2019}', "'").trim_matches('\'').to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn starts_with_any(word: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| word.starts_with(prefix))
}

fn has_word(words: &[String], prefixes: &[&str]) -> bool {
    words.iter().any(|word| starts_with_any(word, prefixes))
}

fn has_pair(words: &[String], first: &str, second_prefix: &str) -> bool {
    words
        .windows(2)
        .any(|pair| pair[0] == first && pair[1].starts_with(second_prefix))
}

type Rule = fn(&ClaimContext, &PolicySnapshot, &CustomerClaimHistory) -> bool;

const RULES: [(FraudIndicator, Rule); 7] = [
    (FraudIndicator::RecentPolicy, recent_policy),
    (FraudIndicator::WeekendClaim, weekend_claim),
    (FraudIndicator::VagueDescription, vague_description),
    (FraudIndicator::ExcessiveItems, excessive_items),
    (FraudIndicator::MultipleClaims, multiple_claims),
    (FraudIndicator::WaterDamageNoWeather, water_damage_without_weather),
    (FraudIndicator::TheftNoPoliceReport, theft_without_police_report),
];

/// A report dated before the policy start also counts as recent
fn recent_policy(claim: &ClaimContext, policy: &PolicySnapshot, _: &CustomerClaimHistory) -> bool {
    match (policy.start_date, claim.report_date) {
        (Some(start), Some(reported)) => days_between(start, reported) < RECENT_POLICY_DAYS,
        _ => false,
    }
}

fn weekend_claim(claim: &ClaimContext, _: &PolicySnapshot, _: &CustomerClaimHistory) -> bool {
    claim.report_date.is_some_and(is_weekend)
}

fn vague_description(claim: &ClaimContext, _: &PolicySnapshot, _: &CustomerClaimHistory) -> bool {
    claim.description.split_whitespace().count() < VAGUE_DESCRIPTION_WORDS
}

fn excessive_items(claim: &ClaimContext, _: &PolicySnapshot, _: &CustomerClaimHistory) -> bool {
    claim.items.len() > EXCESSIVE_ITEM_COUNT
}

fn multiple_claims(_: &ClaimContext, _: &PolicySnapshot, history: &CustomerClaimHistory) -> bool {
    history.recent_claims_count >= MULTIPLE_CLAIMS_COUNT
}

fn water_damage_without_weather(
    claim: &ClaimContext,
    _: &PolicySnapshot,
    _: &CustomerClaimHistory,
) -> bool {
    let words = words(&claim.description);
    (has_word(&words, FLOOD_PREFIXES) || has_pair(&words, "water", "damage"))
        && !has_word(&words, WEATHER_PREFIXES)
}

fn theft_without_police_report(
    claim: &ClaimContext,
    _: &PolicySnapshot,
    _: &CustomerClaimHistory,
) -> bool {
    !claim.has_police_report && has_word(&words(&claim.description), THEFT_PREFIXES)
}

/// Whether a description says a police report exists
///
/// A sentence naming a police report counts only when no word in it is a
/// negation, so "the police report was not filed" and "I haven't filed a
/// police report" both read as no report.
pub fn mentions_police_report(description: &str) -> bool {
    description.split(SENTENCE_BREAKS).any(|sentence| {
        let words = words(sentence);
        has_pair(&words, "police", "report") && !words.iter().any(|word| is_negation(word))
    })
}

fn categorize_fraud(score: Decimal) -> RiskCategory {
    if score > high_fraud_floor() {
        RiskCategory::High
    } else if score > medium_fraud_floor() {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

/// Scores a claim for fraud risk
pub fn detect_fraud(
    claim: &ClaimContext,
    policy: &PolicySnapshot,
    history: &CustomerClaimHistory,
) -> FraudAssessment {
    let mut raw_score = Decimal::ZERO;
    let mut indicators_found = Vec::new();

    for (indicator, rule) in RULES {
        if rule(claim, policy, history) {
            raw_score += indicator.weight();
            indicators_found.push(indicator.label().to_string());
        }
    }

    let fraud_score = (raw_score / score_divisor()).min(Decimal::ONE);
    let risk_category = categorize_fraud(fraud_score);

    debug!(
        raw_score = %raw_score,
        fraud_score = %fraud_score,
        category = %risk_category,
        indicators = indicators_found.len(),
        "Fraud scored"
    );

    FraudAssessment {
        fraud_score,
        risk_category,
        indicators_found,
        recommended_action: RecommendedAction::for_category(risk_category),
    }
}
