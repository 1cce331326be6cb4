//! Fraud indicator weights, labels and trigger words

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Boolean fraud rules in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudIndicator {
    RecentPolicy,
    WeekendClaim,
    VagueDescription,
    ExcessiveItems,
    MultipleClaims,
    WaterDamageNoWeather,
    TheftNoPoliceReport,
}

impl FraudIndicator {
    pub const ALL: [FraudIndicator; 7] = [
        FraudIndicator::RecentPolicy,
        FraudIndicator::WeekendClaim,
        FraudIndicator::VagueDescription,
        FraudIndicator::ExcessiveItems,
        FraudIndicator::MultipleClaims,
        FraudIndicator::WaterDamageNoWeather,
        FraudIndicator::TheftNoPoliceReport,
    ];

    /// Raw score added when the rule fires
    pub fn weight(&self) -> Decimal {
        match self {
            FraudIndicator::RecentPolicy => dec!(0.7),
            FraudIndicator::WeekendClaim => dec!(0.3),
            FraudIndicator::VagueDescription => dec!(0.6),
            FraudIndicator::ExcessiveItems => dec!(0.5),
            FraudIndicator::MultipleClaims => dec!(0.7),
            FraudIndicator::WaterDamageNoWeather => dec!(0.7),
            FraudIndicator::TheftNoPoliceReport => dec!(0.8),
        }
    }

    /// Human-readable label reported in `indicators_found`
    pub fn label(&self) -> &'static str {
        match self {
            FraudIndicator::RecentPolicy => "Recent policy creation",
            FraudIndicator::WeekendClaim => "Claim filed on weekend",
            FraudIndicator::VagueDescription => "Vague claim description",
            FraudIndicator::ExcessiveItems => "Excessive number of items claimed",
            FraudIndicator::MultipleClaims => "Multiple recent claims",
            FraudIndicator::WaterDamageNoWeather => "Water damage claim without weather event",
            FraudIndicator::TheftNoPoliceReport => "Theft claim without police report",
        }
    }

    pub fn from_label(label: &str) -> Option<FraudIndicator> {
        FraudIndicator::ALL
            .into_iter()
            .find(|indicator| indicator.label() == label)
    }
}

/// A policy younger than this many days at report time is "recent"
pub const RECENT_POLICY_DAYS: i64 = 30;

/// Descriptions with fewer words are vague
pub const VAGUE_DESCRIPTION_WORDS: usize = 20;

/// Claims listing more items are excessive
pub const EXCESSIVE_ITEM_COUNT: usize = 15;

/// This many recent claims or more is suspicious
pub const MULTIPLE_CLAIMS_COUNT: u32 = 3;

/// Raw score that maps to a normalized score of 1.0
pub fn score_divisor() -> Decimal {
    dec!(5.0)
}

/// Normalized scores above this are High
pub fn high_fraud_floor() -> Decimal {
    dec!(0.7)
}

/// Normalized scores above this are Medium
pub fn medium_fraud_floor() -> Decimal {
    dec!(0.3)
}

/// Word prefixes naming a flood; "water" followed by "damage" also counts
pub const FLOOD_PREFIXES: &[&str] = &["flood"];

/// Word prefixes naming weather that corroborates water damage
pub const WEATHER_PREFIXES: &[&str] = &["rain", "storm", "thunderstorm"];

/// Word prefixes naming a theft
pub const THEFT_PREFIXES: &[&str] = &["theft", "stolen"];

/// Words that negate a police report mentioned in the same sentence
pub const NEGATION_WORDS: &[&str] = &[
    "no", "not", "never", "without", "none", "nor", "cannot", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "wasnt", "werent", "wont", "cant", "couldnt",
];

/// Whether a lower-cased word is a negation, including any `n't` contraction
pub fn is_negation(word: &str) -> bool {
    word.ends_with("n't") || NEGATION_WORDS.contains(&word)
}
