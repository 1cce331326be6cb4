//! Sentiment lexicon, emotion keywords and intensity modifiers

use serde::{Deserialize, Serialize};

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "helpful", "satisfied",
    "happy", "pleased", "love", "like", "best", "thank", "thanks", "appreciate", "outstanding",
    "perfect", "awesome", "easy", "clear", "fast", "quick", "responsive", "friendly", "efficient",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "terrible", "awful", "horrible", "disappointing", "frustrated", "unhappy",
    "dissatisfied", "angry", "upset", "hate", "dislike", "worst", "slow", "difficult",
    "confusing", "complicated", "expensive", "overpriced", "rude", "unprofessional",
    "inefficient", "problem", "issue", "complaint", "error", "mistake", "delay", "fail",
];

pub const NEUTRAL_WORDS: &[&str] = &[
    "okay", "ok", "fine", "average", "neutral", "fair", "decent", "acceptable", "moderate",
    "standard", "normal", "regular", "usual",
];

/// Emotions reported by the sentiment analyzer; declaration order breaks ties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anger,
    Frustration,
    Satisfaction,
    Confusion,
    Urgency,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Frustration,
        Emotion::Satisfaction,
        Emotion::Confusion,
        Emotion::Urgency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Frustration => "frustration",
            Emotion::Satisfaction => "satisfaction",
            Emotion::Confusion => "confusion",
            Emotion::Urgency => "urgency",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Anger => &["angry", "furious", "outraged", "mad", "irritated", "annoyed"],
            Emotion::Frustration => &["frustrated", "stuck", "difficult", "confusing", "complicated"],
            Emotion::Satisfaction => &["satisfied", "pleased", "content", "happy", "glad"],
            Emotion::Confusion => &["confused", "unclear", "unsure", "uncertain", "puzzled"],
            Emotion::Urgency => &["urgent", "immediately", "asap", "emergency", "quickly", "soon"],
        }
    }
}

/// Adverbs that scale the lexicon word right after them
///
/// Each modifier is a token sequence so that multi-word modifiers match on
/// token boundaries.
pub const INTENSITY_MODIFIERS: &[(&[&str], f64)] = &[
    (&["very"], 1.5),
    (&["extremely"], 2.0),
    (&["really"], 1.5),
    (&["somewhat"], 0.5),
    (&["slightly"], 0.3),
    (&["a", "bit"], 0.3),
    (&["absolutely"], 2.0),
    (&["completely"], 1.8),
    (&["totally"], 1.8),
];

/// Scores above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.3;

/// Scores below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

/// Per-modifier step used when no lexicon words were counted
pub const EMPTY_LEXICON_STEP: f64 = 0.1;

/// Number of emotions reported
pub const TOP_EMOTIONS: usize = 2;

/// Key phrase limits
pub const MAX_KEY_PHRASES: usize = 3;
pub const KEY_PHRASE_MIN_TOKENS: usize = 3;
pub const KEY_PHRASE_MAX_TOKENS: usize = 15;

pub fn is_positive(token: &str) -> bool {
    POSITIVE_WORDS.contains(&token)
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE_WORDS.contains(&token)
}

pub fn is_neutral(token: &str) -> bool {
    NEUTRAL_WORDS.contains(&token)
}
