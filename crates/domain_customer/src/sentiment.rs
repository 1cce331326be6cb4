//! Sentiment Classifier
//!
//! Lexicon-based polarity scoring. Text is lower-cased and split into word
//! tokens; each token is looked up in the positive, negative and neutral word
//! lists:
//!
//! ```text
//! score = (positive - negative) / (positive + negative + neutral)   (0 when no lexicon words)
//! ```
//!
//! An intensity modifier right before a positive word raises the score by
//! `(multiplier - 1) / lexicon_words`; before a negative word it lowers it by
//! the same amount. The final score is clamped to `[-1, 1]`.

use pattern_library::sentiment::{
    is_negative, is_neutral, is_positive, EMPTY_LEXICON_STEP, INTENSITY_MODIFIERS,
    KEY_PHRASE_MAX_TOKENS, KEY_PHRASE_MIN_TOKENS, MAX_KEY_PHRASES, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD, TOP_EMOTIONS,
};
use pattern_library::Emotion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of sentiment analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// In `[-1, 1]`
    pub sentiment_score: f64,
    pub positive_count: u32,
    pub negative_count: u32,
    pub neutral_count: u32,
    /// The two most frequent emotions with their counts
    pub emotions: BTreeMap<Emotion, u32>,
    /// Up to three sentences carrying sentiment, in text order
    pub key_phrases: Vec<String>,
}

impl SentimentResult {
    /// Result for text with no sentiment signal
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            emotions: BTreeMap::new(),
            key_phrases: Vec::new(),
        }
    }
}

/// Lower-cased word tokens
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn count_where(tokens: &[String], predicate: fn(&str) -> bool) -> u32 {
    let count = tokens.iter().filter(|token| predicate(token)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Sum of modifier adjustments, each `±(multiplier - 1) * step`
fn intensity_adjustment(tokens: &[String], step: f64) -> f64 {
    let mut adjustment = 0.0;
    for (modifier, multiplier) in INTENSITY_MODIFIERS {
        let width = modifier.len();
        for start in 0..tokens.len() {
            let Some(window) = tokens.get(start..start + width) else {
                break;
            };
            if !window.iter().zip(modifier.iter()).all(|(token, word)| token == word) {
                continue;
            }
            let Some(next) = tokens.get(start + width) else {
                continue;
            };
            if is_positive(next) {
                adjustment += (multiplier - 1.0) * step;
            } else if is_negative(next) {
                adjustment -= (multiplier - 1.0) * step;
            }
        }
    }
    adjustment
}

fn top_emotions(tokens: &[String]) -> BTreeMap<Emotion, u32> {
    let mut counts: Vec<(Emotion, u32)> = Emotion::ALL
        .into_iter()
        .map(|emotion| {
            let keywords = emotion.keywords();
            let count = tokens
                .iter()
                .filter(|token| keywords.contains(&token.as_str()))
                .count();
            (emotion, u32::try_from(count).unwrap_or(u32::MAX))
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    // stable: equal counts keep declaration order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(TOP_EMOTIONS).collect()
}

fn key_phrases(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| {
            let tokens = tokenize(sentence);
            let carries_sentiment = tokens
                .iter()
                .any(|token| is_positive(token) || is_negative(token));
            carries_sentiment
                && (KEY_PHRASE_MIN_TOKENS..=KEY_PHRASE_MAX_TOKENS).contains(&tokens.len())
        })
        .take(MAX_KEY_PHRASES)
        .map(str::to_string)
        .collect()
}

/// Scores a text for polarity, emotions and key phrases
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let tokens = tokenize(text);
    let positive_count = count_where(&tokens, is_positive);
    let negative_count = count_where(&tokens, is_negative);
    let neutral_count = count_where(&tokens, is_neutral);

    let lexicon_words = positive_count + negative_count + neutral_count;
    let (base, step) = if lexicon_words == 0 {
        (0.0, EMPTY_LEXICON_STEP)
    } else {
        let total = f64::from(lexicon_words);
        (
            (f64::from(positive_count) - f64::from(negative_count)) / total,
            1.0 / total,
        )
    };
    let sentiment_score = (base + intensity_adjustment(&tokens, step)).clamp(-1.0, 1.0);
    let sentiment = Sentiment::from_score(sentiment_score);

    debug!(
        sentiment = %sentiment,
        score = sentiment_score,
        lexicon_words,
        "Sentiment analyzed"
    );

    SentimentResult {
        sentiment,
        sentiment_score,
        positive_count,
        negative_count,
        neutral_count,
        emotions: top_emotions(&tokens),
        key_phrases: key_phrases(text),
    }
}
