//! Customer Domain
//!
//! This crate provides:
//! - The Sentiment Classifier (`analyze_sentiment`)
//! - The Intent Classifier (`categorize_intent`)
//! - Templated responses and escalation priorities
//! - The customer assistant service: query handling and escalation

pub mod assistant;
pub mod error;
pub mod intent;
pub mod response;
pub mod sentiment;

pub use assistant::{
    escalation_priority, CustomerAssistant, CustomerQuery, EscalationOutcome, EscalationRequest,
    QueryOutcome,
};
pub use error::CustomerError;
pub use intent::categorize_intent;
pub use pattern_library::{Emotion, IntentCategory};
pub use response::compose_response;
pub use sentiment::{analyze_sentiment, Sentiment, SentimentResult};
