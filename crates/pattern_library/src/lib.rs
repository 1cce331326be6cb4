//! Pattern Library - fixed indicator tables for the inference engines
//!
//! Every weight, keyword list and regular expression used by the scoring and
//! classification engines lives here. Tables are declared in priority order:
//! wherever an engine breaks a tie, the entry declared first wins.
//!
//! Regular expressions are stored as source text; the engines compile them.

pub mod claims;
pub mod documents;
pub mod fraud;
pub mod intent;
pub mod risk;
pub mod sentiment;

pub use documents::{DocumentType, EntityField};
pub use fraud::FraudIndicator;
pub use intent::IntentCategory;
pub use risk::{ItemCategory, LocationFactor};
pub use sentiment::Emotion;
