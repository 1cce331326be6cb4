//! Documents Domain - Text Feature Extractor
//!
//! Turns raw text into structured features:
//! - Document type classification by field-pattern counting
//! - Entity extraction (policy/claim numbers, dates, amounts, contact details)
//! - Free `label: value` extraction and a templated summary
//! - Claimed-item and summary helpers for vision narratives

pub mod analysis;
pub mod narrative;

pub use analysis::{classify_and_extract, DocumentAnalysis, KeyValuePair};
pub use narrative::{extract_claimed_items, split_sentences, summarize_narrative};
pub use pattern_library::DocumentType;
