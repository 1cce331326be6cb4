//! Claimed item values and narrative markers

/// Estimated replacement value by item keyword; first matching row wins
pub const ITEM_VALUES: &[(&[&str], i64)] = &[
    (&["tv", "television"], 500),
    (&["computer", "laptop"], 1000),
    (&["phone", "smartphone"], 800),
    (&["jewelry"], 2000),
    (&["furniture"], 1500),
    (&["appliance"], 1200),
];

/// Value of an item no keyword recognises
pub const DEFAULT_ITEM_VALUE: i64 = 500;

/// Flat amount added to every claim before limits
pub const BASE_CLAIM_AMOUNT: i64 = 1000;

/// Coverage assumed when the policy store cannot be reached
pub const FALLBACK_COVERAGE: i64 = 50000;

/// Deductible assumed when the policy store cannot be reached
pub const FALLBACK_DEDUCTIBLE: i64 = 500;

/// Deductible written on newly issued policies
pub const DEFAULT_POLICY_DEDUCTIBLE: i64 = 500;

/// Narrative lines containing these name a claimed item
pub const ITEM_LINE_MARKERS: &[&str] = &["item", "object", "damaged", "broken", "stolen"];

/// Fallback: narrative sentences containing these describe something seen
pub const ITEM_SENTENCE_MARKERS: &[&str] = &["see", "visible", "appears", "showing", "contains"];

/// Upper bound on items taken from one narrative
pub const MAX_NARRATIVE_ITEMS: usize = 10;

/// Sentences containing these make it into a narrative summary
pub const SUMMARY_KEYWORDS: &[&str] = &["damage", "item", "object", "identify", "detect", "risk"];

pub const MAX_SUMMARY_SENTENCES: usize = 5;

/// Sentences used when no summary keyword matches
pub const FALLBACK_SUMMARY_SENTENCES: usize = 3;
