//! Property-Based Test Generators
//!
//! Proptest strategies for engine inputs. Strategies produce plain data so
//! each domain crate can build its own types from them.

use chrono::NaiveDate;
use pattern_library::{ItemCategory, LocationFactor};
use proptest::prelude::*;

/// Strategy for a known item category name
pub fn item_category_strategy() -> impl Strategy<Value = ItemCategory> {
    proptest::sample::select(ItemCategory::ALL.to_vec())
}

/// Strategy for raw (name, count) pairs, including negative and zero counts
/// and names outside the category table
pub fn raw_item_counts_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    let name = prop_oneof![
        3 => item_category_strategy().prop_map(|c| c.as_str().to_string()),
        1 => "[a-z]{3,10}",
    ];
    prop::collection::vec((name, -5i64..50), 0..10)
}

/// Strategy for counts that are all zero or negative
pub fn zero_item_counts_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(
        (
            item_category_strategy().prop_map(|c| c.as_str().to_string()),
            -10i64..=0,
        ),
        0..8,
    )
}

/// Strategy for a set of location tags, recognized or not
pub fn location_tags_strategy() -> impl Strategy<Value = Vec<String>> {
    let tag = prop_oneof![
        4 => proptest::sample::select(LocationFactor::ALL.to_vec())
            .prop_map(|f| f.as_str().to_string()),
        1 => "[a-z_]{3,12}",
    ];
    prop::collection::vec(tag, 0..6)
}

/// Strategy for free text mixing words from the scoring tables with noise
pub fn free_text_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("great".to_string()),
        Just("terrible".to_string()),
        Just("very".to_string()),
        Just("not".to_string()),
        Just("water damage".to_string()),
        Just("storm".to_string()),
        Just("stolen".to_string()),
        Just("police report".to_string()),
        Just("claim".to_string()),
        Just("bill".to_string()),
        Just(".".to_string()),
        "[A-Za-z]{1,12}",
        "[ -~]{0,8}",
    ];
    prop::collection::vec(word, 0..40).prop_map(|words| words.join(" "))
}

/// Strategy for dates across a few years, weekends included
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..2_000).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();
        base.checked_add_days(chrono::Days::new(offset))
            .unwrap_or(base)
    })
}

/// Strategy for a claimed-items list, short or excessive
pub fn claimed_items_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("tv".to_string()),
            Just("laptop".to_string()),
            Just("jewelry".to_string()),
            "[a-z ]{3,20}",
        ],
        0..25,
    )
}

/// Strategy for a prior claim count
pub fn recent_claims_strategy() -> impl Strategy<Value = u32> {
    0u32..10
}
