//! Intent Classifier

use pattern_library::IntentCategory;
use tracing::debug;

/// Buckets a customer query by keyword hits
///
/// Each keyword found anywhere in the lower-cased text scores one point for
/// its category. The highest score wins, ties go to the category declared
/// first, and a query with no hits is a general inquiry.
pub fn categorize_intent(text: &str) -> IntentCategory {
    let text = text.to_lowercase();
    let mut best = IntentCategory::GeneralInquiry;
    let mut best_score = 0;

    for category in IntentCategory::SCORED {
        let score = category
            .keywords()
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    debug!(intent = %best, score = best_score, "Intent categorized");
    best
}
