//! Helpers over vision-model narratives

use pattern_library::claims::{
    FALLBACK_SUMMARY_SENTENCES, ITEM_LINE_MARKERS, ITEM_SENTENCE_MARKERS, MAX_NARRATIVE_ITEMS,
    MAX_SUMMARY_SENTENCES, SUMMARY_KEYWORDS,
};

fn mentions_any(text: &str, markers: &[&str]) -> bool {
    let lower = text.to_lowercase();
    markers.iter().any(|marker| lower.contains(marker))
}

/// Splits on `.`, `!` and `?`, dropping empty sentences
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Lists the items a narrative claims, at most ten
///
/// Lines that mention an item (or something damaged, broken or stolen) are
/// taken verbatim. If there are none, sentences describing something seen
/// are used instead.
pub fn extract_claimed_items(narrative: &str) -> Vec<String> {
    let lines: Vec<String> = narrative
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && mentions_any(line, ITEM_LINE_MARKERS))
        .take(MAX_NARRATIVE_ITEMS)
        .map(str::to_string)
        .collect();
    if !lines.is_empty() {
        return lines;
    }

    split_sentences(narrative)
        .into_iter()
        .filter(|sentence| mentions_any(sentence, ITEM_SENTENCE_MARKERS))
        .take(MAX_NARRATIVE_ITEMS)
        .map(str::to_string)
        .collect()
}

/// Condenses a narrative to its damage-related sentences
///
/// Falls back to the opening sentences when nothing damage-related is found.
/// Empty input gives an empty summary.
pub fn summarize_narrative(narrative: &str) -> String {
    let sentences = split_sentences(narrative);
    if sentences.is_empty() {
        return String::new();
    }

    let mut chosen: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| mentions_any(sentence, SUMMARY_KEYWORDS))
        .take(MAX_SUMMARY_SENTENCES)
        .collect();
    if chosen.is_empty() {
        chosen = sentences
            .into_iter()
            .take(FALLBACK_SUMMARY_SENTENCES)
            .collect();
    }

    format!("{}.", chosen.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lines_taken_verbatim() {
        let narrative = "The photo shows a living room.\n\
            - Damaged 55\" television on the floor\n\
            - Broken glass coffee table\n\
            Lighting is dim.";
        let items = extract_claimed_items(narrative);
        assert_eq!(
            items,
            vec![
                "- Damaged 55\" television on the floor".to_string(),
                "- Broken glass coffee table".to_string(),
            ]
        );
    }

    #[test]
    fn test_falls_back_to_seen_sentences() {
        let narrative = "I can see a laptop on the desk. The room is tidy. A guitar is visible.";
        let items = extract_claimed_items(narrative);
        assert_eq!(items, vec!["I can see a laptop on the desk", "A guitar is visible"]);
    }

    #[test]
    fn test_item_cap() {
        let narrative = (0..14)
            .map(|i| format!("item {i}: chair"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_claimed_items(&narrative).len(), 10);
    }

    #[test]
    fn test_summary_prefers_damage_sentences() {
        let narrative = "A sunny kitchen. Water damage on the ceiling! New paint. Risk of mould?";
        assert_eq!(
            summarize_narrative(narrative),
            "Water damage on the ceiling. Risk of mould."
        );
    }

    #[test]
    fn test_summary_fallback_and_empty() {
        assert_eq!(summarize_narrative("One. Two. Three. Four."), "One. Two. Three.");
        assert_eq!(summarize_narrative("   "), "");
    }
}
