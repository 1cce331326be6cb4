//! Item inventories and their extraction from narrative text

use pattern_library::ItemCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item counts by category name
///
/// Categories with a zero count are never present. Names outside the fixed
/// category table are allowed and scored with a neutral weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemInventory(BTreeMap<String, u32>);

impl ItemInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from caller-supplied counts
    ///
    /// Negative counts are clamped to zero and zero counts dropped. Repeated
    /// names are summed.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut inventory = Self::new();
        for (name, count) in counts {
            let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
            inventory.add_named(name.into().trim().to_lowercase(), count);
        }
        inventory
    }

    pub fn add(&mut self, category: ItemCategory, count: u32) {
        self.add_named(category.as_str().to_string(), count);
    }

    fn add_named(&mut self, name: String, count: u32) {
        if count == 0 || name.is_empty() {
            return;
        }
        let entry = self.0.entry(name).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    pub fn count(&self, category: ItemCategory) -> u32 {
        self.0.get(category.as_str()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().map(|&count| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, &count)| (name.as_str(), count))
    }
}

/// The first run of ASCII digits in a line, if it fits a count
fn first_number(line: &str) -> Option<u32> {
    line.split(|c: char| !c.is_ascii_digit())
        .find(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
}

fn tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

/// A keyword matches a token exactly or in a simple plural
fn matches_keyword(token: &str, keyword: &str) -> bool {
    match token.strip_prefix(keyword) {
        Some(rest) => rest.is_empty() || rest == "s" || rest == "es",
        None => false,
    }
}

fn names_category(line: &str, line_tokens: &[&str], category: ItemCategory) -> bool {
    let label = category.label();
    if label.contains(' ') {
        line.contains(label) || line.contains(category.as_str())
    } else {
        line_tokens.contains(&label)
    }
}

/// Counts insurable items described in a narrative
///
/// Each line is read independently. A line naming a category together with a
/// number ("3 pieces of furniture") adds that number to the category.
/// Otherwise every category with a keyword on the line gains one item.
pub fn extract_item_inventory(narrative: &str) -> ItemInventory {
    let mut inventory = ItemInventory::new();

    for line in narrative.lines() {
        let line = line.to_lowercase();
        let line_tokens = tokens(&line);
        let first_number = first_number(&line);

        for category in ItemCategory::ALL {
            if let (true, Some(count)) = (names_category(&line, &line_tokens, category), first_number)
            {
                inventory.add(category, count);
                continue;
            }
            let keyword_found = category.keywords().iter().any(|keyword| {
                line_tokens
                    .iter()
                    .any(|token| matches_keyword(token, keyword))
            });
            if keyword_found {
                inventory.add(category, 1);
            }
        }
    }

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_clamps_and_drops() {
        let inventory =
            ItemInventory::from_counts([("electronics", 2), ("art", 0), ("jewelry", -4)]);
        assert_eq!(inventory.count(ItemCategory::Electronics), 2);
        assert_eq!(inventory.total(), 2);
        assert_eq!(inventory.iter().count(), 1);
    }

    #[test]
    fn test_keyword_lines() {
        let narrative = "A 65-inch TV mounted on the wall\n\
            Two leather sofas and a coffee table\n\
            A diamond necklace on the dresser";
        let inventory = extract_item_inventory(narrative);

        assert_eq!(inventory.count(ItemCategory::Electronics), 1);
        assert_eq!(inventory.count(ItemCategory::Furniture), 1);
        assert_eq!(inventory.count(ItemCategory::Jewelry), 1);
        assert_eq!(inventory.total(), 3);
    }

    #[test]
    fn test_explicit_category_count() {
        let inventory = extract_item_inventory("Furniture: 4 pieces\nSports equipment - 2 items");
        assert_eq!(inventory.count(ItemCategory::Furniture), 4);
        assert_eq!(inventory.count(ItemCategory::SportsEquipment), 2);
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        // "art" inside "smartphone" and "party" is not artwork
        let inventory = extract_item_inventory("a smartphone left after the party");
        assert_eq!(inventory.count(ItemCategory::Art), 0);
        assert_eq!(inventory.count(ItemCategory::Electronics), 1);
    }

    #[test]
    fn test_first_number() {
        assert_eq!(first_number("furniture: 4 pieces, 2 rooms"), Some(4));
        assert_eq!(first_number("no count here"), None);
        assert_eq!(first_number("99999999999 chairs"), None);
    }

    #[test]
    fn test_empty_narrative() {
        assert!(extract_item_inventory("").is_empty());
    }
}
