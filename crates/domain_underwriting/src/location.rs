//! Location risk-factor classification

use pattern_library::risk::{HAZARD_AREAS, MAJOR_CITIES, RURAL_MARKERS};
use pattern_library::LocationFactor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of location risk tags
///
/// Tags outside the fixed factor table are kept but score neutral.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationFactors(BTreeSet<String>);

impl LocationFactors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            tags.into_iter()
                .map(|tag| tag.into().trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }

    pub fn insert(&mut self, factor: LocationFactor) {
        self.0.insert(factor.as_str().to_string());
    }

    pub fn contains(&self, factor: LocationFactor) -> bool {
        self.0.contains(factor.as_str())
    }

    /// Tags that appear in the factor table
    pub fn recognized(&self) -> impl Iterator<Item = LocationFactor> + '_ {
        self.0.iter().filter_map(|tag| LocationFactor::from_tag(tag))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Derives risk tags from a free-text location
///
/// Hazard tags come from the city tables. Exactly one of urban, rural and
/// suburban is always added: urban for a major city, rural for a county or
/// township, suburban otherwise.
pub fn classify_location(location: &str) -> LocationFactors {
    let location = location.to_lowercase();
    let mut factors = LocationFactors::new();

    for (factor, places) in HAZARD_AREAS {
        if places.iter().any(|place| location.contains(place)) {
            factors.insert(*factor);
        }
    }

    let settlement = if MAJOR_CITIES.iter().any(|city| location.contains(city)) {
        LocationFactor::Urban
    } else if RURAL_MARKERS.iter().any(|marker| location.contains(marker)) {
        LocationFactor::Rural
    } else {
        LocationFactor::Suburban
    };
    factors.insert(settlement);

    factors
}
