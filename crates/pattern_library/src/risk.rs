//! Property and location risk weights

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Insurable item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Electronics,
    Furniture,
    Appliances,
    Jewelry,
    Art,
    SportsEquipment,
    MusicalInstruments,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 7] = [
        ItemCategory::Electronics,
        ItemCategory::Furniture,
        ItemCategory::Appliances,
        ItemCategory::Jewelry,
        ItemCategory::Art,
        ItemCategory::SportsEquipment,
        ItemCategory::MusicalInstruments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Electronics => "electronics",
            ItemCategory::Furniture => "furniture",
            ItemCategory::Appliances => "appliances",
            ItemCategory::Jewelry => "jewelry",
            ItemCategory::Art => "art",
            ItemCategory::SportsEquipment => "sports_equipment",
            ItemCategory::MusicalInstruments => "musical_instruments",
        }
    }

    pub fn from_name(name: &str) -> Option<ItemCategory> {
        let normalized = name.trim().to_lowercase().replace(' ', "_");
        ItemCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }

    /// How the category is written in running text
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::SportsEquipment => "sports equipment",
            ItemCategory::MusicalInstruments => "musical instruments",
            other => other.as_str(),
        }
    }

    /// Multiplicative risk weight of one item
    pub fn weight(&self) -> Decimal {
        match self {
            ItemCategory::Electronics => dec!(1.2),
            ItemCategory::Furniture => dec!(1.1),
            ItemCategory::Appliances => dec!(1.15),
            ItemCategory::Jewelry => dec!(1.5),
            ItemCategory::Art => dec!(1.3),
            ItemCategory::SportsEquipment => dec!(1.05),
            ItemCategory::MusicalInstruments => dec!(1.25),
        }
    }

    /// Substrings that identify an item of this category in a narrative line
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ItemCategory::Electronics => &[
                "tv",
                "television",
                "computer",
                "laptop",
                "phone",
                "smartphone",
                "tablet",
            ],
            ItemCategory::Furniture => &[
                "sofa", "couch", "chair", "table", "desk", "bed", "cabinet", "shelf",
            ],
            ItemCategory::Appliances => &[
                "refrigerator",
                "fridge",
                "oven",
                "stove",
                "microwave",
                "washer",
                "dryer",
            ],
            ItemCategory::Jewelry => &["jewelry", "watch", "ring", "necklace", "bracelet"],
            ItemCategory::Art => &["painting", "sculpture", "artwork", "art", "photograph"],
            ItemCategory::SportsEquipment => &["bicycle", "bike", "treadmill", "weights", "sports"],
            ItemCategory::MusicalInstruments => &["piano", "guitar", "instrument", "musical"],
        }
    }
}

/// Weight applied to inventory entries whose category is not in the table
pub fn unknown_category_weight() -> Decimal {
    dec!(1.0)
}

/// Geographic and property hazard tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationFactor {
    FloodZone,
    HighCrime,
    WildfireProne,
    HurricaneProne,
    EarthquakeProne,
    Urban,
    Suburban,
    Rural,
    TornadoProne,
}

impl LocationFactor {
    pub const ALL: [LocationFactor; 9] = [
        LocationFactor::FloodZone,
        LocationFactor::HighCrime,
        LocationFactor::WildfireProne,
        LocationFactor::HurricaneProne,
        LocationFactor::EarthquakeProne,
        LocationFactor::Urban,
        LocationFactor::Suburban,
        LocationFactor::Rural,
        LocationFactor::TornadoProne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationFactor::FloodZone => "flood_zone",
            LocationFactor::HighCrime => "high_crime",
            LocationFactor::WildfireProne => "wildfire_prone",
            LocationFactor::HurricaneProne => "hurricane_prone",
            LocationFactor::EarthquakeProne => "earthquake_prone",
            LocationFactor::Urban => "urban",
            LocationFactor::Suburban => "suburban",
            LocationFactor::Rural => "rural",
            LocationFactor::TornadoProne => "tornado_prone",
        }
    }

    pub fn from_tag(tag: &str) -> Option<LocationFactor> {
        LocationFactor::ALL
            .into_iter()
            .find(|factor| factor.as_str() == tag)
    }

    /// Multiplicative weight; tornado exposure is tracked but priced neutral
    pub fn weight(&self) -> Decimal {
        match self {
            LocationFactor::FloodZone => dec!(1.4),
            LocationFactor::HighCrime => dec!(1.3),
            LocationFactor::WildfireProne => dec!(1.35),
            LocationFactor::HurricaneProne => dec!(1.45),
            LocationFactor::EarthquakeProne => dec!(1.5),
            LocationFactor::Urban => dec!(1.1),
            LocationFactor::Suburban => dec!(1.0),
            LocationFactor::Rural => dec!(0.95),
            LocationFactor::TornadoProne => dec!(1.0),
        }
    }
}

/// Hazard tags and the place names that carry them, in evaluation order
pub const HAZARD_AREAS: &[(LocationFactor, &[&str])] = &[
    (
        LocationFactor::HurricaneProne,
        &["miami", "new orleans", "houston", "tampa", "charleston"],
    ),
    (
        LocationFactor::WildfireProne,
        &["los angeles", "san diego", "phoenix", "denver", "portland"],
    ),
    (
        LocationFactor::EarthquakeProne,
        &["san francisco", "seattle", "los angeles", "portland", "anchorage"],
    ),
    (
        LocationFactor::TornadoProne,
        &["oklahoma city", "kansas city", "dallas", "st. louis", "nashville"],
    ),
    (
        LocationFactor::FloodZone,
        &["new orleans", "houston", "miami", "charleston", "jacksonville"],
    ),
];

/// Cities classified as urban
pub const MAJOR_CITIES: &[&str] = &[
    "new york",
    "los angeles",
    "chicago",
    "houston",
    "phoenix",
    "philadelphia",
    "san antonio",
    "san diego",
    "dallas",
    "san jose",
];

/// Location words that mark a rural address
pub const RURAL_MARKERS: &[&str] = &["county", "township"];

/// Base risk before item and location factors
pub fn base_risk() -> Decimal {
    dec!(1.0)
}

/// Overall risk below this is Low
pub fn low_risk_ceiling() -> Decimal {
    dec!(1.0)
}

/// Overall risk above this is High
pub fn high_risk_floor() -> Decimal {
    dec!(1.5)
}

/// Coverage recommended before any items are counted
pub fn base_coverage() -> Decimal {
    dec!(50000)
}

/// Coverage added per counted item
pub fn coverage_per_item() -> Decimal {
    dec!(1000)
}

/// Annual premium as a share of recommended coverage
pub fn premium_rate() -> Decimal {
    dec!(0.02)
}
