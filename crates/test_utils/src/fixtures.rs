//! Pre-built Test Fixtures
//!
//! Narratives, policies and dates with hand-checked scores so workflow tests
//! can assert exact results.

use chrono::{Days, Months, NaiveDate};
use core_kernel::{PolicyRecord, PolicyStatus, Policyholder, Record, RecordStore};
use infra_db::InMemoryRecordStore;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Fixture for dates with known weekdays
pub struct DateFixtures;

impl DateFixtures {
    /// Wednesday 2024-03-13
    pub fn weekday() -> NaiveDate {
        date(2024, 3, 13)
    }

    /// Saturday 2024-03-16
    pub fn saturday() -> NaiveDate {
        date(2024, 3, 16)
    }

    /// `days` before the given date
    pub fn days_before(anchor: NaiveDate, days: u64) -> NaiveDate {
        anchor.checked_sub_days(Days::new(days)).unwrap_or(anchor)
    }
}

/// Fixture for vision-style and customer narratives
pub struct NarrativeFixtures;

impl NarrativeFixtures {
    /// Three electronics and nothing else
    pub fn living_room() -> &'static str {
        "The image shows a living room.\n\
         A large television is mounted on the wall.\n\
         A laptop rests on the floor.\n\
         A smartphone is charging near the window."
    }

    /// Counted furniture line plus keyword lines
    pub fn counted_inventory() -> &'static str {
        "Furniture: 4 pieces including a sofa and chairs\n\
         Two bicycles are leaning against the garage wall\n\
         A piano stands in the corner"
    }

    /// Narrative with no recognizable items
    pub fn empty_room() -> &'static str {
        "The picture is dark. Nothing can be identified on the bare walls."
    }

    /// Water damage with no weather mention, at least twenty words
    pub fn water_damage_long() -> &'static str {
        "Minor water damage from a leaking pipe under the kitchen sink soaked the \
         cabinet floor and the lower drawers before we noticed it this morning"
    }

    /// Short theft report
    pub fn theft_short() -> &'static str {
        "Theft of jewelry, stolen last night"
    }

    /// Storm-related water damage, at least twenty words
    pub fn storm_damage() -> &'static str {
        "During the storm last night heavy rain came through the roof and caused \
         water damage to the bedroom ceiling and the carpet on the upper floor"
    }
}

/// Fixture for policy records
pub struct PolicyFixtures;

impl PolicyFixtures {
    pub fn policyholder() -> Policyholder {
        Policyholder {
            name: "Jordan Lee".to_string(),
            email: Some("jordan.lee@example.com".to_string()),
            phone: None,
            address: Some("12 Harbor Lane, Springfield".to_string()),
        }
    }

    /// Active home policy with 50,000 coverage and a 500 deductible
    pub fn active(policy_number: &str, start_date: NaiveDate) -> PolicyRecord {
        PolicyRecord {
            policy_number: policy_number.to_string(),
            policy_type: "Home Insurance".to_string(),
            policyholder: Self::policyholder(),
            coverage_amount: dec!(50000),
            annual_premium: dec!(1000),
            monthly_premium: dec!(83.33),
            deductible: dec!(500),
            start_date,
            end_date: start_date
                .checked_add_months(Months::new(12))
                .unwrap_or(start_date),
            status: PolicyStatus::Active,
            risk_score: dec!(1.0),
        }
    }

    /// Active policy whose start date lies `days` before `anchor`
    pub fn active_for(policy_number: &str, anchor: NaiveDate, days: u64) -> PolicyRecord {
        Self::active(policy_number, DateFixtures::days_before(anchor, days))
    }
}

/// Creates an in-memory store holding the given policies
pub async fn seeded_store(policies: Vec<PolicyRecord>) -> Arc<InMemoryRecordStore> {
    let store = Arc::new(InMemoryRecordStore::new());
    for policy in policies {
        store
            .store(Record::Policy(policy))
            .await
            .expect("in-memory store accepts seed policies");
    }
    store
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
