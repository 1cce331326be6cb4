//! Comprehensive tests for domain_claims

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use core_kernel::{
    DecisionStatus, ImageRef, RandomIdentifierService, RecordStore, RecordStoreExt, RiskCategory,
    Table,
};
use domain_claims::{
    detect_fraud, ClaimContext, ClaimSubmission, ClaimsProcessor, CustomerClaimHistory,
    PolicySnapshot, RecommendedAction,
};
use infra_db::InMemoryRecordStore;
use test_utils::{
    claimed_items_strategy, date_strategy, free_text_strategy, recent_claims_strategy,
    seeded_store, DateFixtures, FailingRecordStore, NarrativeFixtures, PolicyFixtures,
    ReadOnlyRecordStore, SequenceIdentifierService, StubDescriptionService,
};

fn snapshot_for(days_active: u64) -> PolicySnapshot {
    PolicySnapshot {
        start_date: Some(DateFixtures::days_before(DateFixtures::weekday(), days_active)),
        coverage_amount: dec!(50000),
        deductible: dec!(500),
    }
}

fn history(recent_claims_count: u32) -> CustomerClaimHistory {
    CustomerClaimHistory {
        recent_claims_count,
        prior_claims: Vec::new(),
    }
}

fn processor(store: Arc<dyn RecordStore>, numbers: Vec<&str>) -> ClaimsProcessor {
    ClaimsProcessor::new(
        store,
        Arc::new(StubDescriptionService::new(
            "Damaged television on the floor\nBroken chair by the window",
        )),
        Arc::new(SequenceIdentifierService::new(numbers)),
    )
}

fn submission(policy_number: &str, description: &str) -> ClaimSubmission {
    ClaimSubmission {
        policy_number: policy_number.to_string(),
        description: description.to_string(),
        report_date: Some("2024-03-13".to_string()),
        ..ClaimSubmission::default()
    }
}

// ============================================================================
// Fraud Scenario Tests
// ============================================================================

mod fraud_scenario_tests {
    use super::*;

    #[test]
    fn test_short_water_damage_description() {
        // Ten words: vague description plus unexplained water damage
        let claim = ClaimContext {
            description: "Minor water damage from a leaking pipe, no police report".to_string(),
            report_date: Some(DateFixtures::weekday()),
            ..ClaimContext::default()
        };
        let assessment = detect_fraud(&claim, &snapshot_for(400), &history(0));

        assert_eq!(
            assessment.indicators_found,
            vec![
                "Vague claim description",
                "Water damage claim without weather event"
            ]
        );
        assert_eq!(assessment.fraud_score, dec!(0.26));
        assert_eq!(assessment.risk_category, RiskCategory::Low);
    }

    #[test]
    fn test_long_water_damage_description() {
        let claim = ClaimContext {
            description: NarrativeFixtures::water_damage_long().to_string(),
            report_date: Some(DateFixtures::weekday()),
            ..ClaimContext::default()
        };
        let assessment = detect_fraud(&claim, &snapshot_for(400), &history(0));

        assert_eq!(
            assessment.indicators_found,
            vec!["Water damage claim without weather event"]
        );
        assert_eq!(assessment.fraud_score, dec!(0.14));
        assert_eq!(assessment.risk_category, RiskCategory::Low);
        assert_eq!(assessment.recommended_action, RecommendedAction::ProcessNormally);
    }

    #[test]
    fn test_storm_corroborates_water_damage() {
        let claim = ClaimContext {
            description: NarrativeFixtures::storm_damage().to_string(),
            report_date: Some(DateFixtures::weekday()),
            ..ClaimContext::default()
        };
        let assessment = detect_fraud(&claim, &snapshot_for(400), &history(0));
        assert!(assessment.indicators_found.is_empty());
    }

    #[test]
    fn test_theft_on_new_policy() {
        let claim = ClaimContext {
            description: NarrativeFixtures::theft_short().to_string(),
            report_date: Some(DateFixtures::weekday()),
            has_police_report: false,
            ..ClaimContext::default()
        };
        let assessment = detect_fraud(&claim, &snapshot_for(10), &history(4));

        assert_eq!(
            assessment.indicators_found,
            vec![
                "Recent policy creation",
                "Vague claim description",
                "Multiple recent claims",
                "Theft claim without police report",
            ]
        );
        assert_eq!(assessment.fraud_score, dec!(0.56));
        assert_eq!(assessment.risk_category, RiskCategory::Medium);
        assert_eq!(
            assessment.recommended_action,
            RecommendedAction::RequestDocumentation
        );
    }

    #[test]
    fn test_police_report_clears_theft_rule() {
        let claim = ClaimContext {
            description: NarrativeFixtures::theft_short().to_string(),
            report_date: Some(DateFixtures::weekday()),
            has_police_report: true,
            ..ClaimContext::default()
        };
        let assessment = detect_fraud(&claim, &snapshot_for(400), &history(0));
        assert_eq!(assessment.indicators_found, vec!["Vague claim description"]);
    }
}

// ============================================================================
// Claim Processing Workflow Tests
// ============================================================================

mod processing_tests {
    use super::*;

    #[tokio::test]
    async fn test_theft_claim_goes_to_review() {
        let policy = PolicyFixtures::active_for("POL-THEFT", DateFixtures::weekday(), 10);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store.clone(), vec!["CLM-20240313-0000000001"]);

        let outcome = processor
            .process_claim(ClaimSubmission {
                items: vec!["jewelry".to_string()],
                history: history(4),
                ..submission("POL-THEFT", NarrativeFixtures::theft_short())
            })
            .await;

        assert!(outcome.success, "{:?}", outcome.error);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.claim_number.as_deref(), Some("CLM-20240313-0000000001"));
        let decision = outcome.decision.unwrap();
        assert_eq!(decision.status, DecisionStatus::UnderReview);
        assert_eq!(decision.fraud_assessment.fraud_score, dec!(0.56));
        // 2000 jewelry + 1000 base - 500 deductible
        assert_eq!(decision.claim_amount, dec!(2500));

        let stored = store
            .fetch_claim("CLM-20240313-0000000001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, DecisionStatus::UnderReview);
        assert_eq!(stored.amount_requested, dec!(2500));
        assert_eq!(stored.amount_approved, Decimal::ZERO);
        assert_eq!(stored.fraud_indicators.len(), 4);
        assert_eq!(store.count(Table::ActivityLog).await, 1);
    }

    #[tokio::test]
    async fn test_water_claim_is_approved() {
        let policy = PolicyFixtures::active_for("POL-WATER", DateFixtures::weekday(), 400);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store.clone(), vec![]);

        let outcome = processor
            .process_claim(submission("POL-WATER", NarrativeFixtures::water_damage_long()))
            .await;

        let decision = outcome.decision.unwrap();
        assert_eq!(decision.status, DecisionStatus::Approved);
        assert_eq!(decision.claim_amount, dec!(500));
        assert_eq!(decision.next_steps[0], "Claim has been approved");

        let claims = store.records(Table::Claims).await;
        assert_eq!(claims.len(), 1);
    }

    #[tokio::test]
    async fn test_police_report_inferred_from_description() {
        let policy = PolicyFixtures::active_for("POL-CAR", DateFixtures::weekday(), 400);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store, vec![]);
        let description = "Laptop stolen from the car, police report filed with the city \
            precinct on Monday morning after we returned from a long trip";

        let outcome = processor
            .process_claim(submission("POL-CAR", description))
            .await;

        let decision = outcome.decision.unwrap();
        assert!(decision.fraud_assessment.indicators_found.is_empty());
        assert_eq!(decision.status, DecisionStatus::Approved);
    }

    #[tokio::test]
    async fn test_denied_police_report_keeps_theft_rule() {
        let policy = PolicyFixtures::active_for("POL-BIKE", DateFixtures::weekday(), 400);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store, vec![]);
        let description = "My bike was stolen from the garage while we were away for the \
            weekend visiting family, I haven't filed a police report yet";

        let outcome = processor
            .process_claim(submission("POL-BIKE", description))
            .await;

        let decision = outcome.decision.unwrap();
        assert_eq!(
            decision.fraud_assessment.indicators_found,
            vec!["Theft claim without police report"]
        );
        // 0.8 raw
        assert_eq!(decision.fraud_assessment.fraud_score, dec!(0.16));
    }

    #[tokio::test]
    async fn test_image_narrative_items_follow_caller_items() {
        let policy = PolicyFixtures::active_for("POL-IMG", DateFixtures::weekday(), 400);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store, vec![]);

        let outcome = processor
            .process_claim(ClaimSubmission {
                image: Some(ImageRef("claims/photo.png".to_string())),
                items: vec!["laptop".to_string()],
                ..submission("POL-IMG", NarrativeFixtures::storm_damage())
            })
            .await;

        assert_eq!(
            outcome.items_claimed,
            vec![
                "laptop",
                "Damaged television on the floor",
                "Broken chair by the window"
            ]
        );
        // 1000 + 500 + 500 + 1000 base - 500
        assert_eq!(outcome.decision.unwrap().claim_amount, dec!(2500));
        assert!(!outcome.narrative_summary.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_policy_fails() {
        let store = Arc::new(InMemoryRecordStore::new());
        let processor = processor(store.clone(), vec![]);

        let outcome = processor
            .process_claim(submission("POL-MISSING", NarrativeFixtures::theft_short()))
            .await;

        assert!(!outcome.success);
        assert!(outcome.decision.is_none());
        assert!(outcome.error.unwrap().contains("POL-MISSING"));
        assert_eq!(store.count(Table::Claims).await, 0);
        assert_eq!(store.count(Table::ActivityLog).await, 1);
    }

    #[tokio::test]
    async fn test_missing_policy_number_fails() {
        let processor = processor(Arc::new(InMemoryRecordStore::new()), vec![]);
        let outcome = processor
            .process_claim(submission("  ", NarrativeFixtures::theft_short()))
            .await;
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_unreachable_store_uses_default_terms() {
        let processor = ClaimsProcessor::new(
            Arc::new(FailingRecordStore),
            Arc::new(StubDescriptionService::new("")),
            Arc::new(RandomIdentifierService),
        );

        let outcome = processor
            .process_claim(ClaimSubmission {
                items: vec!["tv".to_string()],
                has_police_report: Some(true),
                ..submission("POL-ANY", NarrativeFixtures::theft_short())
            })
            .await;

        assert!(outcome.success);
        // policy lookup, number check, claim save
        assert_eq!(outcome.warnings.len(), 3);
        let decision = outcome.decision.unwrap();
        assert_eq!(
            decision.fraud_assessment.indicators_found,
            vec!["Vague claim description"]
        );
        assert_eq!(decision.status, DecisionStatus::Approved);
        assert_eq!(decision.claim_amount, dec!(1000));
    }

    #[tokio::test]
    async fn test_claim_save_failure_is_warning() {
        let policy = PolicyFixtures::active_for("POL-RO", DateFixtures::weekday(), 400);
        let inner = InMemoryRecordStore::new();
        inner
            .store(core_kernel::Record::Policy(policy))
            .await
            .unwrap();
        let processor = processor(Arc::new(ReadOnlyRecordStore::new(inner)), vec![]);

        let outcome = processor
            .process_claim(submission("POL-RO", NarrativeFixtures::water_damage_long()))
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("was not saved"));
    }

    #[tokio::test]
    async fn test_unparsable_report_date_skips_date_rules() {
        let policy = PolicyFixtures::active_for("POL-DATE", DateFixtures::weekday(), 5);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store, vec![]);

        let outcome = processor
            .process_claim(ClaimSubmission {
                report_date: Some("sometime last week".to_string()),
                ..submission("POL-DATE", NarrativeFixtures::storm_damage())
            })
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.warnings.len(), 1);
        let decision = outcome.decision.unwrap();
        assert!(decision.fraud_assessment.indicators_found.is_empty());
    }

    #[tokio::test]
    async fn test_weekend_report_date_text() {
        let policy = PolicyFixtures::active_for("POL-SAT", DateFixtures::weekday(), 400);
        let store = seeded_store(vec![policy]).await;
        let processor = processor(store, vec![]);

        let outcome = processor
            .process_claim(ClaimSubmission {
                report_date: Some("03/16/2024".to_string()),
                ..submission("POL-SAT", NarrativeFixtures::storm_damage())
            })
            .await;

        let decision = outcome.decision.unwrap();
        assert_eq!(
            decision.fraud_assessment.indicators_found,
            vec!["Claim filed on weekend"]
        );
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_fraud_score_is_bounded(
            description in free_text_strategy(),
            report_date in proptest::option::of(date_strategy()),
            start_date in proptest::option::of(date_strategy()),
            items in claimed_items_strategy(),
            recent in recent_claims_strategy(),
            has_police_report in any::<bool>(),
        ) {
            let claim = ClaimContext {
                description,
                report_date,
                items,
                image_summary: String::new(),
                has_police_report,
            };
            let policy = PolicySnapshot {
                start_date,
                coverage_amount: dec!(50000),
                deductible: dec!(500),
            };
            let assessment = detect_fraud(&claim, &policy, &history(recent));

            prop_assert!(assessment.fraud_score >= Decimal::ZERO);
            prop_assert!(assessment.fraud_score <= Decimal::ONE);
            prop_assert!(assessment.indicators_found.len() <= 7);
        }

        #[test]
        fn prop_indicators_are_unique_and_ordered(
            description in free_text_strategy(),
            items in claimed_items_strategy(),
        ) {
            let claim = ClaimContext {
                description,
                report_date: NaiveDate::from_ymd_opt(2024, 3, 16),
                items,
                ..ClaimContext::default()
            };
            let assessment = detect_fraud(&claim, &snapshot_for(3), &history(5));
            let positions: Vec<usize> = assessment
                .indicators()
                .map(|indicator| {
                    pattern_library::FraudIndicator::ALL
                        .iter()
                        .position(|candidate| *candidate == indicator)
                        .unwrap()
                })
                .collect();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
