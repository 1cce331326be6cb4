//! HTTP tests for interface_api, driven through the router with `oneshot`

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use core_kernel::{RandomIdentifierService, RecordStore};
use infra_db::InMemoryRecordStore;
use interface_api::{
    config::ApiConfig, create_router, middleware::REQUEST_ID_HEADER, AppState,
    UnconfiguredDescriptionService,
};
use test_utils::{
    seeded_store, DateFixtures, FailingRecordStore, NarrativeFixtures, PolicyFixtures,
    SequenceIdentifierService,
};

fn router_with(store: Arc<dyn RecordStore>) -> Router {
    create_router(AppState::new(
        store,
        Arc::new(UnconfiguredDescriptionService),
        Arc::new(RandomIdentifierService),
        ApiConfig::default(),
    ))
}

fn memory_router() -> Router {
    router_with(Arc::new(InMemoryRecordStore::new()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("route executes");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(text) => text.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let (status, body) = send(memory_router(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_with_memory_store() {
        let (status, body) = send(memory_router(), get("/health/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["store"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_with_unreachable_store() {
        let (status, body) = send(router_with(Arc::new(FailingRecordStore)), get("/health/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = memory_router().oneshot(get("/health")).await.unwrap();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert!(request_id.starts_with("REQ-"));
    }
}

// ============================================================================
// Engine Endpoint Tests
// ============================================================================

mod engine_tests {
    use super::*;

    #[tokio::test]
    async fn test_document_analysis() {
        let (status, body) = send(
            memory_router(),
            post_json("/api/v1/documents/analyze", json!({"text": "premium and claim number"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document_type"], "policy");

        let (_, empty) = send(
            memory_router(),
            post_json("/api/v1/documents/analyze", json!({"text": ""})),
        )
        .await;
        assert_eq!(empty["document_type"], "unknown");
    }

    #[tokio::test]
    async fn test_risk_score() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/underwriting/risk-score",
                json!({"items": {"electronics": 3}, "location_factors": ["suburban"]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["risk_score"]), dec!(1.2));
        assert_eq!(body["risk_category"], "Medium");
        assert_eq!(decimal(&body["recommended_coverage"]), dec!(63600));
    }

    #[tokio::test]
    async fn test_risk_score_ignores_negative_counts() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/underwriting/risk-score",
                json!({"items": {"electronics": -2}, "location_factors": ["suburban"]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["risk_score"]), Decimal::ZERO);
        assert_eq!(body["risk_category"], "Low");
    }

    #[tokio::test]
    async fn test_fraud_check_theft_on_new_policy() {
        let start = DateFixtures::days_before(DateFixtures::weekday(), 10);
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/claims/fraud-checks",
                json!({
                    "description": NarrativeFixtures::theft_short(),
                    "report_date": "2024-03-13",
                    "has_police_report": false,
                    "policy": {
                        "start_date": start.to_string(),
                        "coverage_amount": "50000",
                        "deductible": "500"
                    },
                    "history": {"recent_claims_count": 4}
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["fraud_score"]), dec!(0.56));
        assert_eq!(body["risk_category"], "Medium");
        assert_eq!(body["recommended_action"], "Request additional documentation");
        assert_eq!(body["indicators_found"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_fraud_check_infers_police_report() {
        let start = DateFixtures::days_before(DateFixtures::weekday(), 400);
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/claims/fraud-checks",
                json!({
                    "description": "Theft of jewelry, stolen last night. Police report filed.",
                    "report_date": "2024-03-13",
                    "policy": {
                        "start_date": start.to_string(),
                        "coverage_amount": "50000",
                        "deductible": "500"
                    }
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["indicators_found"], json!(["Vague claim description"]));
    }

    #[tokio::test]
    async fn test_fraud_check_reads_negated_police_report() {
        let start = DateFixtures::days_before(DateFixtures::weekday(), 400);
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/claims/fraud-checks",
                json!({
                    "description": "Theft of jewelry, stolen last night. The police report was not filed.",
                    "report_date": "2024-03-13",
                    "policy": {
                        "start_date": start.to_string(),
                        "coverage_amount": "50000",
                        "deductible": "500"
                    }
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["indicators_found"],
            json!(["Vague claim description", "Theft claim without police report"])
        );
    }

    #[tokio::test]
    async fn test_sentiment_and_intent() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/customer/sentiment",
                json!({"text": "The adjuster was friendly and the process was fast"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "positive");
        assert_eq!(body["positive_count"], 2);

        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/customer/intent",
                json!({"text": "What is my deductible and how do I pay my bill?"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "billing");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let request = Request::post("/api/v1/customer/sentiment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(memory_router(), request).await;
        assert!(status.is_client_error());

        let (status, _) = send(
            memory_router(),
            post_json("/api/v1/customer/sentiment", json!({"body": "missing text"})),
        )
        .await;
        assert!(status.is_client_error());
    }
}

// ============================================================================
// Underwriting Workflow Tests
// ============================================================================

mod underwriting_tests {
    use super::*;

    fn issue_request(assessment: Value, email: &str, deductible: &str) -> Value {
        json!({
            "policyholder": {"name": "Jordan Lee", "email": email},
            "assessment": assessment,
            "start_date": "2024-02-29",
            "deductible": deductible
        })
    }

    async fn scored_assessment(router: Router) -> Value {
        let (_, body) = send(
            router,
            post_json(
                "/api/v1/underwriting/risk-score",
                json!({"items": {"electronics": 3}, "location_factors": ["suburban"]}),
            ),
        )
        .await;
        body
    }

    #[tokio::test]
    async fn test_risk_analysis_from_narrative() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/underwriting/analyses",
                json!({"narrative": NarrativeFixtures::living_room(), "location": "Springfield"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["items"]["electronics"], 3);
        assert_eq!(decimal(&body["assessment"]["risk_score"]), dec!(1.2));
    }

    #[tokio::test]
    async fn test_image_without_model_degrades() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/underwriting/analyses",
                json!({"image": "living-room.jpg", "location": "Springfield"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_location_is_422() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/underwriting/analyses",
                json!({"narrative": "A chair", "location": ""}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_issue_then_fetch_policy() {
        let store = Arc::new(InMemoryRecordStore::new());
        let router = create_router(AppState::new(
            store,
            Arc::new(UnconfiguredDescriptionService),
            Arc::new(SequenceIdentifierService::new(["POL-20240229-AAAAAAAAAA"])),
            ApiConfig::default(),
        ));
        let assessment = scored_assessment(router.clone()).await;

        let (status, body) = send(
            router.clone(),
            post_json(
                "/api/v1/underwriting/policies",
                issue_request(assessment, "jordan@example.com", "500"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true, "{body}");
        assert_eq!(body["policy"]["policy_number"], "POL-20240229-AAAAAAAAAA");

        let (status, policy) = send(router, get("/api/v1/policies/POL-20240229-AAAAAAAAAA")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&policy["coverage_amount"]), dec!(63600));
        assert_eq!(policy["end_date"], "2025-02-28");
    }

    #[tokio::test]
    async fn test_invalid_applications_are_422() {
        let router = memory_router();
        let assessment = scored_assessment(router.clone()).await;

        let (status, _) = send(
            router.clone(),
            post_json(
                "/api/v1/underwriting/policies",
                issue_request(assessment.clone(), "not-an-email", "500"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            router,
            post_json(
                "/api/v1/underwriting/policies",
                issue_request(assessment, "jordan@example.com", "-1"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_coverage_summary() {
        let today = Utc::now().date_naive();
        let policy = PolicyFixtures::active_for("POL-COVER", today, 10);
        let router = router_with(seeded_store(vec![policy]).await);

        let (status, body) = send(router.clone(), get("/api/v1/policies/POL-COVER/coverage")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy_number"], "POL-COVER");
        assert_eq!(decimal(&body["total_coverage"]), dec!(50000));
        assert_eq!(decimal(&body["deductible"]), dec!(500));
        let days_remaining = body["days_remaining"].as_i64().unwrap();
        assert!((350..=360).contains(&days_remaining), "{days_remaining}");

        let (status, body) = send(router, get("/api/v1/policies/POL-NOPE/coverage")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Policy POL-NOPE not found");
    }

    #[tokio::test]
    async fn test_unknown_policy_is_404() {
        let (status, body) = send(memory_router(), get("/api/v1/policies/POL-NOPE")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Policy POL-NOPE not found");
    }
}

// ============================================================================
// Claims Workflow Tests
// ============================================================================

mod claims_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_then_fetch_claim() {
        let policy = PolicyFixtures::active_for("POL-THEFT", DateFixtures::weekday(), 10);
        let router = router_with(seeded_store(vec![policy]).await);

        let (status, body) = send(
            router.clone(),
            post_json(
                "/api/v1/claims",
                json!({
                    "policy_number": "POL-THEFT",
                    "description": NarrativeFixtures::theft_short(),
                    "report_date": "2024-03-13",
                    "items": ["jewelry"],
                    "history": {"recent_claims_count": 4}
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true, "{body}");
        assert_eq!(body["decision"]["status"], "Under Review");
        assert_eq!(decimal(&body["decision"]["claim_amount"]), dec!(2500));

        let claim_number = body["claim_number"].as_str().unwrap().to_string();
        assert!(claim_number.starts_with("CLM-"));
        let (status, claim) = send(router, get(&format!("/api/v1/claims/{claim_number}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(claim["policy_number"], "POL-THEFT");
        assert_eq!(claim["status"], "Under Review");
    }

    #[tokio::test]
    async fn test_unknown_policy_is_failed_outcome() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/claims",
                json!({"policy_number": "POL-NOPE", "description": "Water damage"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_empty_policy_number_is_422() {
        let (status, _) = send(
            memory_router(),
            post_json("/api/v1/claims", json!({"policy_number": "", "description": "Water"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_claim_is_404() {
        let (status, _) = send(memory_router(), get("/api/v1/claims/CLM-NOPE")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_claim_lookup_with_unreachable_store_is_503() {
        let (status, body) =
            send(router_with(Arc::new(FailingRecordStore)), get("/api/v1/claims/CLM-1")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "service_unavailable");
    }
}

// ============================================================================
// Customer Workflow Tests
// ============================================================================

mod customer_tests {
    use super::*;

    #[tokio::test]
    async fn test_query_with_policy() {
        let policy = PolicyFixtures::active("POL-KNOWN", DateFixtures::weekday());
        let router = router_with(seeded_store(vec![policy]).await);

        let (status, body) = send(
            router,
            post_json(
                "/api/v1/customer/queries",
                json!({
                    "query": "Great service! What does my policy premium include?",
                    "policy_number": "POL-KNOWN"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["policy_found"], true);
        assert_eq!(body["intent"], "policy_info");
        assert!(body["response"].as_str().unwrap().contains("Policy Number: POL-KNOWN"));
    }

    #[tokio::test]
    async fn test_empty_query_is_422() {
        let (status, _) = send(
            memory_router(),
            post_json("/api/v1/customer/queries", json!({"query": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_escalation() {
        let (status, body) = send(
            memory_router(),
            post_json(
                "/api/v1/customer/escalations",
                json!({"query": "This is terrible, the worst service, I am angry"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["priority"], "High");
        assert!(body["escalation_id"].as_str().unwrap().starts_with("ESC-"));
    }
}
