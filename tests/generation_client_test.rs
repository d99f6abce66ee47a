use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use track_command::models::{EventGroup, PerformanceStat, TrainingPhase};
use track_command::services::{GenerationOutcome, GenerationService};

fn sample_series() -> Vec<PerformanceStat> {
    vec![
        PerformanceStat {
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            event_name: "100m Dash".to_string(),
            value: 11.2,
            display_value: "11.2s".to_string(),
            meet_name: None,
        },
        PerformanceStat {
            date: chrono::NaiveDate::from_ymd_opt(2024, 4, 12).unwrap(),
            event_name: "100m Dash".to_string(),
            value: 10.82,
            display_value: "10.82s".to_string(),
            meet_name: None,
        },
    ]
}

fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn missing_key_short_circuits_without_transport() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("plan")))
        .expect(0)
        .mount(&server)
        .await;

    let service = GenerationService::new(None).with_base_url(server.uri());

    let outcome = service
        .generate_workout_plan(EventGroup::Sprints, TrainingPhase::PreSeason, "Starts")
        .await;
    assert_eq!(outcome, GenerationOutcome::MissingApiKey);

    let outcome = service
        .analyze_performance("Jordan Miller", "100m Dash", &sample_series())
        .await;
    assert_eq!(outcome, GenerationOutcome::MissingApiKey);

    // MockServer verifies the zero-call expectation on drop
}

#[tokio::test]
async fn plan_request_reaches_the_generation_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-3-flash-preview:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("Sprints"))
        .and(body_string_contains("Pre-Season"))
        .and(body_string_contains("Block Starts"))
        .and(body_string_contains("systemInstruction"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_body("1. Warm-up\n2. Main Set")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = GenerationService::new(Some("test-key".to_string())).with_base_url(server.uri());

    let outcome = service
        .generate_workout_plan(EventGroup::Sprints, TrainingPhase::PreSeason, "Block Starts")
        .await;

    assert_eq!(
        outcome,
        GenerationOutcome::Generated("1. Warm-up\n2. Main Set".to_string())
    );
}

#[tokio::test]
async fn analysis_request_embeds_the_series() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-3-flash-preview:generateContent"))
        .and(body_string_contains("Jordan Miller"))
        .and(body_string_contains("03/01: 11.2s"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Trending down.")))
        .expect(1)
        .mount(&server)
        .await;

    let service = GenerationService::new(Some("test-key".to_string())).with_base_url(server.uri());

    let outcome = service
        .analyze_performance("Jordan Miller", "100m Dash", &sample_series())
        .await;

    assert_eq!(
        outcome,
        GenerationOutcome::Generated("Trending down.".to_string())
    );
}

#[tokio::test]
async fn remote_failure_collapses_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "boom"}})),
        )
        .mount(&server)
        .await;

    let service = GenerationService::new(Some("test-key".to_string())).with_base_url(server.uri());

    let outcome = service
        .generate_workout_plan(EventGroup::Distance, TrainingPhase::MidSeason, "Endurance")
        .await;
    assert_eq!(outcome, GenerationOutcome::Unavailable);
}

#[tokio::test]
async fn empty_candidates_collapse_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let service = GenerationService::new(Some("test-key".to_string())).with_base_url(server.uri());

    let outcome = service
        .generate_workout_plan(EventGroup::Jumps, TrainingPhase::OffSeason, "Approach")
        .await;
    assert_eq!(outcome, GenerationOutcome::Unavailable);
}

#[test]
fn placeholders_distinguish_missing_key_from_failure() {
    assert_ne!(
        GenerationOutcome::MissingApiKey.plan_text(),
        GenerationOutcome::Unavailable.plan_text()
    );
    assert_ne!(
        GenerationOutcome::MissingApiKey.analysis_text(),
        GenerationOutcome::Unavailable.analysis_text()
    );

    // Success flattens to its own text everywhere
    let generated = GenerationOutcome::Generated("plan".to_string());
    assert_eq!(generated.plan_text(), "plan");
    assert_eq!(generated.analysis_text(), "plan");
    assert!(generated.is_generated());
    assert!(!GenerationOutcome::Unavailable.is_generated());
}
