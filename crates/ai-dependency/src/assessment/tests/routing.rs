use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::domain::{AssessmentError, RawResponses};
use crate::assessment::guidance::MOTIVATIONAL_QUOTES;
use crate::assessment::questionnaire::Questionnaire;
use crate::assessment::router::{
    assessment_router, breakdown_handler, score_handler, weighted_handler, BreakdownRequest,
    ScoreRequest, WeightedRequest,
};
use crate::error::AppError;

fn raw(pairs: &[(&str, &str)]) -> RawResponses {
    RawResponses(
        pairs
            .iter()
            .map(|(id, label)| (id.to_string(), label.to_string()))
            .collect(),
    )
}

async fn post_json(uri: &str, payload: Value) -> axum::response::Response {
    assessment_router(Arc::new(Questionnaire::standard()))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds")
}

#[tokio::test]
async fn score_handler_returns_report() {
    let request = ScoreRequest {
        profession: Some("Designer".to_string()),
        responses: raw(&[("daily_usage", "Often"), ("decision_making", "Always")]),
        as_of: Some(as_of()),
    };

    let Json(report) = score_handler(Json(request)).await.expect("scores");

    assert_eq!(report.score.value(), 88);
    assert_eq!(
        report.message,
        "Critical Risk: Immediate attention needed to reduce AI dependency"
    );
    assert!(report.breakdown.is_none());
}

#[tokio::test]
async fn score_handler_rejects_empty_responses() {
    let request = ScoreRequest {
        profession: None,
        responses: RawResponses::default(),
        as_of: None,
    };

    let err = score_handler(Json(request))
        .await
        .expect_err("empty input rejected");
    assert!(matches!(err, AppError::Assessment(AssessmentError::EmptyInput)));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn breakdown_handler_requires_canonical_questions() {
    let request = BreakdownRequest {
        responses: raw(&[("daily_usage", "Always")]),
    };

    let err = breakdown_handler(Json(request))
        .await
        .expect_err("incomplete breakdown");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err.to_string().contains("decision_making"));
}

#[tokio::test]
async fn weighted_handler_scores_profession_catalog() {
    let request = WeightedRequest {
        profession: "Doctor / Medical Professional".to_string(),
        responses: raw(&[("diagnosis", "Always"), ("decision", "Always")]),
        history: Vec::new(),
    };

    let Json(body) = weighted_handler(Json(request)).await.expect("scores");

    // (5 * 4 + 4 * 4) of 4 * 30
    assert_eq!(body.total, 36);
    assert_eq!(body.maximum, 120);
    assert_eq!(body.score.value(), 30);
    assert_eq!(body.persona, "Health Guardian");
    assert_eq!(body.dependency_label, "Moderate Dependency");
    assert_eq!(body.patterns.critical_areas, vec!["diagnosis", "med_research"]);
    assert!(body.action_items.is_empty());
    assert!(body.forecast.is_none());
    assert_eq!(body.quote, MOTIVATIONAL_QUOTES[0]);
}

#[tokio::test]
async fn weighted_route_reports_patterns_and_forecast() {
    let response = post_json(
        "/api/v1/assessment/weighted",
        json!({
            "profession": "Developer",
            "responses": { "coding": "Always", "debugging": "Often", "decision": "Always" },
            "history": [10, 20, 30],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["patterns"]["overall_trend"], "increasing");
    assert_eq!(payload["patterns"]["critical_score"], 3.5);
    assert_eq!(
        payload["action_items"],
        json!([
            "Focus on reducing AI dependency in critical areas",
            "Set specific boundaries for AI tool usage",
        ])
    );
    let forecast = payload["forecast"].as_array().expect("forecast");
    assert_eq!(forecast.len(), 30);
    assert_eq!(forecast[0], 48);
}

#[tokio::test]
async fn score_route_rejects_unknown_labels() {
    let response = post_json(
        "/api/v1/assessment/score",
        json!({ "responses": { "daily_usage": "Often", "decision_making": "Nope" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("decision_making"));
    assert!(message.contains("Nope"));
}

#[tokio::test]
async fn score_route_rejects_unknown_profession() {
    let response = post_json(
        "/api/v1/assessment/score",
        json!({ "profession": "Pilot", "responses": { "daily_usage": "Often" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn breakdown_route_honours_first_seen_ties() {
    let response = post_json(
        "/api/v1/assessment/breakdown",
        json!({ "responses": {
            "daily_usage": "Never",
            "decision_making": "Never",
            "content_creation": "Never"
        } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["highestDependency"], "dailyUsage");
    assert_eq!(payload["lowestDependency"], "dailyUsage");
}

#[tokio::test]
async fn questionnaire_route_lists_questions_and_professions() {
    let response = assessment_router(Arc::new(Questionnaire::standard()))
        .oneshot(
            Request::builder()
                .uri("/api/v1/assessment/questionnaire")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(3));
    assert_eq!(payload["questions"][0]["id"], "daily_usage");
    assert_eq!(payload["questions"][0]["options"][4], "Always");
    assert_eq!(payload["options"][2]["percent"], 50);
    assert_eq!(payload["professions"][7]["profession"], "Project Manager");
    assert_eq!(payload["professions"][7]["persona"], "Harmony Creator");
}
