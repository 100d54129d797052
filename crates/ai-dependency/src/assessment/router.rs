use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::breakdown::{analyze_breakdown, Breakdown};
use super::domain::{Profession, RawResponses};
use super::guidance::{forecast_scores, motivational_quote, FORECAST_DAYS};
use super::questionnaire::{Questionnaire, QuestionnaireView};
use super::scoring::{RiskLevel, Score};
use super::session::AssessmentReport;
use super::weighted::{
    action_items, questions_for, usage_patterns, weighted_score, ContributionLine, UsagePatterns,
};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub responses: RawResponses,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    #[serde(default)]
    pub responses: RawResponses,
}

#[derive(Debug, Deserialize)]
pub struct WeightedRequest {
    pub profession: String,
    #[serde(default)]
    pub responses: RawResponses,
    /// Earlier weighted scores, oldest first.
    #[serde(default)]
    pub history: Vec<Score>,
}

#[derive(Debug, Serialize)]
pub struct WeightedResponse {
    pub profession: Profession,
    pub persona: &'static str,
    pub score: Score,
    pub risk_level: RiskLevel,
    pub message: &'static str,
    pub dependency_label: &'static str,
    pub tagline: &'static str,
    pub total: u32,
    pub maximum: u32,
    pub lines: Vec<ContributionLine>,
    pub patterns: UsagePatterns,
    pub action_items: Vec<&'static str>,
    pub forecast: Option<Vec<Score>>,
    pub quote: &'static str,
}

/// Router exposing the questionnaire and the scoring operations.
pub fn assessment_router(questionnaire: Arc<Questionnaire>) -> Router {
    Router::new()
        .route(
            "/api/v1/assessment/questionnaire",
            get(questionnaire_handler),
        )
        .route("/api/v1/assessment/score", post(score_handler))
        .route("/api/v1/assessment/breakdown", post(breakdown_handler))
        .route("/api/v1/assessment/weighted", post(weighted_handler))
        .with_state(questionnaire)
}

pub(crate) async fn questionnaire_handler(
    State(questionnaire): State<Arc<Questionnaire>>,
) -> Json<QuestionnaireView> {
    Json(questionnaire.view())
}

pub(crate) async fn score_handler(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let ScoreRequest {
        profession,
        responses,
        as_of,
    } = request;

    let profession = profession
        .map(|raw| raw.parse::<Profession>())
        .transpose()?;
    let responses = responses.into_response_set()?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let report = AssessmentReport::build(profession, &responses, as_of)?;
    info!(
        profession = profession.map(Profession::label),
        answers = responses.len(),
        score = report.score.value(),
        risk = report.risk_level.label(),
        "assessment scored"
    );

    Ok(Json(report))
}

pub(crate) async fn breakdown_handler(
    Json(request): Json<BreakdownRequest>,
) -> Result<Json<Breakdown>, AppError> {
    let responses = request.responses.into_response_set()?;
    Ok(Json(analyze_breakdown(&responses)?))
}

pub(crate) async fn weighted_handler(
    Json(request): Json<WeightedRequest>,
) -> Result<Json<WeightedResponse>, AppError> {
    let profession = request.profession.parse::<Profession>()?;
    let responses = request.responses.into_response_set()?;
    let questions = questions_for(profession);
    let weighted = weighted_score(&responses, &questions);
    let risk_level = weighted.score.risk_level();
    let patterns = usage_patterns(profession, &responses);
    let action_items = action_items(weighted.score, &patterns);

    Ok(Json(WeightedResponse {
        profession,
        persona: profession.persona(),
        score: weighted.score,
        risk_level,
        message: risk_level.message(),
        dependency_label: risk_level.dependency_label(),
        tagline: risk_level.tagline(),
        total: weighted.total,
        maximum: weighted.maximum,
        lines: weighted.lines,
        patterns,
        action_items,
        forecast: forecast_scores(&request.history, profession, FORECAST_DAYS),
        quote: motivational_quote(u64::from(weighted.score.value())),
    }))
}
