//! Dependency self-assessment: response model, scoring engine, and the guidance built on it.
//!
//! The scoring functions are pure. [`AssessmentSession`] is the only stateful piece and it
//! is owned by whoever collects the answers.

pub mod breakdown;
pub mod domain;
pub mod guidance;
pub mod questionnaire;
pub mod router;
pub mod scoring;
pub mod session;
pub mod weighted;

#[cfg(test)]
mod tests;

pub use breakdown::{analyze_breakdown, Breakdown, DependencyArea};
pub use domain::{
    AssessmentError, InvalidResponseReason, Profession, QuestionId, RawResponses, ResponseLevel,
    ResponseSet,
};
pub use guidance::{
    forecast_scores, motivational_quote, project_dependency, DependencyProjection, GaugeBand,
    GaugeSpec, ProjectionHorizon, FORECAST_DAYS, MOTIVATIONAL_QUOTES,
};
pub use questionnaire::{
    Question, Questionnaire, QuestionnaireView, CONTENT_CREATION, DAILY_USAGE, DECISION_MAKING,
};
pub use router::assessment_router;
pub use scoring::{classify_risk, compute_score, RiskLevel, Score};
pub use session::{AssessmentReport, AssessmentSession};
pub use weighted::{
    action_items, questions_for, usage_patterns, weighted_score, ContributionLine, UsagePatterns,
    UsageTrend, WeightedQuestion, WeightedScore, GENERAL_QUESTIONS,
};
