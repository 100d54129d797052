use super::breakdown::{analyze_breakdown, Breakdown};
use super::domain::{
    AssessmentError, InvalidResponseReason, Profession, QuestionId, ResponseLevel, ResponseSet,
};
use super::guidance::{project_dependency, DependencyProjection, GaugeSpec};
use super::questionnaire::Questionnaire;
use super::scoring::{compute_score, RiskLevel, Score};
use chrono::NaiveDate;
use serde::Serialize;

/// Result of a submitted assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<&'static str>,
    pub score: Score,
    pub risk_level: RiskLevel,
    pub message: &'static str,
    pub gauge: GaugeSpec,
    pub projections: Vec<DependencyProjection>,
    pub detox_plan: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

impl AssessmentReport {
    /// Scores `responses` and attaches guidance. The breakdown is only present when all
    /// three canonical questions were answered.
    pub fn build(
        profession: Option<Profession>,
        responses: &ResponseSet,
        as_of: NaiveDate,
    ) -> Result<Self, AssessmentError> {
        let score = compute_score(responses)?;
        let risk_level = score.risk_level();

        Ok(Self {
            profession,
            persona: profession.map(Profession::persona),
            score,
            risk_level,
            message: risk_level.message(),
            gauge: GaugeSpec::for_score(score),
            projections: project_dependency(score, as_of),
            detox_plan: risk_level.detox_plan().to_vec(),
            breakdown: analyze_breakdown(responses).ok(),
        })
    }
}

/// In-progress answers for one respondent.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    questionnaire: Questionnaire,
    profession: Option<Profession>,
    responses: ResponseSet,
}

impl AssessmentSession {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            profession: None,
            responses: ResponseSet::new(),
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn profession(&self) -> Option<Profession> {
        self.profession
    }

    pub fn select_profession(&mut self, profession: Profession) {
        self.profession = Some(profession);
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn answer(
        &mut self,
        question: &str,
        label: &str,
    ) -> Result<ResponseLevel, AssessmentError> {
        if self.questionnaire.question(question).is_none() {
            return Err(AssessmentError::InvalidResponse {
                question: QuestionId::from(question),
                reason: InvalidResponseReason::UnknownQuestion,
            });
        }

        self.responses.record_label(question, label)?;
        self.responses
            .get(question)
            .ok_or_else(|| AssessmentError::missing(question))
    }

    pub fn is_complete(&self) -> bool {
        self.questionnaire.is_complete(&self.responses)
    }

    /// Scores the session; every question must have been answered.
    pub fn submit(&self, as_of: NaiveDate) -> Result<AssessmentReport, AssessmentError> {
        self.questionnaire.ensure_complete(&self.responses)?;
        AssessmentReport::build(self.profession, &self.responses, as_of)
    }

    /// Starts over for a new assessment.
    pub fn reset(&mut self) {
        self.profession = None;
        self.responses.clear();
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new(Questionnaire::standard())
    }
}
