use super::domain::{AssessmentError, Profession, ResponseLevel, ResponseSet};
use serde::Serialize;

pub const DAILY_USAGE: &str = "daily_usage";
pub const DECISION_MAKING: &str = "decision_making";
pub const CONTENT_CREATION: &str = "content_creation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [ResponseLevel; 5],
}

/// Ordered set of questions a respondent must answer before submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Question ids without an answer, in questionnaire order.
    pub fn unanswered(&self, responses: &ResponseSet) -> Vec<&'static str> {
        self.questions
            .iter()
            .filter(|question| !responses.contains(question.id))
            .map(|question| question.id)
            .collect()
    }

    pub fn is_complete(&self, responses: &ResponseSet) -> bool {
        self.unanswered(responses).is_empty()
    }

    pub(crate) fn ensure_complete(&self, responses: &ResponseSet) -> Result<(), AssessmentError> {
        match self.unanswered(responses).first() {
            Some(question) => Err(AssessmentError::missing(question)),
            None => Ok(()),
        }
    }

    pub fn view(&self) -> QuestionnaireView {
        QuestionnaireView {
            questions: self.questions.clone(),
            options: ResponseLevel::ordered()
                .into_iter()
                .map(|level| OptionView {
                    label: level.label(),
                    percent: level.percent(),
                })
                .collect(),
            professions: Profession::ordered()
                .into_iter()
                .map(|profession| ProfessionView {
                    profession,
                    persona: profession.persona(),
                })
                .collect(),
        }
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_questions() -> Vec<Question> {
    let options = ResponseLevel::ordered();
    vec![
        Question {
            id: DAILY_USAGE,
            prompt: "How often do you use AI tools in your daily work?",
            options,
        },
        Question {
            id: DECISION_MAKING,
            prompt: "To what extent do you rely on AI for decision-making?",
            options,
        },
        Question {
            id: CONTENT_CREATION,
            prompt: "How frequently do you use AI for content creation?",
            options,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub questions: Vec<Question>,
    pub options: Vec<OptionView>,
    pub professions: Vec<ProfessionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub label: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionView {
    pub profession: Profession,
    pub persona: &'static str,
}
