use super::domain::{Profession, ResponseLevel, ResponseSet};
use super::scoring::Score;
use serde::Serialize;
use tracing::debug;

/// Question from the profession-aware catalog, weighted 1 (minor) to 5 (core habit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub weight: u8,
}

const fn q(key: &'static str, prompt: &'static str, weight: u8) -> WeightedQuestion {
    WeightedQuestion {
        key,
        prompt,
        weight,
    }
}

pub const GENERAL_QUESTIONS: [WeightedQuestion; 5] = [
    q("decision", "How often do you use AI to help with decision-making?", 4),
    q("news", "How frequently do you consume AI-curated news feeds?", 3),
    q("content", "Do you use AI for writing, summarizing, or generating content?", 3),
    q(
        "recommendations",
        "How often do you rely on AI for recommendations (movies, music, shopping)?",
        3,
    ),
    q("assistants", "Do you use AI-powered virtual assistants (Siri, Alexa, Google Assistant)?", 2),
];

const DEVELOPER: [WeightedQuestion; 4] = [
    q("coding", "How often do you use AI to generate or refine your code?", 5),
    q("debugging", "How much do you rely on AI for debugging?", 4),
    q("design", "Do you use AI for system design suggestions?", 3),
    q("boilerplate", "How frequently do you use AI-generated scripts or boilerplate code?", 4),
];

const WRITER: [WeightedQuestion; 4] = [
    q("writing", "Do you use AI to generate blog ideas, stories, or article drafts?", 5),
    q("grammar", "How frequently do you use AI to correct grammar & improve clarity?", 4),
    q("creativity", "Do you use AI tools for creative writing prompts?", 3),
    q("seo", "Do you use AI to analyze reader engagement & optimize content?", 3),
];

const STUDENT: [WeightedQuestion; 4] = [
    q("study", "Do you rely on AI to summarize or explain study material?", 5),
    q("essays", "How often do you use AI to generate research reports or essays?", 4),
    q("tutoring", "Do you use AI-powered tutoring platforms?", 3),
    q("flashcards", "Do you use AI-generated flashcards or study plans?", 3),
];

const DESIGNER: [WeightedQuestion; 4] = [
    q("designing", "Do you use AI to generate art, logos, or design ideas?", 5),
    q("editing", "How frequently do you rely on AI tools for photo or video editing?", 4),
    q("ux_design", "Do you use AI-powered tools for UI/UX design?", 3),
    q("mockups", "Have you used AI to generate complete design mockups?", 3),
];

const DOCTOR: [WeightedQuestion; 4] = [
    q("diagnosis", "Do you use AI tools for diagnosing or recommending treatments?", 5),
    q("med_research", "Do you rely on AI for medical research summaries?", 4),
    q("records", "How frequently do you use AI for patient record analysis?", 3),
    q("chatbots", "Do you use AI-powered chatbots for patient interaction?", 3),
];

const LAWYER: [WeightedQuestion; 4] = [
    q("legal_research", "Do you use AI for legal research or case analysis?", 5),
    q("legal_docs", "How frequently do you rely on AI to draft legal documents?", 4),
    q("contracts", "Do you use AI-powered contract review tools?", 3),
    q("predict_cases", "Have you used AI to predict legal outcomes based on past cases?", 3),
];

const MARKETER: [WeightedQuestion; 4] = [
    q("ads", "Do you use AI for generating social media posts or ad copy?", 5),
    q("market_trends", "How often do you use AI for market trend analysis?", 4),
    q("seo", "Do you use AI for SEO optimization and keyword suggestions?", 3),
    q("chatbots", "Do you rely on AI-driven chatbots for customer engagement?", 3),
];

const PROJECT_MANAGER: [WeightedQuestion; 4] = [
    q("deadlines", "Do you use AI to predict project deadlines & resource allocation?", 5),
    q("task_management", "How often do you rely on AI-powered task management tools?", 4),
    q("productivity", "Do you use AI to analyze team productivity & workflows?", 3),
    q("reports", "Have you used AI-generated reports for stakeholder communication?", 3),
];

const CUSTOMER_SUPPORT: [WeightedQuestion; 4] = [
    q("chatbots", "Do you use AI chatbots to handle customer inquiries?", 5),
    q(
        "sentiment",
        "How frequently do you rely on AI for sentiment analysis in customer feedback?",
        4,
    ),
    q("canned_responses", "Do you use AI-generated responses for customer support tickets?", 3),
    q("automation", "Have you used AI to automate repetitive customer service tasks?", 3),
];

const ENTREPRENEUR: [WeightedQuestion; 4] = [
    q("automation", "Do you use AI for automating business decisions & operations?", 5),
    q(
        "market_research",
        "How frequently do you rely on AI-driven market research & competitor analysis?",
        4,
    ),
    q("pricing", "Do you use AI for optimizing pricing strategies?", 3),
    q("finance", "Have you used AI-powered financial forecasting tools?", 3),
];

impl Profession {
    /// Profession-specific questions; general users answer only the general set.
    pub fn weighted_questions(self) -> &'static [WeightedQuestion] {
        match self {
            Self::Developer => &DEVELOPER,
            Self::Writer => &WRITER,
            Self::Student => &STUDENT,
            Self::Designer => &DESIGNER,
            Self::Doctor => &DOCTOR,
            Self::Lawyer => &LAWYER,
            Self::Marketer => &MARKETER,
            Self::ProjectManager => &PROJECT_MANAGER,
            Self::CustomerSupport => &CUSTOMER_SUPPORT,
            Self::Entrepreneur => &ENTREPRENEUR,
            Self::GeneralUser => &[],
        }
    }
}

/// General questions followed by the profession's own questions.
pub fn questions_for(profession: Profession) -> Vec<WeightedQuestion> {
    GENERAL_QUESTIONS
        .iter()
        .chain(profession.weighted_questions())
        .copied()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionLine {
    pub key: &'static str,
    pub prompt: &'static str,
    pub response: ResponseLevel,
    pub weight: u8,
    pub frequency: u8,
    pub contribution: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedScore {
    pub score: Score,
    pub total: u32,
    pub maximum: u32,
    pub lines: Vec<ContributionLine>,
}

/// Normalized weighted score over a question list.
///
/// Unanswered questions count as `Never`. The ratio of earned to maximum points is
/// truncated, not rounded, and an empty question list scores zero.
pub fn weighted_score(responses: &ResponseSet, questions: &[WeightedQuestion]) -> WeightedScore {
    let lines: Vec<ContributionLine> = questions
        .iter()
        .map(|question| {
            let response = responses.get(question.key).unwrap_or(ResponseLevel::Never);
            let frequency = response.frequency();
            ContributionLine {
                key: question.key,
                prompt: question.prompt,
                response,
                weight: question.weight,
                frequency,
                contribution: u32::from(frequency) * u32::from(question.weight),
            }
        })
        .collect();

    let total: u32 = lines.iter().map(|line| line.contribution).sum();
    let maximum: u32 = questions
        .iter()
        .map(|question| u32::from(ResponseLevel::Always.frequency()) * u32::from(question.weight))
        .sum();

    let score = if maximum == 0 {
        Score::MIN
    } else {
        Score::saturating(u64::from(total) * 100 / u64::from(maximum))
    };

    debug!(
        questions = questions.len(),
        total,
        maximum,
        score = score.value(),
        "computed weighted score"
    );

    WeightedScore {
        score,
        total,
        maximum,
        lines,
    }
}

impl Profession {
    /// Weighted question keys whose answers drive the usage trend.
    pub const fn critical_areas(self) -> [&'static str; 2] {
        match self {
            Self::Developer => ["coding", "debugging"],
            Self::Writer => ["writing", "grammar"],
            Self::Student => ["study", "essays"],
            Self::Designer => ["designing", "editing"],
            Self::Doctor => ["diagnosis", "med_research"],
            Self::Lawyer => ["legal_research", "legal_docs"],
            Self::Marketer => ["ads", "market_trends"],
            Self::ProjectManager => ["deadlines", "task_management"],
            Self::CustomerSupport => ["chatbots", "sentiment"],
            Self::Entrepreneur => ["automation", "market_research"],
            Self::GeneralUser => ["decision", "content"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl UsageTrend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Stable => "Stable",
            Self::Decreasing => "Decreasing",
        }
    }
}

/// Frequency answers in a profession's critical areas, on the 0..=4 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsagePatterns {
    pub critical_areas: Vec<&'static str>,
    pub critical_total: u32,
    /// Mean frequency across the critical areas.
    pub critical_score: f32,
    pub overall_trend: UsageTrend,
}

impl UsagePatterns {
    /// Whether the mean critical frequency is strictly above `halves / 2`.
    fn mean_exceeds_halves(&self, halves: u32) -> bool {
        2 * self.critical_total > halves * self.critical_areas.len() as u32
    }
}

/// Critical-area usage for a profession. Unanswered areas count as `Never`.
///
/// The trend is increasing above a mean of 2.5, stable above 1.5 and decreasing
/// otherwise; both bounds are exclusive.
pub fn usage_patterns(profession: Profession, responses: &ResponseSet) -> UsagePatterns {
    let critical_areas = profession.critical_areas().to_vec();
    let critical_total: u32 = critical_areas
        .iter()
        .map(|key| {
            let level = responses.get(key).unwrap_or(ResponseLevel::Never);
            u32::from(level.frequency())
        })
        .sum();
    let critical_score = critical_total as f32 / critical_areas.len() as f32;

    let mut patterns = UsagePatterns {
        critical_areas,
        critical_total,
        critical_score,
        overall_trend: UsageTrend::Decreasing,
    };
    patterns.overall_trend = if patterns.mean_exceeds_halves(5) {
        UsageTrend::Increasing
    } else if patterns.mean_exceeds_halves(3) {
        UsageTrend::Stable
    } else {
        UsageTrend::Decreasing
    };
    patterns
}

/// Follow-up actions for a weighted score and its usage patterns.
pub fn action_items(score: Score, patterns: &UsagePatterns) -> Vec<&'static str> {
    let mut items = Vec::new();

    if patterns.mean_exceeds_halves(5) {
        items.push("Focus on reducing AI dependency in critical areas");
    }
    if score.value() > 70 {
        items.push("Implement a daily digital detox routine");
    }
    if patterns.overall_trend == UsageTrend::Increasing {
        items.push("Set specific boundaries for AI tool usage");
    }

    items
}
