use super::domain::{AssessmentError, ResponseSet};
use super::questionnaire::{CONTENT_CREATION, DAILY_USAGE, DECISION_MAKING};
use serde::{Deserialize, Serialize};

/// One of the three canonical usage areas compared by [`analyze_breakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyArea {
    DailyUsage,
    DecisionMaking,
    ContentCreation,
}

impl DependencyArea {
    /// Comparison order; earlier areas win ties.
    pub const fn ordered() -> [Self; 3] {
        [Self::DailyUsage, Self::DecisionMaking, Self::ContentCreation]
    }

    pub const fn question_id(self) -> &'static str {
        match self {
            Self::DailyUsage => DAILY_USAGE,
            Self::DecisionMaking => DECISION_MAKING,
            Self::ContentCreation => CONTENT_CREATION,
        }
    }

    /// Key used in serialized breakdowns.
    pub const fn key(self) -> &'static str {
        match self {
            Self::DailyUsage => "dailyUsage",
            Self::DecisionMaking => "decisionMaking",
            Self::ContentCreation => "contentCreation",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DailyUsage => "Daily usage",
            Self::DecisionMaking => "Decision making",
            Self::ContentCreation => "Content creation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub daily_usage: u8,
    pub decision_making: u8,
    pub content_creation: u8,
    pub highest_dependency: DependencyArea,
    pub lowest_dependency: DependencyArea,
}

impl Breakdown {
    pub fn value(&self, area: DependencyArea) -> u8 {
        match area {
            DependencyArea::DailyUsage => self.daily_usage,
            DependencyArea::DecisionMaking => self.decision_making,
            DependencyArea::ContentCreation => self.content_creation,
        }
    }
}

/// Per-area percentages plus the areas with the highest and lowest dependency.
///
/// All three canonical questions must be answered; other entries are ignored. On equal
/// values the area earlier in [`DependencyArea::ordered`] is kept for both extremes.
pub fn analyze_breakdown(responses: &ResponseSet) -> Result<Breakdown, AssessmentError> {
    let percent = |area: DependencyArea| {
        responses
            .get(area.question_id())
            .map(|level| level.percent())
            .ok_or_else(|| AssessmentError::missing(area.question_id()))
    };

    let daily_usage = percent(DependencyArea::DailyUsage)?;
    let decision_making = percent(DependencyArea::DecisionMaking)?;
    let content_creation = percent(DependencyArea::ContentCreation)?;

    let values = [
        (DependencyArea::DailyUsage, daily_usage),
        (DependencyArea::DecisionMaking, decision_making),
        (DependencyArea::ContentCreation, content_creation),
    ];

    let highest = values
        .into_iter()
        .reduce(|kept, next| if next.1 > kept.1 { next } else { kept })
        .map(|(area, _)| area)
        .unwrap_or(DependencyArea::DailyUsage);
    let lowest = values
        .into_iter()
        .reduce(|kept, next| if next.1 < kept.1 { next } else { kept })
        .map(|(area, _)| area)
        .unwrap_or(DependencyArea::DailyUsage);

    Ok(Breakdown {
        daily_usage,
        decision_making,
        content_creation,
        highest_dependency: highest,
        lowest_dependency: lowest,
    })
}
