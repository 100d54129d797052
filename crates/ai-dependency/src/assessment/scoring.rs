use super::domain::{AssessmentError, ResponseSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Dependency score on the 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps anything above 100 down to 100.
    pub const fn saturating(value: u64) -> Self {
        if value > 100 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn risk_level(self) -> RiskLevel {
        classify_risk(i64::from(self.0))
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score {value} exceeds 100"))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mean of the percentages of every answer present, rounded half-up.
///
/// Only the supplied entries count towards the mean; unanswered questions are not
/// treated as zero.
pub fn compute_score(responses: &ResponseSet) -> Result<Score, AssessmentError> {
    if responses.is_empty() {
        return Err(AssessmentError::EmptyInput);
    }

    let count = responses.len() as u64;
    let total: u64 = responses
        .iter()
        .map(|(_, level)| u64::from(level.percent()))
        .sum();

    let score = Score::saturating(rounded_mean(total, count));

    debug!(answers = count, total, score = score.value(), "computed dependency score");
    Ok(score)
}

/// `round(total / count)` with .5 rounding up, kept in integers. `count` must be non-zero.
pub(crate) fn rounded_mean(total: u64, count: u64) -> u64 {
    (2 * total + count) / (2 * count)
}

/// Risk band for a score. Thresholds are left-inclusive, so 30, 60 and 80 open the
/// Moderate, High and Critical bands. Values outside 0..=100 fall into the end bands.
pub fn classify_risk(score: i64) -> RiskLevel {
    if score < 30 {
        RiskLevel::Low
    } else if score < 60 {
        RiskLevel::Moderate
    } else if score < 80 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::High, Self::Critical]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::Critical => "Critical Risk",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Low => "Low Risk: You maintain a healthy balance with AI tools",
            Self::Moderate => "Moderate Risk: Consider setting boundaries for AI usage",
            Self::High => "High Risk: Significant dependency on AI tools detected",
            Self::Critical => "Critical Risk: Immediate attention needed to reduce AI dependency",
        }
    }

    /// Half-open score range `[start, end)` covered by the band; Critical ends at 100 inclusive.
    pub const fn range(self) -> (u8, u8) {
        match self {
            Self::Low => (0, 30),
            Self::Moderate => (30, 60),
            Self::High => (60, 80),
            Self::Critical => (80, 100),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
