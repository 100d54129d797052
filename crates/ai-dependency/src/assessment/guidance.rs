use super::domain::Profession;
use super::scoring::{RiskLevel, Score};
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Everything a presentation layer needs to draw the dependency gauge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GaugeSpec {
    pub title: &'static str,
    pub value: Score,
    pub axis: (u8, u8),
    pub bar_color: &'static str,
    pub bands: Vec<GaugeBand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeBand {
    pub risk_level: RiskLevel,
    pub start: u8,
    pub end: u8,
    pub color: &'static str,
}

impl RiskLevel {
    pub const fn gauge_color(self) -> &'static str {
        match self {
            Self::Low => "lightgreen",
            Self::Moderate => "lightyellow",
            Self::High => "orange",
            Self::Critical => "red",
        }
    }

    /// Short tier name used by the weighted assessment.
    pub const fn dependency_label(self) -> &'static str {
        match self {
            Self::Low => "Low Dependency",
            Self::Moderate => "Moderate Dependency",
            Self::High => "High Dependency",
            Self::Critical => "Critical Dependency",
        }
    }

    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Low => "Your inner genius is fully in control!",
            Self::Moderate => "AI is a tool, but don't forget your mind!",
            Self::High => "Time to flex those mental muscles!",
            Self::Critical => "Heavy AI reliance! Try a digital detox.",
        }
    }

    pub const fn detox_plan(self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Keep up the great work and challenge yourself with new problems.",
                "Try a weekly 'no-AI day' to celebrate your independent thinking.",
            ],
            Self::Moderate => &[
                "Schedule time to work without AI assistance.",
                "Experiment with brain teasers and creative problem-solving games.",
            ],
            Self::High => &[
                "Implement a gradual AI detox, starting with one day a week.",
                "Join a hackathon or coding dojo for creativity.",
            ],
            Self::Critical => &[
                "Adopt a strict detox: one full day without AI, then increase.",
                "Engage in brainstorming sessions without digital tools.",
                "Try mindfulness exercises and journaling to track progress.",
            ],
        }
    }
}

impl GaugeSpec {
    pub fn for_score(score: Score) -> Self {
        let bands = RiskLevel::ordered()
            .into_iter()
            .map(|risk_level| {
                let (start, end) = risk_level.range();
                GaugeBand {
                    risk_level,
                    start,
                    end,
                    color: risk_level.gauge_color(),
                }
            })
            .collect();

        Self {
            title: "AI Dependency Score",
            value: score,
            axis: (Score::MIN.value(), Score::MAX.value()),
            bar_color: "darkblue",
            bands,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionHorizon {
    SixMonths,
    OneYear,
    TwoYears,
}

impl ProjectionHorizon {
    pub const fn ordered() -> [Self; 3] {
        [Self::SixMonths, Self::OneYear, Self::TwoYears]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::OneYear => "1 year",
            Self::TwoYears => "2 years",
        }
    }

    pub const fn months(self) -> u32 {
        match self {
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::TwoYears => 24,
        }
    }

    /// Assumed growth in dependency over the horizon, in percent of the current score.
    pub const fn growth_percent(self) -> u64 {
        match self {
            Self::SixMonths => 10,
            Self::OneYear => 25,
            Self::TwoYears => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyProjection {
    pub horizon: ProjectionHorizon,
    pub label: &'static str,
    pub target_date: NaiveDate,
    pub projected_score: Score,
    pub risk_level: RiskLevel,
}

/// Where the score heads if current habits continue. Growth is truncated and capped at 100.
pub fn project_dependency(score: Score, as_of: NaiveDate) -> Vec<DependencyProjection> {
    ProjectionHorizon::ordered()
        .into_iter()
        .map(|horizon| {
            let current = u64::from(score.value());
            let projected_score =
                Score::saturating(current * (100 + horizon.growth_percent()) / 100);
            let target_date = as_of
                .checked_add_months(Months::new(horizon.months()))
                .unwrap_or(NaiveDate::MAX);

            DependencyProjection {
                horizon,
                label: horizon.label(),
                target_date,
                projected_score,
                risk_level: projected_score.risk_level(),
            }
        })
        .collect()
}

/// Days covered by [`forecast_scores`].
pub const FORECAST_DAYS: usize = 30;

impl Profession {
    /// How strongly a profession amplifies a dependency trend, in percent.
    pub const fn trend_factor_percent(self) -> u32 {
        match self {
            Self::Developer => 120,
            Self::Writer => 110,
            Self::Student => 130,
            Self::Designer => 115,
            Self::Doctor => 90,
            Self::Lawyer => 95,
            Self::Marketer => 125,
            Self::ProjectManager => 110,
            Self::CustomerSupport => 120,
            Self::Entrepreneur => 115,
            Self::GeneralUser => 100,
        }
    }
}

/// Extends a score history by `days` points along its least-squares line, scaled by the
/// profession's trend factor. Needs at least three past scores.
pub fn forecast_scores(
    history: &[Score],
    profession: Profession,
    days: usize,
) -> Option<Vec<Score>> {
    if history.len() < 3 {
        return None;
    }

    let n = history.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = history.iter().map(|s| f64::from(s.value())).sum::<f64>() / n;
    let (covariance, variance) = history
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(cov, var), (x, score)| {
            let dx = x as f64 - x_mean;
            (cov + dx * (f64::from(score.value()) - y_mean), var + dx * dx)
        });
    let slope = covariance / variance;
    let intercept = y_mean - slope * x_mean;
    let factor = f64::from(profession.trend_factor_percent()) / 100.0;

    let forecast = (history.len()..history.len() + days)
        .map(|x| {
            let predicted = (intercept + slope * x as f64) * factor;
            Score::saturating(predicted.clamp(0.0, 100.0).round() as u64)
        })
        .collect();
    Some(forecast)
}

pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "Keep your brain active! Every challenge is an opportunity to grow.",
    "Technology is a tool; your mind is your superpower!",
    "Innovation comes from within; balance is key.",
    "Stay curious, stay creative. Your journey never ends!",
    "Let your inner light shine brighter than any digital glow!",
];

/// Picks a quote deterministically from `seed`.
pub fn motivational_quote(seed: u64) -> &'static str {
    MOTIVATIONAL_QUOTES[(seed % MOTIVATIONAL_QUOTES.len() as u64) as usize]
}
