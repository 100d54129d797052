use super::common::as_of;
use crate::assessment::domain::Profession;
use crate::assessment::guidance::{
    forecast_scores, motivational_quote, project_dependency, GaugeSpec, ProjectionHorizon,
    FORECAST_DAYS, MOTIVATIONAL_QUOTES,
};
use crate::assessment::scoring::{RiskLevel, Score};
use chrono::NaiveDate;

fn score(value: u8) -> Score {
    Score::new(value).expect("valid score")
}

#[test]
fn gauge_bands_line_up_with_risk_thresholds() {
    let gauge = GaugeSpec::for_score(score(64));

    assert_eq!(gauge.value, score(64));
    assert_eq!(gauge.axis, (0, 100));
    let edges: Vec<(u8, u8, &str)> = gauge
        .bands
        .iter()
        .map(|band| (band.start, band.end, band.color))
        .collect();
    assert_eq!(
        edges,
        vec![
            (0, 30, "lightgreen"),
            (30, 60, "lightyellow"),
            (60, 80, "orange"),
            (80, 100, "red"),
        ]
    );
}

#[test]
fn projections_grow_and_truncate() {
    let projections = project_dependency(score(33), as_of());
    let values: Vec<u8> = projections
        .iter()
        .map(|projection| projection.projected_score.value())
        .collect();
    // 36.3, 41.25, 49.5
    assert_eq!(values, vec![36, 41, 49]);
    assert_eq!(projections[0].horizon, ProjectionHorizon::SixMonths);
    assert_eq!(projections[1].risk_level, RiskLevel::Moderate);
}

#[test]
fn projections_truncate_half_points_down() {
    let values: Vec<u8> = project_dependency(score(35), as_of())
        .iter()
        .map(|projection| projection.projected_score.value())
        .collect();
    // 38.5, 43.75, 52.5
    assert_eq!(values, vec![38, 43, 52]);
}

#[test]
fn projections_cap_at_one_hundred() {
    let projections = project_dependency(score(90), as_of());
    let values: Vec<u8> = projections
        .iter()
        .map(|projection| projection.projected_score.value())
        .collect();
    assert_eq!(values, vec![99, 100, 100]);
    assert!(projections
        .iter()
        .all(|projection| projection.risk_level == RiskLevel::Critical));
}

#[test]
fn projection_dates_follow_calendar_months() {
    let end_of_august = NaiveDate::from_ymd_opt(2025, 8, 31).expect("valid date");
    let projections = project_dependency(score(10), end_of_august);
    let dates: Vec<NaiveDate> = projections
        .iter()
        .map(|projection| projection.target_date)
        .collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2026, 2, 28).expect("valid date"),
            NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date"),
            NaiveDate::from_ymd_opt(2027, 8, 31).expect("valid date"),
        ]
    );
}

#[test]
fn critical_plan_has_an_extra_step() {
    assert_eq!(RiskLevel::Low.detox_plan().len(), 2);
    assert_eq!(RiskLevel::High.detox_plan().len(), 2);
    assert_eq!(RiskLevel::Critical.detox_plan().len(), 3);
    assert!(RiskLevel::Moderate
        .detox_plan()
        .iter()
        .any(|step| step.contains("without AI")));
}

#[test]
fn weighted_tiers_have_labels_and_taglines() {
    assert_eq!(RiskLevel::Low.dependency_label(), "Low Dependency");
    assert_eq!(RiskLevel::Critical.dependency_label(), "Critical Dependency");
    assert_eq!(
        RiskLevel::High.tagline(),
        "Time to flex those mental muscles!"
    );
}

fn history(values: &[u8]) -> Vec<Score> {
    values.iter().map(|value| score(*value)).collect()
}

#[test]
fn forecast_needs_three_points() {
    assert!(forecast_scores(&history(&[40, 50]), Profession::Writer, FORECAST_DAYS).is_none());
    assert!(forecast_scores(&[], Profession::Writer, FORECAST_DAYS).is_none());
}

#[test]
fn forecast_extends_the_fitted_line_and_clamps() {
    let forecast = forecast_scores(&history(&[10, 20, 30]), Profession::GeneralUser, FORECAST_DAYS)
        .expect("enough history");

    assert_eq!(forecast.len(), FORECAST_DAYS);
    let head: Vec<u8> = forecast.iter().take(3).map(|s| s.value()).collect();
    assert_eq!(head, vec![40, 50, 60]);
    assert_eq!(forecast[6], score(100));
    assert_eq!(forecast[FORECAST_DAYS - 1], score(100));
}

#[test]
fn forecast_applies_profession_factor() {
    let developer = forecast_scores(&history(&[10, 20, 30]), Profession::Developer, 1)
        .expect("enough history");
    assert_eq!(developer, vec![score(48)]);

    let doctor = forecast_scores(&history(&[10, 20, 30]), Profession::Doctor, 1)
        .expect("enough history");
    assert_eq!(doctor, vec![score(36)]);
}

#[test]
fn falling_forecast_bottoms_out_at_zero() {
    let forecast = forecast_scores(&history(&[30, 20, 10]), Profession::Student, 3)
        .expect("enough history");
    assert_eq!(forecast, vec![score(0), score(0), score(0)]);
}

#[test]
fn quote_selection_wraps_around() {
    assert_eq!(motivational_quote(0), MOTIVATIONAL_QUOTES[0]);
    assert_eq!(motivational_quote(7), MOTIVATIONAL_QUOTES[2]);
    assert_eq!(motivational_quote(100), MOTIVATIONAL_QUOTES[0]);
}
