use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parses a `question=Label` command-line answer.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=LABEL, got '{raw}'"))?;
    let question = question.trim();
    let label = label.trim();
    if question.is_empty() || label.is_empty() {
        return Err(format!("expected QUESTION=LABEL, got '{raw}'"));
    }
    Ok((question.to_string(), label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_splits_on_first_equals() {
        assert_eq!(
            parse_answer(" daily_usage = Often "),
            Ok(("daily_usage".to_string(), "Often".to_string()))
        );
        assert!(parse_answer("daily_usage=").is_err());
        assert!(parse_answer("Often").is_err());
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date("2025-02-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"))
        );
        let err = parse_date("02/01/2025").expect_err("wrong format");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
