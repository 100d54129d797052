use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessment::domain::{ResponseLevel, ResponseSet};

pub(super) fn responses(pairs: &[(&str, ResponseLevel)]) -> ResponseSet {
    pairs.iter().map(|(id, level)| (*id, *level)).collect()
}

pub(super) fn canonical(
    daily_usage: ResponseLevel,
    decision_making: ResponseLevel,
    content_creation: ResponseLevel,
) -> ResponseSet {
    responses(&[
        ("daily_usage", daily_usage),
        ("decision_making", decision_making),
        ("content_creation", content_creation),
    ])
}

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
