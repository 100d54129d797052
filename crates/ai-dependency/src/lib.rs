//! Scoring engine and supporting catalog for the AI dependency self-assessment.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
