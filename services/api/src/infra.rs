use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pathway_ai::error::AppError;
use pathway_ai::CandidateProfile;
use std::path::Path;
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

pub(crate) fn read_profile(path: &Path) -> Result<CandidateProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let profile = serde_json::from_str(&raw)?;
    Ok(profile)
}
