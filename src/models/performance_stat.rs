use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded mark in a performance series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStat {
    pub date: NaiveDate,
    pub event_name: String,
    /// Time in seconds or distance in meters
    pub value: f64,
    /// Formatted mark, e.g. "10.82s" or "45.2m"
    pub display_value: String,
    pub meet_name: Option<String>,
}

/// Best mark in a timed series (lowest value wins)
pub fn season_best(series: &[PerformanceStat]) -> Option<&PerformanceStat> {
    series
        .iter()
        .min_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal))
}
