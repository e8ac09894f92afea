//! All-time coding total since account creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope for `users/{user}/all_time_since_today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeSinceToday {
    pub data: AllTimeSinceTodayData,
}

/// Total coding time over the whole account history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeSinceTodayData {
    /// Total hours as a decimal string, e.g. "12.80"
    pub decimal: String,
    /// Total time as "hh:mm"
    pub digital: String,
    /// False while the total is still being computed
    pub is_up_to_date: bool,
    /// Progress of the computation, 0 to 100
    pub percent_calculated: i64,
    pub range: AllTimeSinceTodayRange,
    /// Human readable total, e.g. "15 hrs 30 mins"
    pub text: String,
    /// Keystroke timeout in minutes used for the calculation
    pub timeout: i64,
    pub total_seconds: f64,
}

/// Time range covered by the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeSinceTodayRange {
    pub end: DateTime<Utc>,
    pub end_date: String,
    pub end_text: String,
    pub start: DateTime<Utc>,
    pub start_date: String,
    pub start_text: String,
    pub timezone: String,
}
