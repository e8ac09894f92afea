//! Goal data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Nullable;

/// All goals of a user, `users/{user}/goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub data: Vec<GoalData>,
    pub total: i64,
    pub total_pages: i64,
}

/// A single goal, `users/{user}/goals/{goal}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub data: GoalData,
    /// When the server last computed the goal's progress
    pub cached_at: DateTime<Utc>,
}

/// A coding goal and its progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalData {
    pub average_status: String,
    /// Progress per period, oldest first
    pub chart_data: Vec<GoalChartData>,
    pub created_at: DateTime<Utc>,
    pub cumulative_status: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub custom_title: Nullable<String>,
    /// Period length: "day" or "week"
    pub delta: String,
    #[serde(default)]
    pub editors: Vec<String>,
    pub id: String,
    pub ignore_days: Vec<String>,
    pub ignore_zero_days: bool,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub improve_by_percent: Nullable<f64>,
    pub is_current_user_owner: bool,
    pub is_enabled: bool,
    pub is_inverse: bool,
    pub is_snoozed: bool,
    pub is_tweeting: bool,
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub modified_at: Nullable<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub owner: Nullable<GoalOwner>,
    pub projects: Vec<String>,
    pub range_text: String,
    /// Target coding time per period
    pub seconds: i64,
    #[serde(default)]
    pub shared_with: Vec<GoalSharedWith>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub snooze_until: Nullable<DateTime<Utc>>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status_percent_calculated: Nullable<i64>,
    pub subscribers: Vec<GoalSubscriber>,
    pub title: String,
    #[serde(rename = "type")]
    pub goal_type: String,
}

/// Progress of a goal over one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalChartData {
    pub actual_seconds: f64,
    pub actual_seconds_text: String,
    pub goal_seconds: i64,
    pub goal_seconds_text: String,
    pub range: GoalRange,
    pub range_status: String,
    pub range_status_reason: String,
    pub range_status_reason_short: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRange {
    pub date: String,
    pub end: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub text: String,
    pub timezone: String,
}

/// A user receiving goal progress emails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSubscriber {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub display_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<String>,
    pub email_frequency: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub full_name: Nullable<String>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub username: Nullable<String>,
}

/// Owner of a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalOwner {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub display_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub full_name: Nullable<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub photo: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub username: Nullable<String>,
}

/// A user a goal is shared with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSharedWith {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub display_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<String>,
    pub id: String,
    /// Invitation state, e.g. "accepted"
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub user_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub username: Nullable<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_deserialize() {
        let json = include_str!("../../tests/fixtures/goals.json");

        let goals: Goals = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(goals.total, 1);
        assert_eq!(goals.total_pages, 1);

        let goal = &goals.data[0];
        assert_eq!(goal.title, "Code 1 hr per day");
        assert_eq!(goal.goal_type, "coding");
        assert!(goal.custom_title.is_null());
        assert!(goal.improve_by_percent.is_null());
        assert!(goal.snooze_until.is_null());
        assert!(goal.editors.is_empty());
        assert_eq!(goal.status_percent_calculated, Nullable::Value(100));

        let owner = goal.owner.value().expect("owner present");
        assert_eq!(owner.display_name.as_deref(), Some("@xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"));
        assert!(owner.email.is_null());
        assert!(owner.username.is_null());
    }

    #[test]
    fn test_goal_deserialize() {
        let json = include_str!("../../tests/fixtures/goal.json");

        let goal: Goal = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(goal.data.custom_title.as_deref(), Some("Daily coding"));
        assert_eq!(goal.data.improve_by_percent, Nullable::Value(5.0));
        assert!(goal.data.snooze_until.is_absent());
        assert_eq!(goal.data.shared_with.len(), 1);
        assert_eq!(goal.data.shared_with[0].status.as_deref(), Some("accepted"));
        assert!(goal.data.shared_with[0].email.is_null());
    }

    #[test]
    fn test_optional_lists_default_to_empty() {
        let json = include_str!("../../tests/fixtures/goal.json");
        let mut value: serde_json::Value = serde_json::from_str(json).expect("valid json");
        let data = value["data"].as_object_mut().expect("object");
        data.remove("editors");
        data.remove("shared_with");
        data.remove("owner");

        let goal: Goal = serde_json::from_value(value).expect("Should deserialize");
        assert!(goal.data.editors.is_empty());
        assert!(goal.data.shared_with.is_empty());
        assert!(goal.data.owner.is_absent());
    }
}
