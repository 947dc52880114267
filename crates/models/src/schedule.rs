use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::GroceryStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSuggestion {
    pub id: Uuid,
    pub suggested_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub store: GroceryStore,
    pub reason: String,
    pub travel_time_minutes: u32,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Pending,
    Approved,
    Scheduled,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Approved => "approved",
            ScheduleStatus::Scheduled => "scheduled",
        }
    }
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScheduleStatus::Pending),
            "approved" => Ok(ScheduleStatus::Approved),
            "scheduled" => Ok(ScheduleStatus::Scheduled),
            _ => Err(format!("Invalid schedule status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub id: Uuid,
    pub user_id: String,
    pub week_start: DateTime<Utc>,
    pub suggestions: Vec<ScheduleSuggestion>,
    pub approved_suggestion_id: Option<Uuid>,
    pub status: ScheduleStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleResponse {
    pub message: String,
    pub suggestions_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub message: String,
}
