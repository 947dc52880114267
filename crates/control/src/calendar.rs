use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use scheduler_models::{CalendarEvent, SchedulerError};

/// Source of a user's calendar events. The seam for a real calendar
/// integration; the service ships with a fixture binding.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn events_between(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, SchedulerError>;
}

/// Fixture calendar with a small set of events at fixed offsets from an
/// anchor time. Tests pin the anchor; the server anchors at startup.
pub struct StaticCalendar {
    anchor: DateTime<Utc>,
}

impl StaticCalendar {
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    pub fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    fn fixture_events(&self) -> Vec<CalendarEvent> {
        vec![
            CalendarEvent {
                id: "1".to_string(),
                title: "Work Meeting".to_string(),
                start_time: self.anchor + Duration::days(1) + Duration::hours(9),
                end_time: self.anchor + Duration::days(1) + Duration::hours(10),
                location: Some("123 Business St, Downtown".to_string()),
            },
            CalendarEvent {
                id: "2".to_string(),
                title: "Gym Session".to_string(),
                start_time: self.anchor + Duration::days(2) + Duration::hours(18),
                end_time: self.anchor + Duration::days(2) + Duration::hours(19),
                location: Some("456 Fitness Ave, Midtown".to_string()),
            },
            CalendarEvent {
                id: "3".to_string(),
                title: "Dinner with Friends".to_string(),
                start_time: self.anchor + Duration::days(3) + Duration::hours(19),
                end_time: self.anchor + Duration::days(3) + Duration::hours(21),
                location: Some("789 Restaurant Row, Uptown".to_string()),
            },
        ]
    }
}

impl Default for StaticCalendar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalendarProvider for StaticCalendar {
    async fn events_between(
        &self,
        _user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, SchedulerError> {
        Ok(self
            .fixture_events()
            .into_iter()
            .filter(|event| start <= event.start_time && event.start_time <= end)
            .collect())
    }
}
