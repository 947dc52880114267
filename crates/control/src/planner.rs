use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};
use scheduler_models::{
    CalendarEvent, DayOfWeek, GroceryStore, ScheduleSuggestion, SchedulingConfig, UserPreferences,
};
use uuid::Uuid;

/// Monday 00:00 UTC of the week containing `now`. Week keys must be
/// deterministic across hosts, so everything is anchored in UTC.
pub fn week_start_for(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_monday = now.weekday().num_days_from_monday() as i64;
    let monday = now.date_naive() - Duration::days(days_since_monday);
    Utc.from_utc_datetime(&monday.and_time(NaiveTime::MIN))
}

/// Generates shopping-slot suggestions for one week. Pure over its inputs;
/// the control plane supplies events and stores.
pub struct Planner {
    config: SchedulingConfig,
}

impl Planner {
    pub fn new(config: SchedulingConfig) -> Self {
        Self { config }
    }

    pub fn generate_suggestions(
        &self,
        preferences: &UserPreferences,
        events: &[CalendarEvent],
        stores: &[GroceryStore],
        week_start: DateTime<Utc>,
    ) -> Vec<ScheduleSuggestion> {
        let mut suggestions = Vec::new();
        let duration = Duration::minutes(i64::from(preferences.shopping_duration_minutes));
        let step = Duration::minutes(i64::from(self.config.slot_step_minutes));

        for day_offset in 0..7 {
            let date = (week_start + Duration::days(day_offset)).date_naive();
            let day = DayOfWeek::from_weekday(date.weekday());

            for window in preferences
                .preferred_hours
                .iter()
                .filter(|window| window.days.contains(&day))
            {
                let window_end = Utc.from_utc_datetime(&date.and_time(window.end_time));
                let mut slot_start = Utc.from_utc_datetime(&date.and_time(window.start_time));

                while slot_start + duration <= window_end {
                    let slot_end = slot_start + duration;

                    if !events
                        .iter()
                        .any(|event| overlaps(event, slot_start, slot_end))
                    {
                        let confidence = if day.is_weekend() {
                            self.config.weekend_confidence
                        } else {
                            self.config.weekday_confidence
                        };

                        for store in stores {
                            suggestions.push(ScheduleSuggestion {
                                id: Uuid::new_v4(),
                                suggested_time: slot_start,
                                duration_minutes: preferences.shopping_duration_minutes,
                                store: store.clone(),
                                reason: format!(
                                    "Free time on {} during your preferred hours",
                                    day.display_name()
                                ),
                                travel_time_minutes: self.config.travel_time_minutes,
                                confidence_score: confidence,
                            });
                        }
                    }

                    slot_start = slot_start + step;
                }
            }
        }

        // Stable sort keeps equal-confidence slots in chronological order.
        suggestions.sort_by(|a, b| b.confidence_score.total_cmp(&a.confidence_score));
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }
}

// An event touching the slot boundary still blocks the slot.
fn overlaps(event: &CalendarEvent, slot_start: DateTime<Utc>, slot_end: DateTime<Utc>) -> bool {
    event.start_time <= slot_end && event.end_time >= slot_start
}
