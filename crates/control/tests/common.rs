use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use scheduler_models::{
    CalendarEvent, DayOfWeek, GroceryStore, PreferredHours, UserPreferences,
};
use uuid::Uuid;

/// A fixed Monday 00:00 UTC used as the planning week.
pub fn monday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap()
}

pub fn window(start: (u32, u32), end: (u32, u32), days: Vec<DayOfWeek>) -> PreferredHours {
    PreferredHours {
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        days,
    }
}

/// One window per day covering 08:00 to 20:00.
pub fn all_week_windows() -> Vec<PreferredHours> {
    vec![window(
        (8, 0),
        (20, 0),
        vec![
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ],
    )]
}

pub fn sample_preferences(preferred_hours: Vec<PreferredHours>) -> UserPreferences {
    let now = Utc::now();
    UserPreferences {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        home_address: "12 Elm Street".to_string(),
        preferred_stores: Vec::new(),
        shopping_duration_minutes: 60,
        preferred_hours,
        created_at: now,
        updated_at: now,
    }
}

pub fn event(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: "Busy".to_string(),
        start_time: start,
        end_time: end,
        location: None,
    }
}

pub fn sample_stores() -> Vec<GroceryStore> {
    vec![
        GroceryStore {
            id: "1".to_string(),
            name: "Whole Foods Market".to_string(),
            address: "100 Organic St".to_string(),
            lat: 40.7128,
            lng: -74.0060,
            distance_km: None,
        },
        GroceryStore {
            id: "2".to_string(),
            name: "Trader Joe's".to_string(),
            address: "200 Affordable Ave".to_string(),
            lat: 40.7589,
            lng: -73.9851,
            distance_km: None,
        },
    ]
}
