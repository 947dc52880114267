mod common;

use chrono::{Datelike, Duration, TimeZone, Utc, Weekday};
use common::*;
use scheduler_control::planner::{week_start_for, Planner};
use scheduler_models::{DayOfWeek, SchedulingConfig};

fn planner() -> Planner {
    Planner::new(SchedulingConfig::default())
}

#[test]
fn week_start_is_monday_midnight() {
    let thursday = Utc.with_ymd_and_hms(2024, 3, 7, 15, 30, 45).unwrap();
    assert_eq!(week_start_for(thursday), monday());

    // A Monday maps onto its own midnight.
    let monday_noon = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
    assert_eq!(week_start_for(monday_noon), monday());

    let sunday = Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap();
    assert_eq!(week_start_for(sunday), monday());
}

#[test]
fn no_preferred_hours_means_empty_plan() {
    let preferences = sample_preferences(Vec::new());
    let suggestions = planner().generate_suggestions(&preferences, &[], &sample_stores(), monday());
    assert!(suggestions.is_empty());
}

#[test]
fn suggestions_respect_preferred_days() {
    let preferences =
        sample_preferences(vec![window((9, 0), (12, 0), vec![DayOfWeek::Wednesday])]);
    let suggestions = planner().generate_suggestions(&preferences, &[], &sample_stores(), monday());

    assert!(!suggestions.is_empty());
    for suggestion in &suggestions {
        assert_eq!(suggestion.suggested_time.weekday(), Weekday::Wed);
        assert!(suggestion.reason.contains("Wednesday"));
    }
}

#[test]
fn conflicting_slots_are_skipped() {
    let preferences =
        sample_preferences(vec![window((9, 0), (12, 0), vec![DayOfWeek::Wednesday])]);
    let wednesday = monday() + Duration::days(2);
    let busy = event(
        "1",
        wednesday + Duration::hours(9),
        wednesday + Duration::hours(12),
    );

    let suggestions =
        planner().generate_suggestions(&preferences, &[busy], &sample_stores(), monday());
    assert!(suggestions.is_empty());
}

#[test]
fn event_touching_slot_boundary_blocks_it() {
    let preferences =
        sample_preferences(vec![window((10, 0), (12, 0), vec![DayOfWeek::Wednesday])]);
    let wednesday = monday() + Duration::days(2);
    // Ends exactly when the first slot starts; the slot is still blocked.
    let busy = event(
        "1",
        wednesday + Duration::hours(9),
        wednesday + Duration::hours(10),
    );

    let suggestions =
        planner().generate_suggestions(&preferences, &[busy], &sample_stores(), monday());

    assert!(!suggestions.is_empty());
    for suggestion in &suggestions {
        assert_eq!(suggestion.suggested_time, wednesday + Duration::hours(11));
    }
}

#[test]
fn window_shorter_than_duration_yields_nothing() {
    let preferences =
        sample_preferences(vec![window((9, 0), (9, 30), vec![DayOfWeek::Wednesday])]);
    let suggestions = planner().generate_suggestions(&preferences, &[], &sample_stores(), monday());
    assert!(suggestions.is_empty());
}

#[test]
fn slot_must_fit_entirely_inside_window() {
    // 09:00-10:30 window with a 60 minute duration and hourly steps: only the
    // 09:00 slot fits; 10:00 would spill past the window end.
    let preferences =
        sample_preferences(vec![window((9, 0), (10, 30), vec![DayOfWeek::Tuesday])]);
    let tuesday = monday() + Duration::days(1);

    let suggestions = planner().generate_suggestions(&preferences, &[], &sample_stores(), monday());

    assert_eq!(suggestions.len(), 2); // one slot, both nearby stores
    for suggestion in &suggestions {
        assert_eq!(suggestion.suggested_time, tuesday + Duration::hours(9));
    }
}

#[test]
fn weekend_slots_rank_first_and_cap_applies() {
    let preferences = sample_preferences(vec![window(
        (9, 0),
        (13, 0),
        vec![DayOfWeek::Monday, DayOfWeek::Saturday],
    )]);

    let suggestions = planner().generate_suggestions(&preferences, &[], &sample_stores(), monday());

    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0].confidence_score, 0.8);
    assert_eq!(suggestions[0].suggested_time.weekday(), Weekday::Sat);
    // Confidence never increases as we walk down the ranking.
    for pair in suggestions.windows(2) {
        assert!(pair[0].confidence_score >= pair[1].confidence_score);
    }
}

#[test]
fn suggestions_carry_travel_and_duration() {
    let preferences =
        sample_preferences(vec![window((9, 0), (11, 0), vec![DayOfWeek::Friday])]);
    let suggestions = planner().generate_suggestions(&preferences, &[], &sample_stores(), monday());

    assert!(!suggestions.is_empty());
    for suggestion in &suggestions {
        assert_eq!(suggestion.duration_minutes, 60);
        assert_eq!(suggestion.travel_time_minutes, 15);
        assert_eq!(suggestion.confidence_score, 0.6);
    }
}
