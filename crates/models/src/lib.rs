pub mod config;
pub mod error;
pub mod grocery_list;
pub mod preferences;
pub mod schedule;
pub mod store;

pub use config::*;
pub use error::*;
pub use grocery_list::*;
pub use preferences::*;
pub use schedule::*;
pub use store::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use serde_json;

    #[test]
    fn test_preferences_serde_roundtrip() {
        let preferences = UserPreferences {
            id: uuid::Uuid::new_v4(),
            user_id: "user-1".to_string(),
            home_address: "12 Elm Street".to_string(),
            preferred_stores: vec!["1".to_string(), "3".to_string()],
            shopping_duration_minutes: 45,
            preferred_hours: vec![PreferredHours {
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
                days: vec![DayOfWeek::Saturday, DayOfWeek::Sunday],
            }],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&preferences).unwrap();
        let deserialized: UserPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(preferences.user_id, deserialized.user_id);
        assert_eq!(preferences.preferred_hours, deserialized.preferred_hours);
        assert_eq!(
            preferences.shopping_duration_minutes,
            deserialized.shopping_duration_minutes
        );
    }

    #[test]
    fn test_preferred_hours_wire_format_is_hh_mm() {
        let window = PreferredHours {
            start_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            days: vec![DayOfWeek::Monday],
        };

        let json = serde_json::to_value(&window).unwrap();
        assert_eq!(json["start_time"], "09:05");
        assert_eq!(json["end_time"], "17:30");
        assert_eq!(json["days"][0], "monday");
    }

    #[test]
    fn test_put_preferences_request_deny_unknown_fields() {
        let json = r#"{
            "user_id": "user-1",
            "home_address": "12 Elm Street",
            "UnknownField": "should_fail"
        }"#;

        let result: Result<PutPreferencesRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn test_put_preferences_request_defaults() {
        let json = r#"{"user_id": "user-1", "home_address": "12 Elm Street"}"#;
        let request: PutPreferencesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.shopping_duration_minutes, 60);
        assert!(request.preferred_stores.is_empty());
        assert!(request.preferred_hours.is_empty());
    }

    #[test]
    fn test_preferred_hours_validation() {
        let inverted = PreferredHours {
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            days: vec![DayOfWeek::Friday],
        };
        let err = inverted.validate().unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.error_type(), "InvalidParameterValueException");
    }

    #[test]
    fn test_day_of_week_from_str() {
        assert_eq!("monday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Monday);
        assert_eq!("sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_schedule_status_from_str() {
        assert_eq!(
            "pending".parse::<ScheduleStatus>().unwrap(),
            ScheduleStatus::Pending
        );
        assert_eq!(
            "approved".parse::<ScheduleStatus>().unwrap(),
            ScheduleStatus::Approved
        );
        assert!("done".parse::<ScheduleStatus>().is_err());
    }

    #[test]
    fn test_grocery_list_request_defaults() {
        let json = r#"{"user_id": "user-1", "items": [{"name": "Milk"}]}"#;
        let request: PutGroceryListRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].name, "Milk");
        assert!(!request.items[0].completed);
        assert!(request.items[0].quantity.is_none());
    }

    #[test]
    fn test_error_shape_serde() {
        let error = SchedulerError::PreferencesNotFound {
            user_id: "user-1".to_string(),
        };
        let shape = error.to_error_shape();

        let json = serde_json::to_string(&shape).unwrap();
        let deserialized: ErrorShape = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.error_type, "ResourceNotFoundException");
        assert!(deserialized.error_message.contains("user-1"));
    }

    #[test]
    fn test_config_env_overrides() {
        let mut config = Config::default();
        std::env::set_var("CORS_ORIGINS", "https://a.example, https://b.example");
        config.apply_env_overrides();
        std::env::remove_var("CORS_ORIGINS");

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
