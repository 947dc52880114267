use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorShape {
    pub error_message: String,
    pub error_type: String,
}

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Preferences not found for user: {user_id}")]
    PreferencesNotFound { user_id: String },

    #[error("No schedule found for user: {user_id}")]
    ScheduleNotFound { user_id: String },

    #[error("Schedule not found: {schedule_id}")]
    UnknownScheduleId { schedule_id: Uuid },

    #[error("Suggestion not found in schedule: {suggestion_id}")]
    UnknownSuggestion { suggestion_id: Uuid },

    #[error("Invalid time window: {start} to {end}")]
    InvalidTimeWindow { start: String, end: String },

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Internal server error: {reason}")]
    InternalError { reason: String },

    #[error("Database error: {reason}")]
    DatabaseError { reason: String },

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },
}

impl SchedulerError {
    pub fn to_error_shape(&self) -> ErrorShape {
        ErrorShape {
            error_message: self.to_string(),
            error_type: self.error_type().to_string(),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            SchedulerError::PreferencesNotFound { .. } => "ResourceNotFoundException",
            SchedulerError::ScheduleNotFound { .. } => "ResourceNotFoundException",
            SchedulerError::UnknownScheduleId { .. } => "ResourceNotFoundException",
            SchedulerError::UnknownSuggestion { .. } => "ResourceNotFoundException",
            SchedulerError::InvalidTimeWindow { .. } => "InvalidParameterValueException",
            SchedulerError::InvalidRequest { .. } => "InvalidParameterValueException",
            SchedulerError::InternalError { .. } => "ServiceException",
            SchedulerError::DatabaseError { .. } => "ServiceException",
            SchedulerError::SqlxError(_) => "ServiceException",
            SchedulerError::ConfigError { .. } => "ServiceException",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            SchedulerError::PreferencesNotFound { .. } => 404,
            SchedulerError::ScheduleNotFound { .. } => 404,
            SchedulerError::UnknownScheduleId { .. } => 404,
            SchedulerError::UnknownSuggestion { .. } => 404,
            SchedulerError::InvalidTimeWindow { .. } => 400,
            SchedulerError::InvalidRequest { .. } => 400,
            SchedulerError::InternalError { .. } => 500,
            SchedulerError::DatabaseError { .. } => 500,
            SchedulerError::SqlxError(_) => 500,
            SchedulerError::ConfigError { .. } => 500,
        }
    }
}
