use std::sync::Arc;

use chrono::{Duration, Utc};
use scheduler_models::{
    AckResponse, Config, GenerateScheduleResponse, GroceryItem, GroceryList, GroceryStore,
    PutGroceryListRequest, PutPreferencesRequest, ScheduleStatus, SchedulerError, UserPreferences,
    WeeklySchedule,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::calendar::CalendarProvider;
use crate::catalog::StoreCatalog;
use crate::planner::{week_start_for, Planner};

pub struct ControlPlane {
    pool: SqlitePool,
    planner: Planner,
    calendar: Arc<dyn CalendarProvider>,
    catalog: StoreCatalog,
}

impl ControlPlane {
    pub async fn new(
        pool: SqlitePool,
        calendar: Arc<dyn CalendarProvider>,
        config: Config,
    ) -> Result<Self, SchedulerError> {
        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| SchedulerError::DatabaseError {
                reason: e.to_string(),
            })?;

        Ok(Self {
            pool,
            planner: Planner::new(config.scheduling),
            calendar,
            catalog: StoreCatalog::with_builtin_stores(),
        })
    }

    #[instrument(skip(self))]
    pub async fn put_preferences(
        &self,
        request: PutPreferencesRequest,
    ) -> Result<UserPreferences, SchedulerError> {
        for window in &request.preferred_hours {
            window.validate()?;
        }

        let now = Utc::now();
        let existing = sqlx::query("SELECT id, created_at FROM preferences WHERE user_id = ?")
            .bind(&request.user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?;

        let preferences = match existing {
            Some(row) => {
                // Record identity survives an update; only the content changes.
                let preferences = UserPreferences {
                    id: row.try_get("id")?,
                    user_id: request.user_id,
                    home_address: request.home_address,
                    preferred_stores: request.preferred_stores,
                    shopping_duration_minutes: request.shopping_duration_minutes,
                    preferred_hours: request.preferred_hours,
                    created_at: row.try_get("created_at")?,
                    updated_at: now,
                };

                sqlx::query(
                    r#"
                    UPDATE preferences SET
                        home_address = ?, preferred_stores = ?, shopping_duration_minutes = ?,
                        preferred_hours = ?, updated_at = ?
                    WHERE user_id = ?
                    "#,
                )
                .bind(&preferences.home_address)
                .bind(to_json(&preferences.preferred_stores)?)
                .bind(preferences.shopping_duration_minutes as i64)
                .bind(to_json(&preferences.preferred_hours)?)
                .bind(&preferences.updated_at)
                .bind(&preferences.user_id)
                .execute(&self.pool)
                .await
                .map_err(SchedulerError::SqlxError)?;

                preferences
            }
            None => {
                let preferences = UserPreferences {
                    id: Uuid::new_v4(),
                    user_id: request.user_id,
                    home_address: request.home_address,
                    preferred_stores: request.preferred_stores,
                    shopping_duration_minutes: request.shopping_duration_minutes,
                    preferred_hours: request.preferred_hours,
                    created_at: now,
                    updated_at: now,
                };

                sqlx::query(
                    r#"
                    INSERT INTO preferences (
                        id, user_id, home_address, preferred_stores,
                        shopping_duration_minutes, preferred_hours, created_at, updated_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(preferences.id)
                .bind(&preferences.user_id)
                .bind(&preferences.home_address)
                .bind(to_json(&preferences.preferred_stores)?)
                .bind(preferences.shopping_duration_minutes as i64)
                .bind(to_json(&preferences.preferred_hours)?)
                .bind(&preferences.created_at)
                .bind(&preferences.updated_at)
                .execute(&self.pool)
                .await
                .map_err(SchedulerError::SqlxError)?;

                preferences
            }
        };

        info!("Stored preferences for user: {}", preferences.user_id);
        Ok(preferences)
    }

    #[instrument(skip(self))]
    pub async fn get_preferences(&self, user_id: &str) -> Result<UserPreferences, SchedulerError> {
        let row = sqlx::query("SELECT * FROM preferences WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?
            .ok_or_else(|| SchedulerError::PreferencesNotFound {
                user_id: user_id.to_string(),
            })?;

        self.row_to_preferences(&row)
    }

    #[instrument(skip(self))]
    pub async fn put_grocery_list(
        &self,
        request: PutGroceryListRequest,
    ) -> Result<GroceryList, SchedulerError> {
        let now = Utc::now();
        let items: Vec<GroceryItem> = request
            .items
            .into_iter()
            .map(|item| GroceryItem {
                id: Uuid::new_v4(),
                name: item.name,
                quantity: item.quantity,
                category: item.category,
                completed: item.completed,
            })
            .collect();

        let existing = sqlx::query("SELECT id, created_at FROM grocery_lists WHERE user_id = ?")
            .bind(&request.user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?;

        let list = match existing {
            Some(row) => {
                let list = GroceryList {
                    id: row.try_get("id")?,
                    user_id: request.user_id,
                    items,
                    created_at: row.try_get("created_at")?,
                    updated_at: now,
                };

                sqlx::query(
                    "UPDATE grocery_lists SET items = ?, updated_at = ? WHERE user_id = ?",
                )
                .bind(to_json(&list.items)?)
                .bind(&list.updated_at)
                .bind(&list.user_id)
                .execute(&self.pool)
                .await
                .map_err(SchedulerError::SqlxError)?;

                list
            }
            None => {
                let list = GroceryList {
                    id: Uuid::new_v4(),
                    user_id: request.user_id,
                    items,
                    created_at: now,
                    updated_at: now,
                };

                sqlx::query(
                    r#"
                    INSERT INTO grocery_lists (id, user_id, items, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(list.id)
                .bind(&list.user_id)
                .bind(to_json(&list.items)?)
                .bind(&list.created_at)
                .bind(&list.updated_at)
                .execute(&self.pool)
                .await
                .map_err(SchedulerError::SqlxError)?;

                list
            }
        };

        info!(
            "Stored grocery list with {} items for user: {}",
            list.items.len(),
            list.user_id
        );
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn get_grocery_list(&self, user_id: &str) -> Result<GroceryList, SchedulerError> {
        let row = sqlx::query("SELECT * FROM grocery_lists WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?;

        match row {
            Some(row) => self.row_to_grocery_list(&row),
            // An absent list reads as empty rather than as an error.
            None => {
                let now = Utc::now();
                Ok(GroceryList {
                    id: Uuid::new_v4(),
                    user_id: user_id.to_string(),
                    items: Vec::new(),
                    created_at: now,
                    updated_at: now,
                })
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn generate_schedule(
        &self,
        user_id: &str,
    ) -> Result<GenerateScheduleResponse, SchedulerError> {
        let preferences = self.get_preferences(user_id).await?;

        let now = Utc::now();
        let week_start = week_start_for(now);
        let week_end = week_start + Duration::days(7);

        let events = self
            .calendar
            .events_between(user_id, week_start, week_end)
            .await?;
        let stores = self.catalog.nearby(&preferences.home_address);
        let suggestions =
            self.planner
                .generate_suggestions(&preferences, &events, &stores, week_start);

        let schedule = WeeklySchedule {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            week_start,
            suggestions,
            approved_suggestion_id: None,
            status: ScheduleStatus::Pending,
            created_at: now,
        };
        self.replace_weekly_schedule(&schedule).await?;

        info!(
            "Generated {} suggestions for user: {}",
            schedule.suggestions.len(),
            user_id
        );
        Ok(GenerateScheduleResponse {
            message: "Schedule generated successfully".to_string(),
            suggestions_count: schedule.suggestions.len(),
        })
    }

    async fn replace_weekly_schedule(
        &self,
        schedule: &WeeklySchedule,
    ) -> Result<(), SchedulerError> {
        // Regeneration replaces the week's plan wholesale.
        sqlx::query("DELETE FROM weekly_schedules WHERE user_id = ? AND week_start = ?")
            .bind(&schedule.user_id)
            .bind(schedule.week_start)
            .execute(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?;

        sqlx::query(
            r#"
            INSERT INTO weekly_schedules (
                id, user_id, week_start, suggestions, approved_suggestion_id, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(schedule.id)
        .bind(&schedule.user_id)
        .bind(schedule.week_start)
        .bind(to_json(&schedule.suggestions)?)
        .bind(schedule.approved_suggestion_id)
        .bind(schedule.status.as_str())
        .bind(schedule.created_at)
        .execute(&self.pool)
        .await
        .map_err(SchedulerError::SqlxError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_schedule(&self, user_id: &str) -> Result<WeeklySchedule, SchedulerError> {
        let week_start = week_start_for(Utc::now());

        let row =
            sqlx::query("SELECT * FROM weekly_schedules WHERE user_id = ? AND week_start = ?")
                .bind(user_id)
                .bind(week_start)
                .fetch_optional(&self.pool)
                .await
                .map_err(SchedulerError::SqlxError)?
                .ok_or_else(|| SchedulerError::ScheduleNotFound {
                    user_id: user_id.to_string(),
                })?;

        self.row_to_schedule(&row)
    }

    #[instrument(skip(self))]
    pub async fn approve_suggestion(
        &self,
        schedule_id: Uuid,
        suggestion_id: Uuid,
    ) -> Result<AckResponse, SchedulerError> {
        let row = sqlx::query("SELECT * FROM weekly_schedules WHERE id = ?")
            .bind(schedule_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?
            .ok_or(SchedulerError::UnknownScheduleId { schedule_id })?;

        let schedule = self.row_to_schedule(&row)?;
        if !schedule
            .suggestions
            .iter()
            .any(|suggestion| suggestion.id == suggestion_id)
        {
            return Err(SchedulerError::UnknownSuggestion { suggestion_id });
        }

        sqlx::query("UPDATE weekly_schedules SET approved_suggestion_id = ?, status = ? WHERE id = ?")
            .bind(suggestion_id)
            .bind(ScheduleStatus::Approved.as_str())
            .bind(schedule_id)
            .execute(&self.pool)
            .await
            .map_err(SchedulerError::SqlxError)?;

        info!(
            "Approved suggestion {} on schedule {}",
            suggestion_id, schedule_id
        );
        Ok(AckResponse {
            message: "Suggestion approved successfully".to_string(),
        })
    }

    pub fn list_stores(&self) -> Vec<GroceryStore> {
        self.catalog.all().to_vec()
    }

    fn row_to_preferences(&self, row: &SqliteRow) -> Result<UserPreferences, SchedulerError> {
        Ok(UserPreferences {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            home_address: row.try_get("home_address")?,
            preferred_stores: from_json(&row.try_get::<String, _>("preferred_stores")?)?,
            shopping_duration_minutes: row.try_get::<i64, _>("shopping_duration_minutes")? as u32,
            preferred_hours: from_json(&row.try_get::<String, _>("preferred_hours")?)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn row_to_grocery_list(&self, row: &SqliteRow) -> Result<GroceryList, SchedulerError> {
        Ok(GroceryList {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            items: from_json(&row.try_get::<String, _>("items")?)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn row_to_schedule(&self, row: &SqliteRow) -> Result<WeeklySchedule, SchedulerError> {
        let status: String = row.try_get("status")?;

        Ok(WeeklySchedule {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            week_start: row.try_get("week_start")?,
            suggestions: from_json(&row.try_get::<String, _>("suggestions")?)?,
            approved_suggestion_id: row.try_get("approved_suggestion_id")?,
            status: status
                .parse()
                .map_err(|reason| SchedulerError::DatabaseError { reason })?,
            created_at: row.try_get("created_at")?,
        })
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, SchedulerError> {
    serde_json::to_string(value).map_err(|e| SchedulerError::InternalError {
        reason: e.to_string(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, SchedulerError> {
    serde_json::from_str(raw).map_err(|e| SchedulerError::DatabaseError {
        reason: e.to_string(),
    })
}
