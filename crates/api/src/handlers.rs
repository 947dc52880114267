use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use scheduler_models::{
    AckResponse, ErrorShape, GenerateScheduleResponse, GroceryList, GroceryStore,
    PutGroceryListRequest, PutPreferencesRequest, UserPreferences, WeeklySchedule,
};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::AppState;

#[instrument(skip(state))]
pub async fn put_preferences(
    State(state): State<AppState>,
    Json(payload): Json<PutPreferencesRequest>,
) -> Result<Json<UserPreferences>, (StatusCode, Json<ErrorShape>)> {
    info!("Storing preferences for user: {}", payload.user_id);

    match state.control.put_preferences(payload).await {
        Ok(preferences) => Ok(Json(preferences)),
        Err(e) => {
            error!("Failed to store preferences: {}", e);
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserPreferences>, (StatusCode, Json<ErrorShape>)> {
    info!("Getting preferences for user: {}", user_id);

    match state.control.get_preferences(&user_id).await {
        Ok(preferences) => Ok(Json(preferences)),
        Err(e) => {
            error!("Failed to get preferences for {}: {}", user_id, e);
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn put_grocery_list(
    State(state): State<AppState>,
    Json(payload): Json<PutGroceryListRequest>,
) -> Result<Json<GroceryList>, (StatusCode, Json<ErrorShape>)> {
    info!("Storing grocery list for user: {}", payload.user_id);

    match state.control.put_grocery_list(payload).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => {
            error!("Failed to store grocery list: {}", e);
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_grocery_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<GroceryList>, (StatusCode, Json<ErrorShape>)> {
    info!("Getting grocery list for user: {}", user_id);

    match state.control.get_grocery_list(&user_id).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => {
            error!("Failed to get grocery list for {}: {}", user_id, e);
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn generate_schedule(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<GenerateScheduleResponse>, (StatusCode, Json<ErrorShape>)> {
    info!("Generating weekly schedule for user: {}", user_id);

    match state.control.generate_schedule(&user_id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to generate schedule for {}: {}", user_id, e);
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<WeeklySchedule>, (StatusCode, Json<ErrorShape>)> {
    info!("Getting weekly schedule for user: {}", user_id);

    match state.control.get_schedule(&user_id).await {
        Ok(schedule) => Ok(Json(schedule)),
        Err(e) => {
            error!("Failed to get schedule for {}: {}", user_id, e);
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn approve_suggestion(
    State(state): State<AppState>,
    Path((schedule_id, suggestion_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AckResponse>, (StatusCode, Json<ErrorShape>)> {
    info!(
        "Approving suggestion {} on schedule {}",
        suggestion_id, schedule_id
    );

    match state
        .control
        .approve_suggestion(schedule_id, suggestion_id)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!(
                "Failed to approve suggestion {} on schedule {}: {}",
                suggestion_id, schedule_id, e
            );
            let error_shape = e.to_error_shape();
            Err((
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(error_shape),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn list_stores(State(state): State<AppState>) -> Json<Vec<GroceryStore>> {
    Json(state.control.list_stores())
}

#[instrument(skip(_state))]
pub async fn root(State(_state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Grocery Scheduler API" }))
}

#[instrument(skip(_state))]
pub async fn health_check(State(_state): State<AppState>) -> Result<&'static str, StatusCode> {
    Ok("OK")
}
