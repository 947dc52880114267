use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Preferences
        .route("/api/preferences", post(put_preferences))
        .route("/api/preferences/:user_id", get(get_preferences))
        // Grocery list
        .route("/api/grocery-list", post(put_grocery_list))
        .route("/api/grocery-list/:user_id", get(get_grocery_list))
        // Weekly schedule
        .route("/api/schedule/generate/:user_id", post(generate_schedule))
        .route("/api/schedule/:user_id", get(get_schedule))
        .route(
            "/api/schedule/approve/:schedule_id/:suggestion_id",
            post(approve_suggestion),
        )
        // Store catalog
        .route("/api/stores", get(list_stores))
        // Service banner and health
        .route("/api/", get(root))
        .route("/healthz", get(health_check))
}

pub fn build_router(state: AppState) -> Router {
    create_router().with_state(state)
}
