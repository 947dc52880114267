pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use handlers::*;
pub use middleware::*;
pub use routes::*;
pub use state::*;

use axum::Router;
use scheduler_control::ControlPlane;
use scheduler_models::Config;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_server(
    bind: String,
    port: u16,
    control: Arc<ControlPlane>,
    config: Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cors = cors_layer(&config.cors.allowed_origins);
    let app_state = AppState::new(config, control);

    let app = Router::new().merge(build_router(app_state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port)).await?;
    info!("Grocery scheduler API listening on {}:{}", bind, port);

    axum::serve(listener, app).await?;
    Ok(())
}
