use anyhow::Result;
use scheduler_api::start_server;
use scheduler_control::{ControlPlane, StaticCalendar};
use scheduler_models::Config;
use sqlx::SqlitePool;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

fn load_config() -> Result<Config> {
    // Try to load from various config locations
    let config_paths = ["configs/default.toml", "config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
    }

    anyhow::bail!("no config file found")
}

/// Create the SQLite file and its parent directory ahead of the pool connect.
fn prepare_database(db_url: &str) {
    let db_path = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"));

    let Some(db_path) = db_path else { return };
    if db_path == ":memory:" {
        return;
    }

    if let Some(parent) = Path::new(db_path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create DB parent directory {:?}: {}", parent, e);
        }
    }
    if !Path::new(db_path).exists() {
        if let Err(e) = fs::File::create(db_path) {
            warn!("Failed to create database file {:?}: {}", db_path, e);
        } else {
            info!("Created database file: {}", db_path);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().init();

    info!("Starting grocery scheduler server");

    // Load configuration from file or use defaults
    let mut config = load_config().unwrap_or_else(|e| {
        warn!("Failed to load config file: {}, using defaults", e);
        Config::default()
    });
    config.apply_env_overrides();
    info!("Configuration loaded: {:?}", config);

    if !config.data.dir.is_empty() {
        let _ = fs::create_dir_all(&config.data.dir);
    }
    prepare_database(&config.data.db_url);

    // Initialize database pool
    let pool = SqlitePool::connect(&config.data.db_url).await?;
    info!("Database connected");

    // Initialize control plane
    let calendar = Arc::new(StaticCalendar::new());
    let control = Arc::new(ControlPlane::new(pool, calendar, config.clone()).await?);

    // Start the API server
    let server = tokio::spawn({
        let bind = config.server.bind_address.clone();
        let port = config.server.port;
        let control = control.clone();
        let config = config.clone();
        async move {
            if let Err(e) = start_server(bind, port, control, config).await {
                error!("API server error: {}", e);
            }
        }
    });

    // Run until interrupted
    signal::ctrl_c().await?;
    info!("Shutdown signal received, stopping server");
    server.abort();

    Ok(())
}
