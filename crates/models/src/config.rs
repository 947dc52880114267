use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub cors: CorsConfig,
    pub scheduling: SchedulingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub dir: String,
    pub db_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    pub slot_step_minutes: u32,
    pub max_suggestions: usize,
    pub weekday_confidence: f64,
    pub weekend_confidence: f64,
    pub travel_time_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 8000,
            },
            data: DataConfig {
                dir: "data".to_string(),
                db_url: "sqlite://data/grocery-scheduler.db".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
            scheduling: SchedulingConfig::default(),
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            slot_step_minutes: 60,
            max_suggestions: 5,
            weekday_confidence: 0.6,
            weekend_confidence: 0.8,
            travel_time_minutes: 15,
        }
    }
}

impl Config {
    /// Deployment platforms inject these instead of editing the config file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            self.data.db_url = db_url;
        }
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Ok(bind) = std::env::var("BIND_ADDRESS") {
            self.server.bind_address = bind;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }
}
