use scheduler_control::ControlPlane;
use scheduler_models::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub control: Arc<ControlPlane>,
}

impl AppState {
    pub fn new(config: Config, control: Arc<ControlPlane>) -> Self {
        Self { config, control }
    }
}
