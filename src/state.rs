use crate::config::AppConfig;
use crate::services::backend::BackendClient;

pub struct AppState {
    pub config: AppConfig,
    pub backend: Box<dyn BackendClient>,
}
