use crate::config::AppConfig;
use crate::store::PingStore;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<dyn PingStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn PingStore>, config: AppConfig) -> Self {
        Self { store, config }
    }
}
