use application::SelectShopApp;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<SelectShopApp>,
}

impl AppState {
    pub fn new(app: SelectShopApp) -> Self {
        Self { app: Arc::new(app) }
    }
}
