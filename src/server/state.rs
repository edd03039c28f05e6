use std::sync::Arc;

use crate::app::App;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<App>,
}

impl AppState {
    pub fn new(app: App) -> Self {
        Self {
            inner: Arc::new(app),
        }
    }

    pub fn app(&self) -> &App {
        &self.inner
    }
}
