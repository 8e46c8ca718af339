use std::sync::Arc;

use crate::catalog::Catalog;
use crate::core::viewport::{LayoutMode, shows_header_stats};
use crate::dashboard::Dashboard;

/// State owned by the shell and handed down read-only.
#[derive(Debug)]
pub struct AppState {
    pub dashboard: Dashboard,
    pub window_width: f64,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, window_width: f64) -> Self {
        Self {
            dashboard: Dashboard::new(catalog),
            window_width,
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_window_width(self.window_width)
    }

    pub fn shows_header_stats(&self) -> bool {
        shows_header_stats(self.window_width)
    }
}
