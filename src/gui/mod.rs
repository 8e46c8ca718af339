mod app;
mod components;
mod message;
mod state;
mod widgets;

use std::sync::Arc;

use iced::Size;

pub use app::{SolarMapApp, window_size};
pub use message::Message;
pub use state::AppState;

use crate::catalog::Catalog;
use crate::config::AppConfig;

/// Requested size; the layout follows whatever the window manager grants.
const WINDOW_SIZE: Size = Size::new(1280.0, 800.0);

/// Open the dashboard window and block until it is closed.
pub fn run(config: AppConfig, catalog: Arc<Catalog>) -> iced::Result {
    let requested_width = f64::from(WINDOW_SIZE.width);
    iced::application(
        move || SolarMapApp::new(config.clone(), catalog.clone(), requested_width),
        SolarMapApp::update,
        SolarMapApp::view,
    )
    .title(SolarMapApp::title)
    .subscription(SolarMapApp::subscription)
    .window_size(WINDOW_SIZE)
    .run()
}
