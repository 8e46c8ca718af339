pub mod catalog;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod models;
pub mod snapshot;

pub use catalog::{Catalog, CatalogError};
pub use config::AppConfig;
pub use dashboard::{Dashboard, HeaderStats, ListEntry, Selection};
pub use models::{Coordinate, ProjectRecord};

#[cfg(feature = "gui")]
pub mod gui;
