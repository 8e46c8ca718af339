use std::path::PathBuf;

use crate::core::TopologySource;
use crate::core::viewport::DEFAULT_WIDTH;

/// Resolved start-up settings shared by the GUI and snapshot modes.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub topology: TopologySource,
    pub catalog: Option<PathBuf>,
    /// Project to select on start
    pub initial_selection: Option<String>,
    /// Render headlessly to this SVG file instead of opening a window
    pub snapshot: Option<PathBuf>,
    /// Map container width for snapshots
    pub snapshot_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            topology: TopologySource::default(),
            catalog: None,
            initial_selection: None,
            snapshot: None,
            snapshot_width: DEFAULT_WIDTH,
        }
    }
}

/// Parse a map width in pixels. Only finite, positive widths can be laid out.
pub fn parse_width(value: &str) -> Result<f64, String> {
    let width: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(format!("width must be a positive number of pixels, got {value}"))
    }
}
