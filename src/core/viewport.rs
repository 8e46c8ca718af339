pub const DEFAULT_WIDTH: f64 = 960.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const MAX_MAP_HEIGHT: f64 = 600.0;
pub const MAP_ASPECT_RATIO: f64 = 0.65;
/// Maps at least this wide label every marker, not only the selected one
pub const UNIVERSAL_LABEL_WIDTH: f64 = 1200.0;

/// Window widths for the shell layout
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;
pub const HEADER_STATS_MIN_WIDTH: f64 = 768.0;

/// Pixel size of the map drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Dimensions {
    /// Derive the drawing size from the measured container width.
    pub fn from_container_width(width: f64) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        Self {
            width,
            height: MAX_MAP_HEIGHT.min(width * MAP_ASPECT_RATIO),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn labels_everywhere(&self) -> bool {
        self.width >= UNIVERSAL_LABEL_WIDTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Sidebar list next to the map
    Desktop,
    /// Horizontal list under the map
    Mobile,
}

impl LayoutMode {
    pub fn for_window_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }
}

pub fn shows_header_stats(window_width: f64) -> bool {
    window_width >= HEADER_STATS_MIN_WIDTH
}
