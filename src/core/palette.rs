use std::fmt;

/// RGBA color with an 8-bit channel per component and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Color {
    /// CSS notation: `#rrggbb`, or `rgba(r,g,b,a)` when translucent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const ACTIVE_REGION: Color = Color::rgb(0x1e, 0x3a, 0x8a);
pub const INACTIVE_REGION: Color = Color::rgb(0xbf, 0xdb, 0xfe);
pub const REGION_STROKE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const REGION_STROKE_WIDTH: f64 = 1.5;

pub const MARKER_FILL: Color = Color::rgb(0xf9, 0x73, 0x16);
pub const MARKER_STROKE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const MARKER_STROKE_WIDTH: f64 = 2.0;
pub const MARKER_HALO: Color = Color::rgba(0xf9, 0x73, 0x16, 0.3);
pub const MARKER_LABEL: Color = Color::rgb(0x1e, 0x3a, 0x8a);

pub const MAP_BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
pub const SELECTED_ROW: Color = Color::rgb(0xff, 0xf7, 0xed);
pub const SELECTED_BORDER: Color = Color::rgb(0xf9, 0x73, 0x16);
pub const ROW_BACKGROUND: Color = Color::rgb(0xf9, 0xfa, 0xfb);
pub const ROW_BORDER: Color = Color::rgb(0xf3, 0xf4, 0xf6);
pub const MUTED_TEXT: Color = Color::rgb(0x6b, 0x72, 0x80);
pub const STATUS_GREEN: Color = Color::rgb(0x15, 0x80, 0x3d);
