use serde::Deserialize;

/// Geographic position of a project site, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "long", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }

    /// Position as a `geo` coordinate (x = longitude, y = latitude)
    pub fn to_coord(&self) -> geo::Coord<f64> {
        geo::coord! { x: self.longitude, y: self.latitude }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Must equal a region name in the topology for the region to be highlighted
    #[serde(rename = "stateCode")]
    pub state_code: String,
    #[serde(rename = "capacityMW")]
    pub capacity_mw: f64,
    pub coordinates: Coordinate,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl ProjectRecord {
    /// Capacity as shown on list rows and the detail card, e.g. `120 MW`
    pub fn capacity_label(&self) -> String {
        format!("{} MW", display_number(self.capacity_mw))
    }
}

/// Plain number rendering: whole values without a fractional part.
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Grouped rendering for header totals, e.g. `1,250` or `1,250.5`.
pub fn grouped_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = format!("{:.3}", abs.fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction.len() > 1 {
        format!("{sign}{grouped}{fraction}")
    } else {
        format!("{sign}{grouped}")
    }
}
