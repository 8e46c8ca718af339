//! Region boundaries decoded from a TopoJSON topology.

use std::path::PathBuf;

use geo::MultiPolygon;
use geojson::Feature;
use topojson::{TopoJson, Value};

pub const DEFAULT_TOPOLOGY_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/states-10m.json";
/// Topology object holding the state polygons
pub const STATES_OBJECT: &str = "states";

#[derive(Debug, thiserror::Error)]
pub enum GeographyError {
    #[error("topology request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read topology file: {0}")]
    Io(#[from] std::io::Error),
    #[error("topology is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("malformed topology: {0}")]
    Decode(#[from] topojson::Error),
    #[error("document is a bare geometry, not a topology")]
    NotATopology,
    #[error("invalid region geometry: {0}")]
    Geometry(#[from] geojson::Error),
    #[error("topology has no object named `{0}`")]
    MissingObject(String),
    #[error("geometry references arc {index} but the topology has {count} arcs")]
    ArcOutOfRange { index: usize, count: usize },
}

/// A named polygon, in longitude/latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub shape: MultiPolygon<f64>,
}

/// Read-only set of regions, looked up by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geography {
    regions: Vec<Region>,
}

impl Geography {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Decode the named object of a TopoJSON document.
    pub fn from_topology(bytes: &[u8], object: &str) -> Result<Self, GeographyError> {
        let TopoJson::Topology(topology) = std::str::from_utf8(bytes)?.parse::<TopoJson>()? else {
            return Err(GeographyError::NotATopology);
        };
        let named = topology
            .objects
            .iter()
            .find(|named| named.name == object)
            .ok_or_else(|| GeographyError::MissingObject(object.to_string()))?;
        check_arcs(&named.geometry.value, topology.arcs.len())?;

        let features = topojson::to_geojson(&topology, object)?;
        let mut regions = Vec::with_capacity(features.features.len());
        for feature in features.features {
            if let Some(region) = region_from_feature(feature)? {
                regions.push(region);
            }
        }
        Ok(Self::new(regions))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Where the topology document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologySource {
    Remote(String),
    File(PathBuf),
}

impl Default for TopologySource {
    fn default() -> Self {
        TopologySource::Remote(DEFAULT_TOPOLOGY_URL.to_string())
    }
}

impl TopologySource {
    /// URLs are fetched over HTTP, anything else is a local path
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            TopologySource::Remote(source.to_string())
        } else {
            TopologySource::File(PathBuf::from(source))
        }
    }

    pub async fn load(self) -> Result<Geography, GeographyError> {
        let bytes = match &self {
            TopologySource::Remote(url) => {
                log::info!("Fetching topology from {url}");
                reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .bytes()
                    .await?
                    .to_vec()
            }
            TopologySource::File(path) => {
                log::info!("Reading topology from {}", path.display());
                tokio::fs::read(path).await?
            }
        };
        let geography = Geography::from_topology(&bytes, STATES_OBJECT)?;
        log::debug!("Decoded {} regions", geography.len());
        Ok(geography)
    }
}

impl std::fmt::Display for TopologySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologySource::Remote(url) => write!(f, "{url}"),
            TopologySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Arc references must stay inside the arc table; the decoder indexes it directly.
fn check_arcs(value: &Value, count: usize) -> Result<(), GeographyError> {
    let rings: Vec<&Vec<_>> = match value {
        Value::LineString(arcs) => vec![arcs],
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines.iter().collect(),
        Value::MultiPolygon(polygons) => polygons.iter().flatten().collect(),
        Value::GeometryCollection(children) => {
            for child in children {
                check_arcs(&child.value, count)?;
            }
            return Ok(());
        }
        _ => Vec::new(),
    };
    for &index in rings.into_iter().flatten() {
        // A negative index `i` means arc `!i` walked backwards
        let position = (if index < 0 { !index } else { index }) as usize;
        if position >= count {
            return Err(GeographyError::ArcOutOfRange { index: position, count });
        }
    }
    Ok(())
}

/// Polygonal features become regions named by their `name` property; other
/// geometry kinds are skipped.
fn region_from_feature(feature: Feature) -> Result<Option<Region>, GeographyError> {
    let name = feature
        .property("name")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();
    let Some(geometry) = feature.geometry else {
        return Ok(None);
    };
    let shape = match geo::Geometry::<f64>::try_from(geometry)? {
        geo::Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
        geo::Geometry::MultiPolygon(shape) => shape,
        _ => return Ok(None),
    };
    Ok(Some(Region { name, shape }))
}
