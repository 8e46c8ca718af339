//! Pure description of one map frame.
//!
//! [`render`] turns the catalog, the loaded geography, the map size and the
//! current selection into a [`Scene`]. Painters (the GUI canvas, the SVG
//! exporter) only ever draw a scene; they never decide what is on the map.

use geo::{Contains, Coord, MultiPolygon, Point};

use crate::catalog::Catalog;
use crate::core::geography::Geography;
use crate::core::palette::{self, Color};
use crate::core::projection::{AlbersUsa, ProjectionError};
use crate::core::viewport::Dimensions;

pub const MARKER_RADIUS: f64 = 6.0;
pub const SELECTED_MARKER_RADIUS: f64 = 8.0;
pub const HALO_RADIUS: f64 = 15.0;
/// Extra slack around a marker dot that still counts as a click on it
pub const HIT_SLOP: f64 = 3.0;
pub const LABEL_OFFSET: (f64, f64) = (12.0, 4.0);
pub const LABEL_SIZE: f64 = 10.0;

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub catalog: &'a Catalog,
    pub geography: Option<&'a Geography>,
    pub dimensions: Dimensions,
    pub selected: Option<&'a str>,
    /// Last topology load error, shown on the loading overlay
    pub failure: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// Geography not available yet; only a loading overlay is shown
    Loading { failure: Option<String> },
    Map(MapScene),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub dimensions: Dimensions,
    pub regions: Vec<RegionShape>,
    /// In catalog order; later markers are drawn on top
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub name: String,
    /// Pixel-space outline
    pub shape: MultiPolygon<f64>,
    pub active: bool,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub project_id: String,
    pub position: Coord<f64>,
    pub radius: f64,
    pub selected: bool,
    pub halo_radius: Option<f64>,
    pub label: Option<Label>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Coord<f64>,
}

impl Marker {
    pub fn hit(&self, point: Coord<f64>) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        (dx * dx + dy * dy).sqrt() <= self.radius + HIT_SLOP
    }
}

impl Scene {
    pub fn is_loading(&self) -> bool {
        matches!(self, Scene::Loading { .. })
    }

    pub fn map(&self) -> Option<&MapScene> {
        match self {
            Scene::Map(map) => Some(map),
            Scene::Loading { .. } => None,
        }
    }
}

impl MapScene {
    /// Topmost marker under a pixel position
    pub fn marker_at(&self, point: Coord<f64>) -> Option<&Marker> {
        self.markers.iter().rev().find(|marker| marker.hit(point))
    }

    pub fn region_at(&self, point: Coord<f64>) -> Option<&RegionShape> {
        region_at(&self.regions, point)
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.selected)
    }

    pub fn marker(&self, project_id: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.project_id == project_id)
    }

    pub fn active_regions(&self) -> impl Iterator<Item = &RegionShape> {
        self.regions.iter().filter(|region| region.active)
    }
}

/// First region whose outline contains a pixel position.
pub fn region_at(regions: &[RegionShape], point: Coord<f64>) -> Option<&RegionShape> {
    let point = Point::from(point);
    regions.iter().find(|region| region.shape.contains(&point))
}

/// Build the full scene for the given state.
pub fn render(input: &SceneInput<'_>) -> Result<Scene, ProjectionError> {
    let Some(geography) = input.geography else {
        return Ok(Scene::Loading {
            failure: input.failure.map(str::to_string),
        });
    };
    Ok(Scene::Map(MapScene {
        dimensions: input.dimensions,
        regions: render_regions(input.catalog, geography, input.dimensions)?,
        markers: render_markers(input.catalog, input.dimensions, input.selected)?,
    }))
}

pub fn render_regions(
    catalog: &Catalog,
    geography: &Geography,
    dimensions: Dimensions,
) -> Result<Vec<RegionShape>, ProjectionError> {
    let projection = AlbersUsa::for_dimensions(dimensions)?;
    let active_names = catalog.active_regions();

    let regions: Vec<RegionShape> = geography
        .regions()
        .iter()
        .filter_map(|region| {
            let shape = projection.project_multi_polygon(&region.shape)?;
            let active = active_names.contains(region.name.as_str());
            Some(RegionShape {
                name: region.name.clone(),
                shape,
                active,
                fill: if active {
                    palette::ACTIVE_REGION
                } else {
                    palette::INACTIVE_REGION
                },
            })
        })
        .collect();
    Ok(regions)
}

/// Markers only; enough for hit testing without re-projecting regions.
pub fn render_markers(
    catalog: &Catalog,
    dimensions: Dimensions,
    selected: Option<&str>,
) -> Result<Vec<Marker>, ProjectionError> {
    let projection = AlbersUsa::for_dimensions(dimensions)?;
    let labels_everywhere = dimensions.labels_everywhere();

    let markers: Vec<Marker> = catalog
        .projects()
        .iter()
        .filter_map(|project| {
            let Some(position) = projection.project(project.coordinates.to_coord()) else {
                log::debug!("Project {} is outside the projected area", project.id);
                return None;
            };
            let is_selected = selected == Some(project.id.as_str());
            let label = (is_selected || labels_everywhere).then(|| Label {
                text: project.name.clone(),
                position: Coord {
                    x: position.x + LABEL_OFFSET.0,
                    y: position.y + LABEL_OFFSET.1,
                },
            });
            Some(Marker {
                project_id: project.id.clone(),
                position,
                radius: if is_selected {
                    SELECTED_MARKER_RADIUS
                } else {
                    MARKER_RADIUS
                },
                selected: is_selected,
                halo_radius: is_selected.then_some(HALO_RADIUS),
                label,
            })
        })
        .collect();
    Ok(markers)
}
