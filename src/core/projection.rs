//! Composite Albers projection for the United States.
//!
//! The lower 48 states use a conic equal-area projection; Alaska and Hawaii
//! are drawn as scaled insets below it. A point is accepted by the first
//! sub-projection whose clip extent contains it, so anything outside the three
//! extents has no screen position at all.

use geo::{Centroid, Coord, MapCoords, MultiPolygon, Polygon};
use proj4rs::{proj::Proj, transform::transform};

use crate::core::viewport::Dimensions;

const EPSILON: f64 = 1e-6;
/// Pixels per unit of projected distance for every pixel of map width
pub const SCALE_PER_WIDTH: f64 = 1.3;
/// Unit sphere, so projected distances are in sphere radii
const GEOGRAPHIC: &str = "+proj=longlat +R=1 +no_defs";

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid projection `{definition}`: {source}")]
    Definition {
        definition: String,
        source: proj4rs::errors::Error,
    },
    #[error("projection `{definition}` cannot place its own centre: {source}")]
    Center {
        definition: String,
        source: proj4rs::errors::Error,
    },
}

fn build(definition: &str) -> Result<Proj, ProjectionError> {
    Proj::from_proj_string(definition).map_err(|source| ProjectionError::Definition {
        definition: definition.to_string(),
        source,
    })
}

/// Albers conic equal-area projection on the unit sphere, shifted so that
/// `center` lands on the translate point and scaled to pixels.
#[derive(Debug)]
pub struct ConicEqualArea {
    geographic: Proj,
    conic: Proj,
    /// Projected position of the centre, in sphere radii
    origin: Coord<f64>,
    scale: f64,
    translate: Coord<f64>,
}

impl ConicEqualArea {
    /// `parallels`, the central meridian and `center` are in degrees
    pub fn new(
        parallels: (f64, f64),
        central_meridian: f64,
        center: Coord<f64>,
    ) -> Result<Self, ProjectionError> {
        let definition = format!(
            "+proj=aea +lat_1={} +lat_2={} +lon_0={central_meridian} +R=1 +no_defs",
            parallels.0, parallels.1
        );
        let mut projection = Self {
            geographic: build(GEOGRAPHIC)?,
            conic: build(&definition)?,
            origin: Coord { x: 0.0, y: 0.0 },
            scale: 1.0,
            translate: Coord { x: 0.0, y: 0.0 },
        };
        projection.origin = projection
            .raw(center)
            .map_err(|source| ProjectionError::Center { definition, source })?;
        Ok(projection)
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Coord { x, y };
        self
    }

    fn raw(&self, coord: Coord<f64>) -> Result<Coord<f64>, proj4rs::errors::Error> {
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(&self.geographic, &self.conic, &mut point)?;
        Ok(Coord {
            x: point.0,
            y: point.1,
        })
    }

    /// Project a lon/lat coordinate (degrees) to pixels, without clipping.
    /// Screen y grows downwards.
    pub fn project(&self, coord: Coord<f64>) -> Result<Coord<f64>, proj4rs::errors::Error> {
        let raw = self.raw(coord)?;
        Ok(Coord {
            x: self.translate.x + self.scale * (raw.x - self.origin.x),
            y: self.translate.y - self.scale * (raw.y - self.origin.y),
        })
    }
}

/// Axis-aligned pixel rectangle, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipExtent {
    pub min: Coord<f64>,
    pub max: Coord<f64>,
}

impl ClipExtent {
    pub fn contains(&self, point: Coord<f64>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}

#[derive(Debug)]
struct Inset {
    projection: ConicEqualArea,
    extent: ClipExtent,
}

impl Inset {
    fn project(&self, coord: Coord<f64>) -> Option<Coord<f64>> {
        let point = self.projection.project(coord).ok()?;
        self.extent.contains(point).then_some(point)
    }
}

#[derive(Debug)]
pub struct AlbersUsa {
    lower48: Inset,
    alaska: Inset,
    hawaii: Inset,
}

impl AlbersUsa {
    pub fn new(scale: f64, translate: (f64, f64)) -> Result<Self, ProjectionError> {
        let k = scale;
        let (x, y) = translate;
        let extent = |x0: f64, y0: f64, x1: f64, y1: f64| ClipExtent {
            min: Coord { x: x0, y: y0 },
            max: Coord { x: x1, y: y1 },
        };

        let lower48 = Inset {
            projection: ConicEqualArea::new((29.5, 45.5), -96.0, Coord { x: -96.6, y: 38.7 })?
                .with_scale(k)
                .with_translate(x, y),
            extent: extent(x - 0.455 * k, y - 0.238 * k, x + 0.455 * k, y + 0.238 * k),
        };
        let alaska = Inset {
            projection: ConicEqualArea::new((55.0, 65.0), -154.0, Coord { x: -156.0, y: 58.5 })?
                .with_scale(k * 0.35)
                .with_translate(x - 0.307 * k, y + 0.201 * k),
            extent: extent(
                x - 0.425 * k + EPSILON,
                y + 0.120 * k + EPSILON,
                x - 0.214 * k - EPSILON,
                y + 0.234 * k - EPSILON,
            ),
        };
        let hawaii = Inset {
            projection: ConicEqualArea::new((8.0, 18.0), -157.0, Coord { x: -160.0, y: 19.9 })?
                .with_scale(k)
                .with_translate(x - 0.205 * k, y + 0.212 * k),
            extent: extent(
                x - 0.214 * k + EPSILON,
                y + 0.166 * k + EPSILON,
                x - 0.115 * k - EPSILON,
                y + 0.234 * k - EPSILON,
            ),
        };

        Ok(Self {
            lower48,
            alaska,
            hawaii,
        })
    }

    /// Projection filling a map of the given size
    pub fn for_dimensions(dimensions: Dimensions) -> Result<Self, ProjectionError> {
        Self::new(dimensions.width * SCALE_PER_WIDTH, dimensions.center())
    }

    fn insets(&self) -> [&Inset; 3] {
        [&self.lower48, &self.alaska, &self.hawaii]
    }

    /// Pixel position of a lon/lat coordinate, or `None` outside every inset.
    pub fn project(&self, coord: Coord<f64>) -> Option<Coord<f64>> {
        if !(coord.x.is_finite() && coord.y.is_finite()) {
            return None;
        }
        self.insets().into_iter().find_map(|inset| inset.project(coord))
    }

    /// Project a whole polygon with the inset that owns its centroid.
    pub fn project_polygon(&self, polygon: &Polygon<f64>) -> Option<Polygon<f64>> {
        let centroid = polygon.centroid()?;
        let inset = self
            .insets()
            .into_iter()
            .find(|inset| inset.project(centroid.0).is_some())?;
        polygon.try_map_coords(|c| inset.projection.project(c)).ok()
    }

    /// Project every polygon that lands in an inset; `None` if none do.
    pub fn project_multi_polygon(&self, shape: &MultiPolygon<f64>) -> Option<MultiPolygon<f64>> {
        let projected: Vec<Polygon<f64>> = shape
            .0
            .iter()
            .filter_map(|polygon| self.project_polygon(polygon))
            .collect();
        if projected.is_empty() {
            None
        } else {
            Some(MultiPolygon::new(projected))
        }
    }
}
