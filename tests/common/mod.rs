mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from solarmap for tests
pub use solarmap::core::{
    AlbersUsa, CardImage, CardState, Dimensions, Geography, GeographyError, MapScene, Scene,
    SceneInput, TopologySource,
};
pub use solarmap::{Catalog, CatalogError, Coordinate, Dashboard, ProjectRecord};
