pub mod card;
pub mod geography;
pub mod imagery;
pub mod palette;
pub mod projection;
pub mod scene;
pub mod svg;
pub mod viewport;

pub use card::{CardImage, CardState, CardView};
pub use geography::{Geography, GeographyError, Region, TopologySource};
pub use projection::{AlbersUsa, ProjectionError};
pub use scene::{MapScene, Marker, RegionShape, Scene, SceneInput};
pub use viewport::{Dimensions, LayoutMode};
