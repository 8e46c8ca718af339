use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::core::imagery;
use crate::models::ProjectRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// Directory the built-in catalog's relative image paths live under
pub fn builtin_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate project id `{0}`")]
    DuplicateId(String),
    #[error("project `{id}` has invalid capacity {capacity_mw} MW")]
    InvalidCapacity { id: String, capacity_mw: f64 },
    #[error("project `{id}` has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinate {
        id: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered, immutable list of project records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid records
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if !(project.capacity_mw.is_finite() && project.capacity_mw > 0.0) {
                return Err(CatalogError::InvalidCapacity {
                    id: project.id.clone(),
                    capacity_mw: project.capacity_mw,
                });
            }
            if !project.coordinates.is_valid() {
                return Err(CatalogError::InvalidCoordinate {
                    id: project.id.clone(),
                    latitude: project.coordinates.latitude,
                    longitude: project.coordinates.longitude,
                });
            }
        }
        Ok(Self { projects })
    }

    /// The catalog compiled into the binary, with images resolved
    /// against the bundled `data/` directory
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::from_json(BUILTIN_CATALOG)?.with_image_base(&builtin_data_dir()))
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// Read a catalog file. Relative image paths are taken relative to
    /// the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        Ok(match path.parent() {
            Some(base) => catalog.with_image_base(base),
            None => catalog,
        })
    }

    /// Anchor relative local image paths at `base`. URLs and absolute
    /// paths are left alone.
    pub fn with_image_base(mut self, base: &Path) -> Self {
        for project in &mut self.projects {
            let url = &project.image_url;
            if imagery::is_remote(url) || Path::new(url).is_absolute() {
                continue;
            }
            let resolved = base.join(&project.image_url);
            log::trace!("Resolved image for {} to {}", project.id, resolved.display());
            project.image_url = resolved.to_string_lossy().into_owned();
        }
        self
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn total_capacity_mw(&self) -> f64 {
        self.projects.iter().map(|p| p.capacity_mw).sum()
    }

    /// Distinct state codes, matched case-sensitively against region names
    pub fn active_regions(&self) -> BTreeSet<&str> {
        self.projects.iter().map(|p| p.state_code.as_str()).collect()
    }
}
